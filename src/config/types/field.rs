//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Generated per section with [`config_fields!`], so diagnostics can
/// name the offending key without repeating string literals:
///
/// ```ignore
/// config_fields!(SiteInfoConfig => SiteInfoFields, "site" { title, url });
///
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Declare `Type::FIELDS`, one `FieldPath` per listed key under `section`.
///
/// Use `name as "key"` when the TOML key differs from the Rust field.
macro_rules! config_fields {
    (@path $section:literal, $name:ident) => {
        concat!($section, ".", stringify!($name))
    };
    (@path $section:literal, $name:ident, $toml:literal) => {
        concat!($section, ".", $toml)
    };
    ($ty:ident => $fields:ident, $section:literal { $($name:ident $(as $toml:literal)?),* $(,)? }) => {
        #[allow(dead_code)]
        pub struct $fields {
            $(pub $name: $crate::config::FieldPath,)*
        }

        impl $ty {
            #[allow(dead_code)]
            pub const FIELDS: $fields = $fields {
                $($name: $crate::config::FieldPath::new(
                    config_fields!(@path $section, $name $(, $toml)?)
                ),)*
            };
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Demo;
    config_fields!(Demo => DemoFields, "preset.blog" { route_base_path, kind as "type" });

    #[test]
    fn test_generated_paths() {
        assert_eq!(Demo::FIELDS.route_base_path.as_str(), "preset.blog.route_base_path");
        assert_eq!(Demo::FIELDS.kind.as_ref(), "preset.blog.type");
    }
}
