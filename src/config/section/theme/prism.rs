//! `[theme.prism]` code highlighting themes.

use serde::{Deserialize, Serialize};

/// Named highlighting palettes shipped with the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodeTheme {
    Github,
    Dracula,
    Duotone,
    NightOwl,
    NightOwlLight,
    OceanicNext,
    Palenight,
    VsDark,
    VsLight,
}

impl CodeTheme {
    /// Name used in the `data-code-theme*` attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Dracula => "dracula",
            Self::Duotone => "duotone",
            Self::NightOwl => "nightOwl",
            Self::NightOwlLight => "nightOwlLight",
            Self::OceanicNext => "oceanicNext",
            Self::Palenight => "palenight",
            Self::VsDark => "vsDark",
            Self::VsLight => "vsLight",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Palette for light mode.
    pub theme: CodeTheme,
    /// Palette for dark mode.
    pub dark_theme: CodeTheme,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: CodeTheme::Github,
            dark_theme: CodeTheme::Dracula,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.prism.theme, CodeTheme::Github);
        assert_eq!(config.theme.prism.dark_theme, CodeTheme::Dracula);
    }

    #[test]
    fn test_camel_case_names() {
        let config = test_parse_config("[theme.prism]\ndark_theme = \"nightOwl\"");
        assert_eq!(config.theme.prism.dark_theme.as_str(), "nightOwl");
    }
}
