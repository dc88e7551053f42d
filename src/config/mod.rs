//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── home       # [home]
//! │   ├── preset/    # [preset.pages|blog|docs|theme]
//! │   ├── site/      # [site]
//! │   └── theme/     # [theme.navbar|footer|prism]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath, config_fields!
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config is built once per command (`load` → `finalize` → `validate`)
//! and handed to everything else as `&SiteConfig`. Placeholders such as
//! `{year}` are resolved during `finalize`, so rendering never consults the
//! clock.

#[macro_use]
pub mod types;
pub mod section;
mod util;

use util::{find_config_file, split_site_url};

// Re-export from section/
pub use section::{
    BlogPresetConfig, BrokenLinkPolicy, BuildSectionConfig, CallToAction, CodeTheme,
    DocsPresetConfig, Feature, FeedOptions, FeedType, FooterColumn, FooterConfig, FooterStyle,
    HomeConfig, NavItem, NavLink, NavPosition, NavTarget, NavbarConfig, PagesPresetConfig,
    PresetSectionConfig, SiteInfoConfig, ThemeSectionConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands, ValidateArgs},
    log,
    utils::{date::Date, path::normalize_path},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity and link policy
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Content sources: pages, blog, docs, custom CSS
    #[serde(default)]
    pub preset: PresetSectionConfig,

    /// Navbar, footer and code highlighting
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Landing page
    #[serde(default)]
    pub home: HomeConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration for a command.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'folio init' to create a new site",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli, Date::today().year);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, year: u16) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.apply_command_options(cli);
        self.normalize_paths(&root);
        self.resolve_placeholders(year);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Unknown keys are usually typos; report them but keep going.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Validate { args } => self.apply_validate_args(args),
            Commands::Init { .. } | Commands::Dump { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        self.build.clean = args.clean;

        // The URL path, if any, becomes base_url.
        if let Some(url) = &args.site_url {
            match split_site_url(url) {
                Some((origin, base_url)) => {
                    self.site.url = origin;
                    self.site.base_url = base_url;
                }
                None => self.site.url = url.clone(),
            }
        }
    }

    /// `--warn-only` downgrades a fatal link policy.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        if args.warn_only && self.site.on_broken_links.is_fatal() {
            self.site.on_broken_links = BrokenLinkPolicy::Warn;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization and placeholders
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        self.root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);

        let root = self.root.clone();
        self.build.normalize(&root);
        self.preset.normalize(&root);
    }

    /// Expand `{year}` and `{title}`.
    fn resolve_placeholders(&mut self, year: u16) {
        self.theme.footer.resolve_copyright(year);
        if let Some(feed) = &mut self.preset.blog.feed {
            feed.resolve_copyright(year);
        }
        self.home.resolve_title(&self.site.title);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&self.build.static_dir, &mut diag);
        self.preset.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.home.validate(&mut diag);
        self.build.validate(&self.root, &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Build a config for a site rooted at `root`, as `load` would.
    #[cfg(test)]
    pub fn test_finalize(mut self, root: &Path, cli: &Cli, year: u16) -> Self {
        self.config_path = root.join(&cli.config);
        self.finalize(cli, year);
        self
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\nurl = \"https://example.com\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// `test_parse_config`, finalized for a site rooted at `root` as `folio build` would.
#[cfg(test)]
pub fn test_site_config(root: &Path, extra: &str) -> SiteConfig {
    use clap::Parser;
    let cli = Cli::parse_from(["folio", "build"]);
    test_parse_config(extra).test_finalize(root, &cli, 2022)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("folio").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\ntitle = \"My Blog\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert!(config.build.minify);
        assert!(config.preset.blog.enable);
        assert!(!config.preset.docs.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\n[theme.navbar]\ntitle = \"T\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        let config =
            SiteConfig::from_str("[site]\ntitle = \"\"\nurl = \"https://example.com\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("site.title"));
    }

    #[test]
    fn test_missing_title_rejected() {
        let config = SiteConfig::from_str("[site]\nurl = \"https://example.com\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("site.title"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let config = SiteConfig::from_str("[home]\ntitle = \"\"").unwrap();
        let err = config.validate().unwrap_err();
        let diag = err.downcast_ref::<ConfigError>().unwrap();
        let ConfigError::Diagnostics(diag) = diag else {
            panic!("expected diagnostics");
        };
        // site.title, site.url, home.title
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_finalize_resolves_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_parse_config(
            "[theme.footer]\ncopyright = \"Copyright © {year} FullsApps\"\n\
             [preset.blog.feed]\ncopyright = \"© {year}\"",
        )
        .test_finalize(dir.path(), &cli(&["build"]), 2022);

        assert_eq!(config.theme.footer.copyright, "Copyright © 2022 FullsApps");
        assert_eq!(config.preset.blog.feed.as_ref().unwrap().copyright, "© 2022");
        assert_eq!(config.home.title, "Hello from Test");
    }

    #[test]
    fn test_finalize_normalizes_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_parse_config("").test_finalize(dir.path(), &cli(&["build"]), 2022);
        let root = normalize_path(dir.path());
        assert_eq!(config.root, root);
        assert_eq!(config.build.output, root.join("build"));
        assert_eq!(config.preset.blog.path, root.join("blog"));
    }

    #[test]
    fn test_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_parse_config("").test_finalize(
            dir.path(),
            &cli(&[
                "-o",
                "dist",
                "build",
                "--minify=false",
                "--clean",
                "--site-url",
                "https://peterdyer7.github.io/fullsapps-blog",
            ]),
            2022,
        );
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(config.site.url, "https://peterdyer7.github.io");
        assert_eq!(config.site.base_url, "/fullsapps-blog/");
        assert!(config.build.output.ends_with("dist"));
    }

    #[test]
    fn test_warn_only_downgrades_throw() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            test_parse_config("").test_finalize(dir.path(), &cli(&["validate", "-w"]), 2022);
        assert_eq!(config.site.on_broken_links, BrokenLinkPolicy::Warn);

        let config = test_parse_config("on_broken_links = \"ignore\"").test_finalize(
            dir.path(),
            &cli(&["validate", "-w"]),
            2022,
        );
        assert_eq!(config.site.on_broken_links, BrokenLinkPolicy::Ignore);
    }

    #[test]
    fn test_root_relative() {
        let config = SiteConfig {
            root: PathBuf::from("/site"),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.root_relative("/site/blog/post.html"),
            Path::new("blog/post.html")
        );
    }
}
