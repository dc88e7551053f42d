//! `folio dump`: the resolved configuration as JSON.
//!
//! Feed options and other preset values are not interpreted by folio
//! beyond validation; this is how downstream tooling reads them.

use anyhow::Result;

use crate::config::SiteConfig;

/// Serialize the finalized configuration.
pub fn to_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}

/// Print the finalized configuration to stdout.
pub fn dump_config(config: &SiteConfig, pretty: bool) -> Result<()> {
    println!("{}", to_json(config, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_dump_forwards_feed_options() {
        let config = test_parse_config(
            "[preset.blog.feed]\ntype = \"rss\"\ncopyright = \"(c) 2022\"",
        );
        let value: serde_json::Value = serde_json::from_str(&to_json(&config, false).unwrap()).unwrap();
        assert_eq!(value["preset"]["blog"]["feed"]["type"], "rss");
        assert_eq!(value["site"]["title"], "Test");
    }

    #[test]
    fn test_dump_keeps_nav_targets() {
        let config = test_parse_config(
            "[[theme.navbar.items]]\nlabel = \"Blog\"\nto = \"/blog\"\n\
             [[theme.navbar.items]]\nlabel = \"GitHub\"\nhref = \"https://github.com\"\nposition = \"right\"",
        );
        let json = to_json(&config, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = &value["theme"]["navbar"]["items"];
        assert_eq!(items[0]["to"], "/blog");
        assert_eq!(items[1]["href"], "https://github.com");
        assert!(json.contains('\n'));
    }
}
