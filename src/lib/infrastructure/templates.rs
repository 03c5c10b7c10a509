//! Template asset stores and layout configuration

use std::path::PathBuf;

use clap::Parser;

use crate::domain::communication::templates::{PropertyMap, PropertyValue};

mod directory;
mod embedded;

pub use directory::DirectoryAssets;
pub use embedded::EmbeddedAssets;

/// Template configuration
#[derive(Clone, Debug, Parser)]
pub struct TemplateConfig {
    /// Load templates from this directory instead of the built-in set
    #[arg(long, env = "TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// The layout every template component is rendered into
    #[arg(long, env = "TEMPLATE_LAYOUT", default_value = "layout")]
    pub layout: String,

    /// The layout section components replace (`@<section>`)
    #[arg(long, env = "TEMPLATE_SECTION", default_value = "main")]
    pub section: String,

    /// GitHub link shown in the layout
    #[arg(long, env = "GITHUB_URL", default_value = "")]
    pub github_url: String,

    /// Discord link shown in the layout
    #[arg(long, env = "DISCORD_URL", default_value = "")]
    pub discord_url: String,

    /// Instagram link shown in the layout
    #[arg(long, env = "INSTAGRAM_URL", default_value = "")]
    pub instagram_url: String,

    /// Ko-fi link shown in the layout
    #[arg(long, env = "KOFI_URL", default_value = "")]
    pub kofi_url: String,

    /// Application URL shown in the layout
    #[arg(long, env = "APP_URL", default_value = "")]
    pub app_url: String,

    /// Application logo shown in the layout
    #[arg(long, env = "APP_LOGO_URL", default_value = "")]
    pub app_logo_url: String,
}

impl TemplateConfig {
    /// Properties substituted into the layout
    pub fn layout_props(&self) -> PropertyMap {
        [
            ("github_url", &self.github_url),
            ("discord_url", &self.discord_url),
            ("instagram_url", &self.instagram_url),
            ("kofi_url", &self.kofi_url),
            ("app_url", &self.app_url),
            ("app_logo_url", &self.app_logo_url),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), PropertyValue::from(value.as_str())))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_config_defaults() {
        let config = TemplateConfig::parse_from(["server", "--app-url", "https://example.com"]);

        assert_eq!(config.layout, "layout");
        assert_eq!(config.section, "main");
        assert!(config.templates_dir.is_none());

        let props = config.layout_props();

        assert_eq!(props.len(), 6);
        assert_eq!(props["app_url"].to_string(), "https://example.com");
        assert_eq!(props["kofi_url"].to_string(), "");
    }
}
