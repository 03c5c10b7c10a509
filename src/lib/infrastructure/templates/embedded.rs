//! Templates compiled into the binary

use std::borrow::Cow;

use crate::domain::communication::templates::{AssetStore, TemplateError};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout", include_str!("../../../../templates/layout.html")),
    (
        "notification",
        include_str!("../../../../templates/notification.html"),
    ),
    (
        "password_reset",
        include_str!("../../../../templates/password_reset.html"),
    ),
    (
        "verify_email",
        include_str!("../../../../templates/verify_email.html"),
    ),
];

/// The built-in template set
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    /// Names of all built-in templates
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(name, _)| *name)
    }
}

impl AssetStore for EmbeddedAssets {
    fn open(&self, name: &str) -> Result<Cow<'static, str>, TemplateError> {
        TEMPLATES
            .iter()
            .find(|(template, _)| *template == name)
            .map(|(_, content)| Cow::Borrowed(*content))
            .ok_or_else(|| TemplateError::AssetNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use super::*;
    use crate::domain::communication::templates::{
        Composer, PropertyMap, PropertyValue, TemplateRenderer,
    };

    #[test]
    fn test_open_known_template() -> TestResult {
        let layout = EmbeddedAssets.open("layout")?;

        assert!(layout.contains("@main"));

        Ok(())
    }

    #[test]
    fn test_open_unknown_template() {
        let result = EmbeddedAssets.open("layout.html");

        assert!(matches!(result, Err(TemplateError::AssetNotFound(_))));
    }

    #[test]
    fn test_every_component_renders_into_layout() -> TestResult {
        let mut layout_props = PropertyMap::new();
        layout_props.insert("app_url".to_string(), PropertyValue::from("https://example.com"));

        let composer = Composer::new(Arc::new(EmbeddedAssets), "layout", "main", &layout_props)?;

        for name in EmbeddedAssets.names().filter(|name| *name != "layout") {
            let rendered = composer.render(name, &PropertyMap::new())?;

            assert!(!rendered.contains("@main"), "{name} was not spliced in");
            assert!(rendered.contains("https://example.com"));
        }

        Ok(())
    }

    #[test]
    fn test_verify_email_props() -> TestResult {
        let composer = Composer::new(
            Arc::new(EmbeddedAssets),
            "layout",
            "main",
            &PropertyMap::new(),
        )?;

        let mut props = PropertyMap::new();
        props.insert("name".to_string(), PropertyValue::from("Ada"));
        props.insert("link".to_string(), PropertyValue::from("https://example.com/verify"));

        let rendered = composer.render("verify_email", &props)?;

        assert!(rendered.contains("Hi Ada,"));
        assert!(rendered.contains("href=\"https://example.com/verify\""));

        Ok(())
    }
}
