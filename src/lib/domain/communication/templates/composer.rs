//! Layout/component composer

use std::sync::Arc;

#[cfg(test)]
use mockall::mock;

use super::{substitute, AssetStore, PropertyMap, TemplateError};

/// Renders named components into finished documents
pub trait TemplateRenderer: Send + Sync + 'static {
    /// Renders the component `name` with `props`.
    ///
    /// # Arguments
    /// * `name` - The name of the component asset.
    /// * `props` - Properties substituted into the component.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the finished document,
    /// or an [`Err`] containing a [`TemplateError`].
    fn render(&self, name: &str, props: &PropertyMap) -> Result<String, TemplateError>;
}

#[cfg(test)]
mock! {
    pub TemplateRenderer {}

    impl TemplateRenderer for TemplateRenderer {
        fn render(&self, name: &str, props: &PropertyMap) -> Result<String, TemplateError>;
    }
}

/// A layout with its properties already substituted, ready to receive
/// components at its section marker.
#[derive(Debug)]
pub struct Composer<A>
where
    A: AssetStore,
{
    assets: Arc<A>,
    layout: String,
    marker: String,
    content: String,
}

impl<A> Composer<A>
where
    A: AssetStore,
{
    /// Loads the `layout` asset and substitutes `props` into it.
    ///
    /// Components are later spliced in at the first `@<section>` marker.
    pub fn new(
        assets: Arc<A>,
        layout: &str,
        section: &str,
        props: &PropertyMap,
    ) -> Result<Self, TemplateError> {
        let content = substitute(&assets.open(layout)?, props);

        Ok(Self {
            assets,
            layout: layout.to_string(),
            marker: format!("@{section}"),
            content,
        })
    }
}

impl<A> TemplateRenderer for Composer<A>
where
    A: AssetStore,
{
    fn render(&self, name: &str, props: &PropertyMap) -> Result<String, TemplateError> {
        if name == self.layout {
            return Err(TemplateError::InvalidArgument(format!(
                "layout \"{name}\" cannot be rendered as a component"
            )));
        }

        let component = substitute(&self.assets.open(name)?, props);

        if !self.content.contains(&self.marker) {
            return Err(TemplateError::SectionNotFound(self.marker[1..].to_string()));
        }

        Ok(self.content.replacen(&self.marker, &component, 1))
    }
}
