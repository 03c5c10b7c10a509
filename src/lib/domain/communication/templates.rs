//! Template composition
//!
//! A template is rendered by loading a *layout* and a named *component*,
//! substituting `{key}` placeholders in each of them and splicing the rendered
//! component into the layout at its `@<section>` marker.

mod assets;
mod composer;
mod errors;
mod props;
mod substitution;

pub use assets::AssetStore;
pub use composer::{Composer, TemplateRenderer};
pub use errors::TemplateError;
pub use props::{PropertyMap, PropertyValue};
pub use substitution::substitute;

#[cfg(test)]
/// Test doubles for the template ports
pub mod tests {
    pub use super::assets::MockAssetStore;
    pub use super::composer::MockTemplateRenderer;
}
