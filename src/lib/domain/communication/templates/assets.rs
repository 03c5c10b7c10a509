//! Template asset store

use std::borrow::Cow;

#[cfg(test)]
use mockall::mock;

use super::TemplateError;

/// Read-only, name-keyed lookup of template sources.
pub trait AssetStore: Send + Sync + 'static {
    /// Opens the asset called `name`.
    ///
    /// # Returns
    /// - [`Ok`] with the template text.
    /// - [`Err`] with [`TemplateError::AssetNotFound`] if no such asset exists.
    fn open(&self, name: &str) -> Result<Cow<'static, str>, TemplateError>;
}

#[cfg(test)]
mock! {
    pub AssetStore {}

    impl AssetStore for AssetStore {
        fn open(&self, name: &str) -> Result<Cow<'static, str>, TemplateError>;
    }
}
