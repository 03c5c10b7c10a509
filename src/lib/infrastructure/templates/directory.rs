//! Templates loaded from a directory at runtime

use std::{
    borrow::Cow,
    fs, io,
    path::{Component, Path, PathBuf},
};

use anyhow::anyhow;

use crate::domain::communication::templates::{AssetStore, TemplateError};

/// Reads `<root>/<name>.html` on every call
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Creates a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, name: &str) -> Result<PathBuf, TemplateError> {
        let mut components = Path::new(name).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(format!("{name}.html"))),
            _ => Err(TemplateError::InvalidArgument(format!(
                "invalid template name \"{name}\""
            ))),
        }
    }
}

impl AssetStore for DirectoryAssets {
    fn open(&self, name: &str) -> Result<Cow<'static, str>, TemplateError> {
        let path = self.path(name)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Cow::Owned(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(TemplateError::AssetNotFound(name.to_string()))
            }
            Err(err) => Err(anyhow!(err)
                .context(format!("failed to read {}", path.display()))
                .into()),
        }
    }
}
