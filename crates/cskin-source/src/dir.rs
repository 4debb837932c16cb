//! Directory-backed skin source.

use std::io;
use std::path::{Path, PathBuf};

use cskin_types::error::{Result, SkinError};

use crate::SkinSource;

/// An extracted skin directory with a known root folder.
#[derive(Debug)]
pub struct DirSource {
    base: PathBuf,
    root: String,
}

impl DirSource {
    pub fn new(base: &Path, root: String) -> Self {
        Self {
            base: base.to_path_buf(),
            root,
        }
    }
}

impl SkinSource for DirSource {
    fn read_text(&self, rel: &str) -> Result<String> {
        let path = self.base.join(&self.root).join(rel);
        std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SkinError::NotFound(path.display().to_string()),
            _ => SkinError::Io(err),
        })
    }

    fn root(&self) -> &str {
        &self.root
    }
}
