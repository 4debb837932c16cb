//! Zip-backed skin source for `.cskin` packages.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use cskin_types::error::{Result, SkinError};
use zip::result::ZipError;

use crate::SkinSource;

/// A `.cskin` archive with a known root folder prefix.
///
/// The archive is reopened per read and dropped on return; a preview
/// run reads a single file, so holding the handle buys nothing.
#[derive(Debug)]
pub struct ZipSource {
    path: PathBuf,
    /// Root folder prefix including its trailing `/`.
    root: String,
}

impl ZipSource {
    pub fn new(path: &Path, root: String) -> Self {
        Self {
            path: path.to_path_buf(),
            root,
        }
    }
}

impl SkinSource for ZipSource {
    fn read_text(&self, rel: &str) -> Result<String> {
        let mut archive = zip::ZipArchive::new(File::open(&self.path)?)?;
        let name = format!("{}{rel}", self.root);
        let mut entry = match archive.by_name(&name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Err(SkinError::NotFound(name)),
            Err(err) => return Err(err.into()),
        };
        let mut text = String::new();
        entry.read_to_string(&mut text)?;
        Ok(text)
    }

    fn root(&self) -> &str {
        &self.root
    }
}
