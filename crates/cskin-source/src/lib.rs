//! Skin document source abstraction.
//!
//! A skin ships either as a `.cskin` archive (a zip container) or as an
//! extracted directory. Both hold one "root folder" under which the
//! per-theme files live (`{root}/light/pinyinPortrait.yaml`, ...). This
//! crate hides the difference behind [`SkinSource`]: callers read raw
//! text by logical path relative to the root and never learn which
//! backing store answered.

mod archive;
mod dir;

use std::fs::File;
use std::path::Path;

use cskin_types::error::{Result, SkinError};

pub use archive::ZipSource;
pub use dir::DirSource;

/// Read-only access to a skin's files by logical relative path.
pub trait SkinSource {
    /// Read the UTF-8 content of `{root}/{rel}`.
    ///
    /// Fails with [`SkinError::NotFound`] when the entry does not exist.
    fn read_text(&self, rel: &str) -> Result<String>;

    /// The detected or supplied root folder name.
    fn root(&self) -> &str;
}

impl std::fmt::Debug for dyn SkinSource + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkinSource")
            .field("root", &self.root())
            .finish()
    }
}

/// Open a skin package at `path`, auto-detecting the root folder when
/// `root` is not supplied.
///
/// A directory needs exactly one subdirectory for auto-detection; a
/// zip archive needs at least one top-level folder (with several, the
/// lexicographically first wins).
pub fn open_source(path: &Path, root: Option<&str>) -> Result<Box<dyn SkinSource>> {
    if path.is_dir() {
        let root = match root {
            Some(r) => r.trim_end_matches('/').to_string(),
            None => detect_root_in_dir(path)?,
        };
        return Ok(Box::new(DirSource::new(path, root)));
    }

    if !path.exists() {
        return Err(SkinError::NotFound(path.display().to_string()));
    }

    // Zip entry names carry the root prefix with a trailing slash.
    let root = match root {
        Some(r) if r.ends_with('/') => r.to_string(),
        Some(r) => format!("{r}/"),
        None => {
            let archive = zip::ZipArchive::new(File::open(path)?)?;
            detect_root_in_zip(&archive)?
        }
    };
    Ok(Box::new(ZipSource::new(path, root)))
}

/// Pick the root folder of an extracted skin directory: the single
/// subdirectory, or an error when that is ambiguous.
fn detect_root_in_dir(path: &Path) -> Result<String> {
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    match subdirs.as_slice() {
        [single] => Ok(single.clone()),
        _ => Err(SkinError::RootDetection(format!(
            "cannot detect root folder in {} ({} subdirectories); pass --root",
            path.display(),
            subdirs.len()
        ))),
    }
}

/// Pick the root folder of a zip archive from the top-level directory
/// prefixes of its entries.
fn detect_root_in_zip<R: std::io::Read + std::io::Seek>(
    archive: &zip::ZipArchive<R>,
) -> Result<String> {
    let mut roots = std::collections::BTreeSet::new();
    for name in archive.file_names() {
        if let Some((first, _)) = name.split_once('/') {
            roots.insert(format!("{first}/"));
        }
    }
    let mut iter = roots.into_iter();
    match (iter.next(), iter.next()) {
        (Some(root), None) => Ok(root),
        (Some(root), Some(_)) => {
            log::warn!("multiple root folders in archive, using {root:?}");
            Ok(root)
        }
        (None, _) => Err(SkinError::RootDetection(
            "no root folder in archive; pass --root".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (name, content) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn dir_source_reads_by_logical_path() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("ios-skin");
        std::fs::create_dir_all(root.join("light")).unwrap();
        std::fs::write(root.join("light/pinyin.yaml"), "{}").unwrap();

        let source = open_source(tmp.path(), None).unwrap();
        assert_eq!(source.root(), "ios-skin");
        assert_eq!(source.read_text("light/pinyin.yaml").unwrap(), "{}");
    }

    #[test]
    fn dir_source_missing_entry_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("ios-skin")).unwrap();

        let source = open_source(tmp.path(), None).unwrap();
        let err = source.read_text("dark/none.yaml").unwrap_err();
        assert!(matches!(err, SkinError::NotFound(_)), "got {err}");
    }

    #[test]
    fn dir_detection_fails_with_multiple_subdirs() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("one")).unwrap();
        std::fs::create_dir_all(tmp.path().join("two")).unwrap();

        let err = open_source(tmp.path(), None).unwrap_err();
        assert!(matches!(err, SkinError::RootDetection(_)), "got {err}");
    }

    #[test]
    fn dir_explicit_root_overrides_detection() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("one/light")).unwrap();
        std::fs::create_dir_all(tmp.path().join("two")).unwrap();
        std::fs::write(tmp.path().join("one/light/k.yaml"), "x").unwrap();

        let source = open_source(tmp.path(), Some("one")).unwrap();
        assert_eq!(source.read_text("light/k.yaml").unwrap(), "x");
    }

    #[test]
    fn zip_source_detects_single_root() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("skin.cskin");
        write_zip(&zip_path, &[("ios-skin/light/pinyin.yaml", "{\"a\":1}")]);

        let source = open_source(&zip_path, None).unwrap();
        assert_eq!(source.root(), "ios-skin/");
        assert_eq!(source.read_text("light/pinyin.yaml").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn zip_multiple_roots_picks_first_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("skin.cskin");
        write_zip(
            &zip_path,
            &[("zeta/light/a.yaml", "z"), ("alpha/light/a.yaml", "a")],
        );

        let source = open_source(&zip_path, None).unwrap();
        assert_eq!(source.root(), "alpha/");
        assert_eq!(source.read_text("light/a.yaml").unwrap(), "a");
    }

    #[test]
    fn zip_explicit_root_gains_trailing_slash() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("skin.cskin");
        write_zip(
            &zip_path,
            &[("zeta/light/a.yaml", "z"), ("alpha/light/a.yaml", "a")],
        );

        let source = open_source(&zip_path, Some("zeta")).unwrap();
        assert_eq!(source.root(), "zeta/");
        assert_eq!(source.read_text("light/a.yaml").unwrap(), "z");
    }

    #[test]
    fn zip_missing_entry_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("skin.cskin");
        write_zip(&zip_path, &[("root/light/a.yaml", "a")]);

        let source = open_source(&zip_path, None).unwrap();
        let err = source.read_text("dark/missing.yaml").unwrap_err();
        assert!(matches!(err, SkinError::NotFound(_)), "got {err}");
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = open_source(Path::new("/no/such/skin.cskin"), None).unwrap_err();
        assert!(matches!(err, SkinError::NotFound(_)), "got {err}");
    }

    #[test]
    fn dir_and_zip_agree_on_logical_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("dir/ios-skin");
        std::fs::create_dir_all(root.join("dark")).unwrap();
        std::fs::write(root.join("dark/k.yaml"), "same").unwrap();
        let zip_path = tmp.path().join("skin.cskin");
        write_zip(&zip_path, &[("ios-skin/dark/k.yaml", "same")]);

        let from_dir = open_source(&tmp.path().join("dir"), None).unwrap();
        let from_zip = open_source(&zip_path, None).unwrap();
        assert_eq!(
            from_dir.read_text("dark/k.yaml").unwrap(),
            from_zip.read_text("dark/k.yaml").unwrap()
        );
    }
}
