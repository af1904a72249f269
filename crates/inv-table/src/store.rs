//! Durable storage for raw uploads.
//!
//! One flat directory; files are named exactly as uploaded and overwritten
//! on collision. The write always happens before parsing, so a malformed
//! upload still leaves its bytes on disk for inspection.

use std::fs;
use std::path::{Path, PathBuf};

use inv_core::{Error, Result};

use crate::frame::Frame;
use crate::reader::parse_csv;

/// A flat directory of saved uploads.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open (creating if needed) the store directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the on-disk path for an upload name.
    ///
    /// The store is flat: names containing path separators or dot
    /// components are rejected so an upload can never escape the directory.
    pub fn path_for(&self, filename: &str) -> Result<PathBuf> {
        validate_filename(filename)?;
        Ok(self.dir.join(filename))
    }

    /// Write `bytes` verbatim under `filename`, overwriting any existing
    /// file of the same name.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(filename)?;
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "upload saved");
        Ok(path)
    }

    /// Save then parse: the upload half of a render cycle.
    ///
    /// The write happens first; if the bytes turn out not to be valid
    /// tabular data the parse error propagates but the file stays on disk.
    pub fn ingest(&self, filename: &str, bytes: &[u8]) -> Result<(PathBuf, Frame)> {
        let path = self.save(filename, bytes)?;
        let stored = fs::read(&path)?;
        let frame = parse_csv(&stored)?;
        tracing::info!(rows = frame.n_rows(), columns = frame.n_cols(), "upload parsed");
        Ok((path, frame))
    }

    /// Whether an upload with this name exists.
    pub fn contains(&self, filename: &str) -> Result<bool> {
        Ok(self.path_for(filename)?.is_file())
    }

    /// Re-read and re-parse a stored upload for a later render cycle.
    pub fn load(&self, filename: &str) -> Result<Frame> {
        let path = self.path_for(filename)?;
        let bytes = fs::read(&path)?;
        parse_csv(&bytes)
    }
}

fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(Error::Validation("upload filename is empty".to_string()));
    }
    if filename.contains('/') || filename.contains('\\') {
        return Err(Error::Validation(format!(
            "upload filename must not contain path separators: {filename:?}"
        )));
    }
    if filename == "." || filename == ".." {
        return Err(Error::Validation(format!("invalid upload filename: {filename:?}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_traversal_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();
        for bad in ["", "..", "a/b.csv", "..\\evil.csv"] {
            assert!(
                matches!(store.path_for(bad), Err(Error::Validation(_))),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn save_overwrites_on_collision() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();
        store.save("inv.csv", b"first").unwrap();
        let path = store.save("inv.csv", b"second").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"second");
    }
}
