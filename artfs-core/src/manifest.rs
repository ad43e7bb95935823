use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marker for files stored verbatim. The field is reserved for future
/// codecs; the generator always writes this value.
pub const COMPRESSION_NONE: &str = "none";

/// One retained regular file. `path` is relative to the scanned root,
/// forward slashes only, and unique within a manifest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub url: String,
    pub size: u64,
    pub sha256: String,
    pub compression: String,
}

/// Content-addressed description of a directory tree, consumed by a
/// lazy-loading filesystem that fetches file bytes from remote storage.
/// Field order here is the canonical JSON field order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub artifact_id: String,
    pub version: String,
    pub mount_path: String,
    pub prefetch: Vec<String>,
    pub files: Vec<FileEntry>,
}

impl Manifest {
    /// Encode as pretty-printed JSON (2-space indent), stable field order.
    /// Manifests are meant to be committed to version control.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural parse only: field presence and value shapes are not
    /// semantically validated here.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| Error::Filesystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&data)
    }
}
