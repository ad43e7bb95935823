use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::hash;
use crate::manifest::{FileEntry, Manifest, COMPRESSION_NONE};
use crate::paths;
use crate::progress::Progress;
use crate::scan::{ScannedFile, TreeScanner};

/// Where the consuming filesystem mounts an artifact unless told
/// otherwise.
pub const DEFAULT_MOUNT_PATH: &str = "/mnt/mlmodel";

pub struct GeneratorConfig {
    pub artifact_id: String,
    pub version: String,
    /// Base URL under which every retained file is retrievable, one path
    /// segment appended per file.
    pub url_prefix: String,
    /// Raw prefetch hints; normalized during generation, never checked
    /// against the scanned files.
    pub prefetch: Vec<String>,
    pub mount_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            artifact_id: String::new(),
            version: String::new(),
            url_prefix: String::new(),
            prefetch: Vec::new(),
            mount_path: DEFAULT_MOUNT_PATH.to_string(),
        }
    }
}

pub struct Generator;

impl Generator {
    pub fn generate(root: &Path, cfg: &GeneratorConfig) -> Result<Manifest> {
        Self::generate_with_progress(root, cfg, &Progress::new(false))
    }

    /// Scan `root`, digest every retained file, and assemble the manifest.
    /// Fails on the first violation or I/O error; no partial manifest is
    /// ever returned.
    pub fn generate_with_progress(
        root: &Path,
        cfg: &GeneratorConfig,
        prog: &Progress,
    ) -> Result<Manifest> {
        if cfg.artifact_id.is_empty() || cfg.version.is_empty() {
            return Err(Error::Validation("artifact id and version are required".into()));
        }
        let meta = std::fs::metadata(root).map_err(|e| Error::Filesystem {
            path: root.to_path_buf(),
            source: e,
        })?;
        if !meta.is_dir() {
            return Err(Error::Filesystem {
                path: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            });
        }
        if !cfg.url_prefix.starts_with("http://") && !cfg.url_prefix.starts_with("https://") {
            return Err(Error::Validation(format!(
                "url prefix must start with http:// or https://, got {:?}",
                cfg.url_prefix
            )));
        }
        let url_prefix = cfg.url_prefix.trim_end_matches('/');

        let prefetch = paths::normalize_prefetch_paths(&cfg.prefetch);

        // 1) Discover candidates (regular, non-hidden, non-symlink) in
        // walk order. Collecting first fixes the progress totals.
        prog.set_stage("Scanning");
        let mut candidates: Vec<ScannedFile> = Vec::new();
        for entry in TreeScanner::new(root) {
            candidates.push(entry?);
        }
        prog.set_files_total(candidates.len() as u64);
        prog.reset_bytes(candidates.iter().map(|c| c.size).sum());

        // 2) Digest each candidate and assemble its entry.
        prog.set_stage("Hashing");
        let mut files = Vec::with_capacity(candidates.len());
        for cand in candidates {
            let sha256 = hash::sha256_file(&cand.abs_path).map_err(|e| Error::Hash {
                path: cand.rel_path.clone(),
                source: e,
            })?;
            debug!(path = %cand.rel_path, size = cand.size, "hashed file");
            files.push(FileEntry {
                path: cand.rel_path.clone(),
                url: format!("{}/{}", url_prefix, cand.rel_path),
                size: cand.size,
                sha256,
                compression: COMPRESSION_NONE.to_string(),
            });
            prog.inc_file();
            prog.add_bytes(cand.size);
        }

        info!(
            artifact_id = %cfg.artifact_id,
            version = %cfg.version,
            files = files.len(),
            "generated manifest"
        );

        Ok(Manifest {
            artifact_id: cfg.artifact_id.clone(),
            version: cfg.version.clone(),
            mount_path: cfg.mount_path.clone(),
            prefetch,
            files,
        })
    }
}
