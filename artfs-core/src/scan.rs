use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::paths;

/// A regular file retained by the walk, with its size captured at scan
/// time.
#[derive(Clone, Debug)]
pub struct ScannedFile {
    /// Forward-slash path relative to the scanned root.
    pub rel_path: String,
    pub abs_path: PathBuf,
    pub size: u64,
}

// Depth 0 is the root itself; it must never be pruned even when the root
// directory happens to have a dotted name (tempdirs do).
fn not_hidden(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
}

/// Recursive walker yielding retained regular files in a stable
/// lexicographic traversal order. Entries whose base name starts with `.`
/// are pruned together with their whole subtree. Symlinks are neither
/// followed nor yielded; directories are traversed but never yielded.
pub struct TreeScanner {
    root: PathBuf,
    it: walkdir::FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
}

impl TreeScanner {
    pub fn new(root: &Path) -> Self {
        let it = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(not_hidden as fn(&DirEntry) -> bool);
        Self { root: root.to_path_buf(), it }
    }

    fn fs_error(&self, err: walkdir::Error) -> Error {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        Error::Filesystem { path, source: err.into() }
    }
}

impl Iterator for TreeScanner {
    type Item = Result<ScannedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.it.next()? {
                Ok(e) => e,
                Err(e) => return Some(Err(self.fs_error(e))),
            };
            // Regular files only: directories are descended into, symlinks
            // report a non-file type because links are not followed.
            if !entry.file_type().is_file() {
                continue;
            }
            let size = match entry.metadata() {
                Ok(m) => m.len(),
                Err(e) => return Some(Err(self.fs_error(e))),
            };
            let rel = pathdiff::diff_paths(entry.path(), &self.root)
                .unwrap_or_else(|| entry.path().to_path_buf());
            let rel_path = paths::to_slash(&rel.to_string_lossy());
            return Some(Ok(ScannedFile {
                rel_path,
                abs_path: entry.path().to_path_buf(),
                size,
            }));
        }
    }
}
