use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a file as 64 lowercase hex characters.
/// The content is streamed through the hasher, so memory use stays
/// constant regardless of file size (artifacts are often multi-gigabyte
/// model weights).
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
