//! BLAKE3 fingerprints of unit descriptors

use std::fs::File;
use std::path::Path;

use crate::error::{Result, descriptor::read_failed};

/// Prefix naming the algorithm of a fingerprint
pub const HASH_PREFIX: &str = "blake3:";

/// Fingerprint of an in-memory descriptor
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{HASH_PREFIX}{}", blake3::hash(bytes).to_hex())
}

/// Fingerprint of a descriptor file on disk, equal to [`hash_bytes`] of its
/// contents
pub fn hash_file(path: &Path) -> Result<String> {
    let unreadable = |e: std::io::Error| read_failed(path.display().to_string(), e.to_string());

    let file = File::open(path).map_err(unreadable)?;
    let mut hasher = blake3::Hasher::new();
    hasher.update_reader(file).map_err(unreadable)?;
    Ok(format!("{HASH_PREFIX}{}", hasher.finalize().to_hex()))
}
