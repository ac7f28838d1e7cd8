//! Unique download filenames.
//!
//! A name is the first 32 hex chars of SHA-256 over a process-local unique
//! token plus a host identifier, so files generated at the same instant on
//! different hosts sharing a directory do not collide.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Extension used when the caller does not request one.
pub const DEFAULT_EXTENSION: &str = ".jpg";

/// Length of the hash part of every generated name.
pub const NAME_HEX_LEN: usize = 32;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Returns `<32 hex chars><ext>`, with `ext` defaulting to `.jpg`.
pub fn unique_filename(host_id: &str, ext: Option<&str>) -> String {
    let ext = ext.filter(|e| !e.is_empty()).unwrap_or(DEFAULT_EXTENSION);
    format!("{}{}", unique_name(host_id), ext)
}

fn unique_name(host_id: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let token = format!("{}{}:{}:{}", host_id, nanos, std::process::id(), seq);

    let digest = Sha256::digest(token.as_bytes());
    let mut name = hex::encode(digest);
    name.truncate(NAME_HEX_LEN);
    name
}
