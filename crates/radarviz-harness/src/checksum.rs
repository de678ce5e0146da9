#![forbid(unsafe_code)]

//! Stable checksums of display subtrees.
//!
//! Two subtrees with the same checksum have identical structure, classes,
//! styles, attributes, and text. Node handles are not part of the hash, so
//! a reused slot does not change the checksum.

use radarviz_surface::error::Result;
use radarviz_surface::{NodeId, Surface};

pub const CHECKSUM_PREFIX: &str = "blake3:";

/// Checksum of the text dump of the subtree at `root`.
pub fn surface_checksum(surface: &Surface, root: NodeId) -> Result<String> {
    Ok(text_checksum(&surface.dump(root)?))
}

/// Checksum of the JSON snapshot of the subtree at `root`.
///
/// Covers the same content as [`surface_checksum`] through the serialized
/// form hosts would store.
///
/// # Panics
///
/// Panics if the snapshot cannot be serialized.
pub fn snapshot_checksum(surface: &Surface, root: NodeId) -> Result<String> {
    let snapshot = surface.snapshot(root)?;
    let bytes = serde_json::to_vec(&snapshot).expect("snapshot serializes");
    Ok(bytes_checksum(&bytes))
}

pub fn text_checksum(text: &str) -> String {
    bytes_checksum(text.as_bytes())
}

fn bytes_checksum(bytes: &[u8]) -> String {
    let hash = blake3::hash(bytes);
    format!("{CHECKSUM_PREFIX}{}", hash.to_hex())
}
