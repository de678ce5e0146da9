#![forbid(unsafe_code)]

//! Test harness for the radar debug visualization.
//!
//! # Role in radarviz
//! Shared fixtures for the overlay and facade test suites. Nothing here is
//! used at runtime.
//!
//! - [`FakeRadar`]: a scriptable [`Radar`](radarviz_core::Radar) and
//!   [`GeometryProbe`](radarviz_core::GeometryProbe).
//! - [`surface_checksum`] / [`snapshot_checksum`]: BLAKE3 checksums of a
//!   display subtree for idempotence and determinism checks.

pub mod checksum;
pub mod fixture;

pub use checksum::{CHECKSUM_PREFIX, snapshot_checksum, surface_checksum, text_checksum};
pub use fixture::FakeRadar;
