#![forbid(unsafe_code)]

//! Display surface: the retained element tree the overlay draws into.
//!
//! # Role in radarviz
//! `radarviz-surface` is the output layer. The overlay never touches a
//! global document; every element it creates, moves, styles, or destroys
//! goes through a [`DisplayTree`] handle passed in by the caller.
//!
//! # Primary responsibilities
//! - **DisplayTree**: the boundary trait a host display environment implements.
//! - **Surface**: in-memory tree with slot reuse and stale-handle detection.
//! - **NodeSnapshot**: serializable subtree copies for inspection and diffing.

pub mod error;
pub mod node;
pub mod snapshot;
pub mod surface;
pub mod tree;

pub use error::SurfaceError;
pub use node::{NodeId, Style};
pub use snapshot::NodeSnapshot;
pub use surface::{ROOT_CLASS, Surface};
pub use tree::DisplayTree;
