#![forbid(unsafe_code)]

//! Debug overlay for a horizontally scrolling radar.
//!
//! # Role in radarviz
//! `radarviz-overlay` sits between the host radar (`radarviz-core`) and the
//! display tree (`radarviz-surface`). On every render it reads the radar's
//! planet, skyline, edges, and tracked satellites, and redraws a scaled
//! schematic of them.
//!
//! # Primary responsibilities
//! - **Viewport**: the static wrapper, container, and six band regions.
//! - **SatellitePool**: primary/mirror proxy pairs, grown and shrunk with a
//!   reuse cache.
//! - **SatelliteLayout**: per-satellite rectangles and the drift flag.
//! - **Visualization**: build, render, and teardown.
//!
//! # Feature flags
//! - `tracing`: emit spans and events for renders, pool changes, and drift.

pub mod options;
pub mod pool;
pub mod satellite;
pub mod viewport;
pub mod visualization;

pub use options::{InvalidOption, OverlayOptions};
pub use pool::{PairId, PoolDelta, ProxyPair, SatellitePool};
pub use satellite::SatelliteLayout;
pub use viewport::{Viewport, ViewportLayout};
pub use visualization::{RenderReport, Visualization};
