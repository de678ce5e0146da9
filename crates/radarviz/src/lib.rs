#![forbid(unsafe_code)]

//! Horizontal radar debug visualization: public facade crate.
//!
//! Re-exports the types a host needs to draw the overlay, plus the error,
//! configuration, and logging glue shared by all of them.
//!
//! ```ignore
//! use radarviz::prelude::*;
//!
//! let mut surface = Surface::new();
//! let options = radarviz::config::options_from_env_strict()?;
//! let mut vis = Visualization::with_options(&mut surface, &radar, options)?;
//! vis.render(&mut surface, &radar)?;
//! println!("{}", radarviz::snapshot_json(&surface, surface.root())?);
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use radarviz_core::{
    Band, ComponentElement, EdgeSet, GeographyRect, GeometryProbe, PlanetRect, Radar,
    SatelliteDatum, ViewState,
};

// --- Surface re-exports ----------------------------------------------------

pub use radarviz_surface::{DisplayTree, NodeId, NodeSnapshot, Style, Surface, SurfaceError};

// --- Overlay re-exports ----------------------------------------------------

pub use radarviz_overlay::{
    OverlayOptions, PoolDelta, ProxyPair, RenderReport, SatelliteLayout, Viewport,
    ViewportLayout, Visualization,
};

/// Pretty JSON of the subtree at `root`.
pub fn snapshot_json(surface: &Surface, root: NodeId) -> Result<String> {
    let snapshot = surface.snapshot(root)?;
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DisplayTree, EdgeSet, Error, GeographyRect, GeometryProbe, OverlayOptions, Radar,
        RenderReport, Result, SatelliteDatum, Surface, ViewState, Visualization,
    };

    pub use crate::{core, overlay, surface};
}

pub use radarviz_core as core;
pub use radarviz_overlay as overlay;
pub use radarviz_surface as surface;
