#![forbid(unsafe_code)]

//! Host contracts: what the visualization reads from the radar each render.
//!
//! The radar owns the scroll model. The visualization only reads from it,
//! through [`Radar`] for cached state and [`GeometryProbe`] for the live
//! bounding box of a real component element.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edges::EdgeSet;
use crate::geometry::{GeographyRect, PlanetRect};

/// View state of a tracked satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Rendered inside the visible region.
    Visible,
    /// Rendered but outside the visible region.
    Cached,
    /// Not rendered; only its geometry is tracked.
    #[default]
    Culled,
}

impl ViewState {
    /// Attribute value used for styling by state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Cached => "cached",
            Self::Culled => "culled",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque handle to the real component element behind a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentElement(pub u64);

/// One entry in the radar's live satellite collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteDatum {
    pub view_state: ViewState,
    /// Display index of the underlying component.
    pub index: usize,
    /// Geography cached by the radar.
    pub geography: GeographyRect,
    /// Real element, for reading live geometry.
    pub element: ComponentElement,
}

impl SatelliteDatum {
    #[must_use]
    pub fn new(index: usize, geography: GeographyRect, element: ComponentElement) -> Self {
        Self {
            view_state: ViewState::default(),
            index,
            geography,
            element,
        }
    }

    #[must_use]
    pub fn view_state(mut self, view_state: ViewState) -> Self {
        self.view_state = view_state;
        self
    }

    /// Text shown on both proxies of this satellite.
    #[must_use]
    pub fn label(&self) -> String {
        self.index.to_string()
    }
}

/// Read-only view of the host radar.
///
/// All values are read fresh on every render.
pub trait Radar {
    /// The scrollable viewport.
    fn planet(&self) -> PlanetRect;

    /// Background strip. Only `width` and `left` are used.
    fn skyline(&self) -> GeographyRect;

    /// Band boundaries.
    fn edges(&self) -> EdgeSet;

    /// Ordered live satellite collection.
    fn satellites(&self) -> &[SatelliteDatum];
}

/// Reads the live bounding box of a real component element.
pub trait GeometryProbe {
    fn measure(&self, element: ComponentElement) -> GeographyRect;
}

impl<T: Radar + ?Sized> Radar for &T {
    fn planet(&self) -> PlanetRect {
        (**self).planet()
    }

    fn skyline(&self) -> GeographyRect {
        (**self).skyline()
    }

    fn edges(&self) -> EdgeSet {
        (**self).edges()
    }

    fn satellites(&self) -> &[SatelliteDatum] {
        (**self).satellites()
    }
}

impl<T: GeometryProbe + ?Sized> GeometryProbe for &T {
    fn measure(&self, element: ComponentElement) -> GeographyRect {
        (**self).measure(element)
    }
}
