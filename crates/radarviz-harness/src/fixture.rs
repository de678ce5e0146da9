#![forbid(unsafe_code)]

//! Scriptable stand-in for a host radar.

use std::collections::HashMap;

use radarviz_core::{
    ComponentElement, EdgeSet, GeographyRect, GeometryProbe, PlanetRect, Radar, SatelliteDatum,
    ViewState,
};

/// In-memory radar with a settable live geometry per element.
///
/// Elements without a registered live rect measure at their tracked
/// geography, i.e. with zero drift.
#[derive(Debug, Clone, Default)]
pub struct FakeRadar {
    planet: PlanetRect,
    skyline: GeographyRect,
    edges: EdgeSet,
    satellites: Vec<SatelliteDatum>,
    live: HashMap<ComponentElement, GeographyRect>,
}

impl FakeRadar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A 500x100 planet at top 10 with nested bands 50 px apart.
    pub fn standard() -> Self {
        Self::new()
            .with_planet(GeographyRect::new(500.0, 100.0, 10.0, 0.0))
            .with_skyline(GeographyRect::new(2000.0, 100.0, 10.0, 0.0))
            .with_edges(EdgeSet {
                viewport_left: 100.0,
                viewport_right: 400.0,
                visible_left: 50.0,
                visible_right: 450.0,
                invisible_left: 0.0,
                invisible_right: 500.0,
            })
    }

    #[must_use]
    pub fn with_planet(mut self, planet: PlanetRect) -> Self {
        self.planet = planet;
        self
    }

    #[must_use]
    pub fn with_skyline(mut self, skyline: GeographyRect) -> Self {
        self.skyline = skyline;
        self
    }

    #[must_use]
    pub fn with_edges(mut self, edges: EdgeSet) -> Self {
        self.edges = edges;
        self
    }

    /// Replace the satellites with `count` evenly spaced 40 px entries.
    #[must_use]
    pub fn with_satellites(mut self, count: usize) -> Self {
        self.set_satellite_count(count);
        self
    }

    pub fn set_planet(&mut self, planet: PlanetRect) {
        self.planet = planet;
    }

    pub fn set_skyline(&mut self, skyline: GeographyRect) {
        self.skyline = skyline;
    }

    pub fn set_edges(&mut self, edges: EdgeSet) {
        self.edges = edges;
    }

    pub fn set_satellites(&mut self, satellites: Vec<SatelliteDatum>) {
        self.satellites = satellites;
    }

    pub fn set_satellite_count(&mut self, count: usize) {
        self.satellites = (0..count).map(spaced_satellite).collect();
    }

    /// Report `rect` as the live geometry of `element`.
    pub fn set_live(&mut self, element: ComponentElement, rect: GeographyRect) {
        self.live.insert(element, rect);
    }

    /// Shift the live left edge of satellite `index` by `offset` pixels.
    ///
    /// Does nothing when `index` is out of range.
    pub fn drift(&mut self, index: usize, offset: f64) {
        let Some(datum) = self.satellites.get(index) else {
            return;
        };
        let mut rect = datum.geography;
        rect.left += offset;
        self.live.insert(datum.element, rect);
    }

    pub fn clear_live(&mut self) {
        self.live.clear();
    }
}

fn spaced_satellite(index: usize) -> SatelliteDatum {
    let left = index as f64 * 50.0;
    let view_state = if index % 2 == 0 {
        ViewState::Visible
    } else {
        ViewState::Cached
    };
    SatelliteDatum::new(
        index,
        GeographyRect::new(40.0, 20.0, 0.0, left),
        ComponentElement(index as u64),
    )
    .view_state(view_state)
}

impl Radar for FakeRadar {
    fn planet(&self) -> PlanetRect {
        self.planet
    }

    fn skyline(&self) -> GeographyRect {
        self.skyline
    }

    fn edges(&self) -> EdgeSet {
        self.edges
    }

    fn satellites(&self) -> &[SatelliteDatum] {
        &self.satellites
    }
}

impl GeometryProbe for FakeRadar {
    fn measure(&self, element: ComponentElement) -> GeographyRect {
        if let Some(rect) = self.live.get(&element) {
            return *rect;
        }
        let tracked = self
            .satellites
            .iter()
            .find(|datum| datum.element == element)
            .map(|datum| datum.geography);
        if tracked.is_none() {
            tracing::trace!(element = element.0, "measuring unknown element");
        }
        tracked.unwrap_or_default()
    }
}
