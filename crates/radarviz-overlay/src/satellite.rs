#![forbid(unsafe_code)]

//! Per-satellite layout.
//!
//! Each satellite is drawn twice. The primary proxy sits in the row just
//! below the planet at the tracked geography; the mirror sits one row lower
//! at the live measured geometry of the component. When the two left edges
//! disagree by more than the tolerance the mirror is marked with
//! `hasErrors="true"`.

use radarviz_core::{GeographyRect, PlanetRect, SatelliteDatum, ViewState};
use radarviz_surface::error::Result;
use radarviz_surface::{DisplayTree, Style};

use crate::pool::ProxyPair;

pub const VIEW_STATE_ATTR: &str = "viewState";
pub const HAS_ERRORS_ATTR: &str = "hasErrors";

/// Projected styling for one proxy pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteLayout {
    pub primary: GeographyRect,
    pub mirror: GeographyRect,
    pub label: String,
    pub view_state: ViewState,
    /// Distance between the live and tracked left edges.
    pub drift: f64,
    pub has_errors: bool,
}

impl SatelliteLayout {
    pub fn project(
        planet: &PlanetRect,
        datum: &SatelliteDatum,
        live: &GeographyRect,
        tolerance: f64,
    ) -> Self {
        let geo = &datum.geography;
        let drift = live.left_drift(geo);
        Self {
            primary: GeographyRect::new(
                geo.width,
                planet.height,
                planet.height - planet.top,
                geo.left,
            ),
            mirror: GeographyRect::new(
                live.width,
                planet.height,
                2.0 * planet.height - planet.top,
                live.left,
            ),
            label: datum.label(),
            view_state: datum.view_state,
            drift,
            has_errors: drift > tolerance,
        }
    }

    pub fn apply<T: DisplayTree + ?Sized>(&self, tree: &mut T, pair: &ProxyPair) -> Result<()> {
        let primary = pair.primary();
        tree.set_style(primary, Style::rect(self.primary))?;
        tree.set_attribute(primary, VIEW_STATE_ATTR, self.view_state.as_str())?;
        tree.set_text(primary, &self.label)?;

        let mirror = pair.mirror();
        tree.set_style(mirror, Style::rect(self.mirror))?;
        tree.set_attribute(mirror, HAS_ERRORS_ATTR, bool_attr(self.has_errors))?;
        tree.set_text(mirror, &self.label)?;
        Ok(())
    }
}

const fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::SatellitePool;
    use radarviz_core::ComponentElement;
    use radarviz_surface::Surface;

    fn planet() -> PlanetRect {
        GeographyRect::new(500.0, 100.0, 10.0, 0.0)
    }

    fn datum(left: f64) -> SatelliteDatum {
        SatelliteDatum::new(3, GeographyRect::new(40.0, 20.0, 0.0, left), ComponentElement(7))
            .view_state(ViewState::Visible)
    }

    #[test]
    fn primary_sits_below_planet() {
        let live = GeographyRect::horizontal(60.0, 40.0);
        let layout = SatelliteLayout::project(&planet(), &datum(60.0), &live, 35.0);
        assert_eq!(layout.primary, GeographyRect::new(40.0, 100.0, 90.0, 60.0));
        assert_eq!(layout.mirror, GeographyRect::new(40.0, 100.0, 190.0, 60.0));
        assert_eq!(layout.label, "3");
        assert!(!layout.has_errors);
    }

    #[test]
    fn mirror_uses_live_geometry() {
        let live = GeographyRect::new(55.0, 3.0, 900.0, 72.0);
        let layout = SatelliteLayout::project(&planet(), &datum(60.0), &live, 35.0);
        assert_eq!(layout.mirror.width, 55.0);
        assert_eq!(layout.mirror.left, 72.0);
        assert_eq!(layout.mirror.height, 100.0);
    }

    #[test]
    fn drift_within_tolerance_is_clean() {
        let live = GeographyRect::horizontal(130.0, 40.0);
        let layout = SatelliteLayout::project(&planet(), &datum(100.0), &live, 35.0);
        assert_eq!(layout.drift, 30.0);
        assert!(!layout.has_errors);
    }

    #[test]
    fn drift_beyond_tolerance_is_flagged() {
        let live = GeographyRect::horizontal(60.0, 40.0);
        let layout = SatelliteLayout::project(&planet(), &datum(100.0), &live, 35.0);
        assert_eq!(layout.drift, 40.0);
        assert!(layout.has_errors);
    }

    #[test]
    fn drift_equal_to_tolerance_is_clean() {
        let live = GeographyRect::horizontal(135.0, 40.0);
        let layout = SatelliteLayout::project(&planet(), &datum(100.0), &live, 35.0);
        assert!(!layout.has_errors);
    }

    #[test]
    fn apply_writes_attributes_and_labels() {
        let mut surface = Surface::new();
        let root = surface.root();
        let mut pool = SatellitePool::new();
        let pair = pool.grow(&mut surface, root).unwrap();

        let live = GeographyRect::horizontal(0.0, 40.0);
        let layout = SatelliteLayout::project(&planet(), &datum(100.0), &live, 35.0);
        layout.apply(&mut surface, &pair).unwrap();

        assert_eq!(surface.attribute(pair.primary(), VIEW_STATE_ATTR), Ok(Some("visible")));
        assert_eq!(surface.attribute(pair.mirror(), HAS_ERRORS_ATTR), Ok(Some("true")));
        assert_eq!(surface.attribute(pair.primary(), HAS_ERRORS_ATTR), Ok(None));
        assert_eq!(surface.text(pair.primary()), Ok(Some("3")));
        assert_eq!(surface.text(pair.mirror()), Ok(Some("3")));
        assert_eq!(
            surface.style(pair.primary()).unwrap().as_rect(),
            Some(layout.primary)
        );
    }
}
