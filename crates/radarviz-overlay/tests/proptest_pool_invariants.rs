//! Property-based invariant tests for the satellite pool.
//!
//! 1. After every render, live pairs == satellite count.
//! 2. Live pairs are attached; cached pairs are alive but detached.
//! 3. A pair is never both live and cached.
//! 4. Total pairs never exceed the largest satellite count seen.
//! 5. Teardown after any sequence leaves only the root.

use std::collections::HashSet;

use proptest::prelude::*;
use radarviz_harness::FakeRadar;
use radarviz_overlay::Visualization;
use radarviz_surface::{DisplayTree, Surface};

// ── Strategies ──────────────────────────────────────────────────────────

fn counts_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..24, 1..40)
}

fn drift_strategy() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0usize..24, -120.0f64..120.0), 0..8)
}

proptest! {
    #[test]
    fn pool_tracks_satellite_count(counts in counts_strategy()) {
        let mut surface = Surface::new();
        let mut radar = FakeRadar::standard();
        let mut vis = Visualization::new(&mut surface, &radar).expect("build");
        let mut high_water = 0;

        for count in counts {
            high_water = high_water.max(count);
            radar.set_satellite_count(count);
            let report = vis.render(&mut surface, &radar).expect("render");

            prop_assert_eq!(report.live, count);
            prop_assert_eq!(vis.live_pairs().len(), count);
            prop_assert_eq!(report.live + report.cached, high_water);

            let mut ids = HashSet::new();
            for pair in vis.live_pairs() {
                prop_assert!(ids.insert(pair.id()));
                prop_assert!(surface.is_attached(pair.primary()));
                prop_assert!(surface.is_attached(pair.mirror()));
            }
            for pair in vis.cached_pairs() {
                prop_assert!(ids.insert(pair.id()));
                prop_assert!(surface.contains(pair.primary()));
                prop_assert!(!surface.is_attached(pair.primary()));
                prop_assert!(!surface.is_attached(pair.mirror()));
            }
        }

        vis.destroy(&mut surface).expect("destroy");
        prop_assert_eq!(surface.len(), 1);
    }

    #[test]
    fn drift_report_matches_tolerance(count in 1usize..24, drifts in drift_strategy()) {
        let mut surface = Surface::new();
        let mut radar = FakeRadar::standard().with_satellites(count);
        let mut expected = Vec::new();
        for (index, offset) in drifts {
            if index < count {
                radar.drift(index, offset);
            }
        }
        for datum in radarviz_core::Radar::satellites(&radar) {
            let live = radarviz_core::GeometryProbe::measure(&radar, datum.element);
            if (live.left - datum.geography.left).abs() > 35.0 {
                expected.push(datum.index);
            }
        }

        let mut vis = Visualization::new(&mut surface, &radar).expect("build");
        let report = vis.render(&mut surface, &radar).expect("render");
        prop_assert_eq!(report.drifted, expected);
    }
}
