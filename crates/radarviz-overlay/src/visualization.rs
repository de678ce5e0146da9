#![forbid(unsafe_code)]

//! The overlay lifecycle: build, render, destroy.
//!
//! A [`Visualization`] owns the static viewport handles and the satellite
//! pool. The display tree and the host radar are borrowed per call, so a
//! visualization can never outlive or alias either of them.
//!
//! # Example
//!
//! ```ignore
//! let mut vis = Visualization::new(&mut surface, &radar)?;
//! // ... host scrolls, satellites come and go ...
//! let report = vis.render(&mut surface, &radar)?;
//! for index in &report.drifted {
//!     eprintln!("satellite {index} drifted");
//! }
//! vis.destroy(&mut surface)?;
//! ```

use radarviz_core::{GeometryProbe, Radar};
use radarviz_surface::error::Result;
use radarviz_surface::DisplayTree;

use crate::options::OverlayOptions;
use crate::pool::{PoolDelta, ProxyPair, SatellitePool};
use crate::satellite::SatelliteLayout;
use crate::viewport::{Viewport, ViewportLayout};

/// Outcome of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderReport {
    /// Live pairs after reconciliation.
    pub live: usize,
    /// Pairs sitting in the reuse cache.
    pub cached: usize,
    pub delta: PoolDelta,
    /// Indices of satellites whose mirror was flagged.
    pub drifted: Vec<usize>,
}

impl RenderReport {
    #[inline]
    pub fn has_drift(&self) -> bool {
        !self.drifted.is_empty()
    }
}

#[derive(Debug)]
pub struct Visualization {
    viewport: Viewport,
    pool: SatellitePool,
    options: OverlayOptions,
}

impl Visualization {
    /// Build the overlay with default options and render it once.
    pub fn new<T, H>(tree: &mut T, host: &H) -> Result<Self>
    where
        T: DisplayTree + ?Sized,
        H: Radar + GeometryProbe + ?Sized,
    {
        Self::with_options(tree, host, OverlayOptions::default())
    }

    /// Build the overlay with explicit options and render it once.
    pub fn with_options<T, H>(tree: &mut T, host: &H, options: OverlayOptions) -> Result<Self>
    where
        T: DisplayTree + ?Sized,
        H: Radar + GeometryProbe + ?Sized,
    {
        let viewport = Viewport::build(tree)?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            wrapper = %viewport.wrapper,
            scale = options.scale,
            drift_tolerance = options.drift_tolerance,
            "radar overlay built"
        );
        let mut vis = Self {
            viewport,
            pool: SatellitePool::new(),
            options,
        };
        vis.render(tree, host)?;
        Ok(vis)
    }

    /// Resynchronize the overlay with the current radar state.
    ///
    /// Every static node and every live pair is restyled, so calling this
    /// twice without a host change leaves the tree unchanged.
    pub fn render<T, H>(&mut self, tree: &mut T, host: &H) -> Result<RenderReport>
    where
        T: DisplayTree + ?Sized,
        H: Radar + GeometryProbe + ?Sized,
    {
        let planet = host.planet();
        let satellites = host.satellites();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("overlay_render", satellites = satellites.len()).entered();

        ViewportLayout::project(&planet, &host.skyline(), &host.edges(), self.options.scale)
            .apply(tree, &self.viewport)?;

        let delta = self
            .pool
            .reconcile(tree, self.viewport.container, satellites.len())?;

        let mut drifted = Vec::new();
        for (pair, datum) in self.pool.live().iter().zip(satellites) {
            let live = host.measure(datum.element);
            let layout =
                SatelliteLayout::project(&planet, datum, &live, self.options.drift_tolerance);
            layout.apply(tree, pair)?;
            if layout.has_errors {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    index = datum.index,
                    delta = layout.drift,
                    tolerance = self.options.drift_tolerance,
                    "satellite drifted from tracked geography"
                );
                drifted.push(datum.index);
            }
        }

        Ok(RenderReport {
            live: self.pool.len(),
            cached: self.pool.cached().len(),
            delta,
            drifted,
        })
    }

    /// Remove the overlay and release every node it created.
    ///
    /// Every step runs even when an earlier one fails; the first error is
    /// returned at the end.
    pub fn destroy<T: DisplayTree + ?Sized>(mut self, tree: &mut T) -> Result<()> {
        let mut first_error = tree.detach(self.viewport.wrapper).err();
        let _pairs = match self.pool.destroy_all(tree) {
            Ok(pairs) => pairs,
            Err(err) => {
                first_error.get_or_insert(err);
                0
            }
        };
        if let Err(err) = tree.destroy(self.viewport.wrapper) {
            first_error.get_or_insert(err);
        }
        match first_error {
            Some(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "radar overlay teardown incomplete");
                Err(err)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::info!(pairs = _pairs, "radar overlay destroyed");
                Ok(())
            }
        }
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn live_pairs(&self) -> &[ProxyPair] {
        self.pool.live()
    }

    #[inline]
    pub fn cached_pairs(&self) -> &[ProxyPair] {
        self.pool.cached()
    }

    #[inline]
    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next render.
    pub fn set_options(&mut self, options: OverlayOptions) {
        self.options = options;
    }
}
