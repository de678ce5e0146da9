#![forbid(unsafe_code)]

//! Static viewport skeleton and its per-render layout.
//!
//! [`Viewport::build`] creates the fixed node hierarchy once:
//!
//! ```text
//! body
//! └── wrapper
//!     └── container
//!         ├── skyline
//!         ├── telescope
//!         ├── visible (before)
//!         ├── visible (after)
//!         ├── hidden (before)
//!         └── hidden (after)
//! ```
//!
//! [`ViewportLayout::project`] turns the radar's planet, skyline, and edges
//! into rectangles for those nodes; [`ViewportLayout::apply`] writes them.

use radarviz_core::{Band, EdgeSet, GeographyRect, PlanetRect};
use radarviz_surface::error::Result;
use radarviz_surface::{DisplayTree, NodeId, Style};

pub const WRAPPER_CLASS: &str = "sm_hor_visualization-wrapper";
pub const CONTAINER_CLASS: &str = "sm_hor_visualization-container";
pub const SKYLINE_CLASS: &str = "sm_visualization-skyline";
pub const TELESCOPE_CLASS: &str = "sm_visualization-telescope";
pub const VISIBLE_CLASS: &str = "sm_visualization-visible";
pub const HIDDEN_CLASS: &str = "sm_visualization-hidden";

/// Handles to the static overlay nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub wrapper: NodeId,
    pub container: NodeId,
    pub skyline: NodeId,
    pub telescope: NodeId,
    pub visible_before: NodeId,
    pub visible_after: NodeId,
    pub hidden_before: NodeId,
    pub hidden_after: NodeId,
}

impl Viewport {
    /// Create the skeleton and attach it to the display root.
    pub fn build<T: DisplayTree + ?Sized>(tree: &mut T) -> Result<Self> {
        let wrapper = tree.create_element(WRAPPER_CLASS);
        let container = tree.create_element(CONTAINER_CLASS);
        tree.append_child(wrapper, container)?;

        let mut region = |class: &str| -> Result<NodeId> {
            let node = tree.create_element(class);
            tree.append_child(container, node)?;
            Ok(node)
        };
        let skyline = region(SKYLINE_CLASS)?;
        let telescope = region(TELESCOPE_CLASS)?;
        let visible_before = region(VISIBLE_CLASS)?;
        let visible_after = region(VISIBLE_CLASS)?;
        let hidden_before = region(HIDDEN_CLASS)?;
        let hidden_after = region(HIDDEN_CLASS)?;

        let root = tree.root();
        tree.append_child(root, wrapper)?;

        Ok(Self {
            wrapper,
            container,
            skyline,
            telescope,
            visible_before,
            visible_after,
            hidden_before,
            hidden_after,
        })
    }

    /// The six purpose-tagged regions inside the container, in build order.
    pub fn regions(&self) -> [NodeId; 6] {
        [
            self.skyline,
            self.telescope,
            self.visible_before,
            self.visible_after,
            self.hidden_before,
            self.hidden_after,
        ]
    }
}

/// Rectangles for the static nodes, computed from one radar reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLayout {
    pub wrapper_height: f64,
    pub container_width: f64,
    pub container_height: f64,
    pub telescope: GeographyRect,
    pub skyline: GeographyRect,
    pub visible_before: GeographyRect,
    pub visible_after: GeographyRect,
    pub hidden_before: GeographyRect,
    pub hidden_after: GeographyRect,
}

impl ViewportLayout {
    /// Project the radar geometry onto the static nodes.
    ///
    /// Edge ordering is not checked: inverted edges give negative band
    /// widths, which are kept as-is.
    pub fn project(
        planet: &PlanetRect,
        skyline: &GeographyRect,
        edges: &EdgeSet,
        scale: f64,
    ) -> Self {
        let band = |band: Band| {
            GeographyRect::new(band.width, planet.height, planet.top, band.left)
        };
        Self {
            wrapper_height: (2.0 * planet.top + planet.height) * scale,
            container_width: planet.width,
            container_height: planet.height,
            telescope: *planet,
            skyline: skyline.with_vertical(planet.top, planet.height),
            visible_before: band(edges.visible_before()),
            visible_after: band(edges.visible_after()),
            hidden_before: band(edges.hidden_before()),
            hidden_after: band(edges.hidden_after()),
        }
    }

    pub fn apply<T: DisplayTree + ?Sized>(&self, tree: &mut T, viewport: &Viewport) -> Result<()> {
        tree.set_style(viewport.wrapper, Style::height(self.wrapper_height))?;
        tree.set_style(
            viewport.container,
            Style::size(self.container_width, self.container_height),
        )?;
        tree.set_style(viewport.telescope, Style::rect(self.telescope))?;
        tree.set_style(viewport.skyline, Style::rect(self.skyline))?;
        tree.set_style(viewport.visible_before, Style::rect(self.visible_before))?;
        tree.set_style(viewport.visible_after, Style::rect(self.visible_after))?;
        tree.set_style(viewport.hidden_before, Style::rect(self.hidden_before))?;
        tree.set_style(viewport.hidden_after, Style::rect(self.hidden_after))?;
        Ok(())
    }
}
