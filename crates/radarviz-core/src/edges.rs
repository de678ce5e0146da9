#![forbid(unsafe_code)]

//! Horizontal band boundaries.
//!
//! An [`EdgeSet`] partitions the horizontal axis into five regions, read
//! left to right:
//!
//! ```text
//! invisible_left   visible_left   viewport_left   viewport_right   visible_right   invisible_right
//!       |  hidden before  |  visible before |    viewport    |  visible after  |  hidden after  |
//! ```
//!
//! Edge ordering is owned by the host. Nothing here checks it, so inverted
//! edges yield negative band widths.

use serde::{Deserialize, Serialize};

/// The six boundary x-coordinates supplied by the host each render.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSet {
    pub viewport_left: f64,
    pub viewport_right: f64,
    pub visible_left: f64,
    pub visible_right: f64,
    pub invisible_left: f64,
    pub invisible_right: f64,
}

/// One horizontal band: where it starts and how wide it is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Band {
    pub left: f64,
    pub width: f64,
}

impl EdgeSet {
    /// Visible region left of the viewport.
    #[inline]
    pub fn visible_before(&self) -> Band {
        Band {
            left: self.visible_left,
            width: self.viewport_left - self.visible_left,
        }
    }

    /// Visible region right of the viewport.
    #[inline]
    pub fn visible_after(&self) -> Band {
        Band {
            left: self.viewport_right,
            width: self.visible_right - self.viewport_right,
        }
    }

    /// Hidden region left of the visible region.
    #[inline]
    pub fn hidden_before(&self) -> Band {
        Band {
            left: self.invisible_left,
            width: self.visible_left - self.invisible_left,
        }
    }

    /// Hidden region right of the visible region.
    #[inline]
    pub fn hidden_after(&self) -> Band {
        Band {
            left: self.visible_right,
            width: self.invisible_right - self.visible_right,
        }
    }
}
