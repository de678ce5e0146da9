#![forbid(unsafe_code)]

//! Core: geometry primitives and the host contracts of the radar
//! visualization.
//!
//! # Role in radarviz
//! `radarviz-core` is the input layer. It defines the rectangles and band
//! edges the host radar hands over each render, and the [`Radar`] and
//! [`GeometryProbe`] traits the overlay reads them through. It has no
//! knowledge of the display tree; that lives in `radarviz-surface`.

pub mod edges;
pub mod geometry;
pub mod radar;

pub use edges::{Band, EdgeSet};
pub use geometry::{GeographyRect, PlanetRect};
pub use radar::{ComponentElement, GeometryProbe, Radar, SatelliteDatum, ViewState};
