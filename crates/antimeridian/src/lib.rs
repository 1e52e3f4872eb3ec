//! Antimeridian cutting for geographic polygons.
//!
//! Purpose
//! - Take a polygon (or multipolygon) whose vertices are lon/lat pairs and
//!   whose edges may cross the ±180° seam or pass over a pole, and produce
//!   polygons whose edges never cross the seam, each lying inside
//!   [-180, 180] × [-90, 90] and wound per the GeoJSON convention
//!   (exterior counter-clockwise, holes clockwise).
//!
//! Approach (short)
//! - Split each ring at its seam crossings into open segments that terminate
//!   on the seam, decide pole enclosure from the seam topology of segment
//!   endpoints, then greedily rejoin segments into closed rings by walking
//!   along the seam.
//! - Pure computation: no I/O, no shared state, safe to call concurrently on
//!   independent inputs.
//!
//! Entry points
//! - [`cut()`] / [`cut_with()`] on a [`Geometry`] value; see the `cut`
//!   module docs for the winding-repair option.

pub mod cut;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cut::{cut, cut_with};
pub use geom::{
    contains, is_ring_ccw, reverse_ring, ring_contains_point, signed_area, Coord, CutError,
    Geometry, Layout, MultiPolygon, Polygon, Ring,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cut::{cut, cut_with};
    pub use crate::geom::{
        contains, is_ring_ccw, reverse_ring, ring_contains_point, signed_area, Coord, CutError,
        Geometry, Layout, MultiPolygon, Polygon, Ring,
    };
}
