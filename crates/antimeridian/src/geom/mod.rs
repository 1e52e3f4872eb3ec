//! Geometry data model and predicates.
//!
//! Purpose
//! - Provide the small, explicit vocabulary the cutter operates on: lon/lat
//!   coordinates with optional elevation, closed rings, polygons with holes,
//!   multipolygons, and the tagged geometry variant handed to the cut
//!   drivers.
//! - Keep predicates (winding, containment) total on their declared domain;
//!   precondition checks live at the top of the cut drivers, not here.

mod contains;
mod types;
mod winding;

pub use contains::{contains, ring_contains_point};
pub use types::{Coord, CutError, Geometry, Layout, MultiPolygon, Polygon, Ring};
pub use winding::{is_ring_ccw, reverse_ring, signed_area};
