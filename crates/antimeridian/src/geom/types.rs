//! Core geometry types.
//!
//! - `Coord`: lon/lat position (degrees) with an optional elevation that
//!   flows through the cutter untouched.
//! - `Layout`: vertex layout tag; the cutter accepts `Xy` and `Xyz` only.
//! - `Polygon` / `MultiPolygon`: ring lists in GeoJSON order (ring 0 is the
//!   exterior, the rest are holes).
//! - `Geometry`: the variant handed to the cut drivers.

use nalgebra::Vector2;

/// Vertex layout of a polygon's coordinates.
///
/// The measured layouts (`Xym`, `Xyzm`) are carried for completeness; the
/// cut drivers reject them with [`CutError::UnsupportedLayout`] before
/// touching any coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Xy,
    Xyz,
    Xym,
    Xyzm,
}

impl Layout {
    #[inline]
    pub fn has_z(self) -> bool {
        matches!(self, Layout::Xyz | Layout::Xyzm)
    }
}

/// A single vertex: longitude/latitude in degrees, optional elevation.
///
/// Invariants (by construction, not enforced):
/// - The canonical longitude domain is (-180, 180], with both -180 and 180
///   representable; which of the two a seam vertex carries encodes the seam
///   side its ring lies on.
/// - All algorithms operate on `xy` exclusively; `z` is copied through.
///   Vertices synthesised on the seam or at a pole carry `z = None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub xy: Vector2<f64>,
    pub z: Option<f64>,
}

impl Coord {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            xy: Vector2::new(lon, lat),
            z: None,
        }
    }

    #[inline]
    pub fn with_z(lon: f64, lat: f64, z: f64) -> Self {
        Self {
            xy: Vector2::new(lon, lat),
            z: Some(z),
        }
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.xy.x
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.xy.y
    }
}

/// A closed ring of coordinates (first == last).
pub type Ring = Vec<Coord>;

/// A polygon: non-empty ring list, `rings[0]` exterior, `rings[1..]` holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub layout: Layout,
    pub rings: Vec<Ring>,
}

impl Polygon {
    #[inline]
    pub fn new(layout: Layout, rings: Vec<Ring>) -> Self {
        Self { layout, rings }
    }

    /// The exterior ring, or an empty slice for a ring-less polygon.
    #[inline]
    pub fn exterior(&self) -> &[Coord] {
        self.rings.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The interior rings (holes).
    #[inline]
    pub fn interiors(&self) -> &[Ring] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }
}

/// An ordered list of polygons.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    #[inline]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}

/// Geometry variant accepted by the cut drivers.
///
/// `Other` stands for any geometry kind the cutter does not operate on
/// (points, lines, collections); it carries the kind name so the error
/// message can say what was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    Other(&'static str),
}

/// Permanent client errors surfaced by the cut drivers.
///
/// Both are precondition failures detected before any work happens; the
/// geometric routines themselves are total and never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CutError {
    #[error("unsupported geometry type: {0}")]
    UnsupportedType(&'static str),
    #[error("unsupported coordinate layout: {0:?}")]
    UnsupportedLayout(Layout),
}
