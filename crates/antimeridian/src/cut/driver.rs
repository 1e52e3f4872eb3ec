//! Cut drivers for polygons and multipolygons.
//!
//! Pipeline per polygon
//! 1. Reject layouts other than 2-D / 3-D.
//! 2. Normalise the exterior ring and segment it. No segments means no seam
//!    crossing: optionally repair the winding and return the input whole.
//! 3. Segment each hole. Holes that cross the seam join the segment pool
//!    (rewound first when winding repair finds them counter-clockwise);
//!    holes that do not are held aside whole.
//! 4. Extend over enclosed poles, rebuild closed polygons, then attach each
//!    held-aside hole to the first piece that contains it. Orphan holes are
//!    dropped.
//! 5. A single non-counter-clockwise result is an inverted ring: return the
//!    world rectangle with that ring as a hole instead.

use nalgebra::Vector2;

use crate::cut::build::build_polygons;
use crate::cut::poles::extend_over_poles;
use crate::cut::segment::{normalize_ring, segment_ring};
use crate::geom::{
    contains, is_ring_ccw, reverse_ring, Coord, CutError, Geometry, Layout, MultiPolygon, Polygon,
    Ring,
};

/// Cut a geometry at the antimeridian and the poles, repairing winding.
///
/// Equivalent to [`cut_with`] with `fix_winding = true`.
pub fn cut(geometry: &Geometry) -> Result<Geometry, CutError> {
    cut_with(geometry, true)
}

/// Cut a geometry at the antimeridian and the poles.
///
/// With `fix_winding` the drivers reorient exteriors counter-clockwise and
/// holes clockwise, rewind seam-crossing holes that arrive
/// counter-clockwise, and treat a both-poles enclosure as a winding mistake
/// (reversing the ring instead of extending it). Pass `false` to trust the
/// input winding, which is the only way to produce a polygon that genuinely
/// encloses both poles.
///
/// Returns [`CutError::UnsupportedType`] for non-area geometries and
/// [`CutError::UnsupportedLayout`] for measured vertex layouts; both are
/// permanent client errors with no partial result.
pub fn cut_with(geometry: &Geometry, fix_winding: bool) -> Result<Geometry, CutError> {
    match geometry {
        Geometry::Polygon(polygon) => cut_polygon(polygon, fix_winding),
        Geometry::MultiPolygon(multi_polygon) => Ok(Geometry::MultiPolygon(cut_multi_polygon(
            multi_polygon,
            fix_winding,
        )?)),
        Geometry::Other(kind) => Err(CutError::UnsupportedType(*kind)),
    }
}

fn cut_polygon(polygon: &Polygon, fix_winding: bool) -> Result<Geometry, CutError> {
    let mut polygons = cut_polygon_to_list(polygon, fix_winding)?;

    if polygons.len() == 1 {
        let polygon = polygons.remove(0);
        if is_ring_ccw(polygon.exterior()) {
            return Ok(Geometry::Polygon(polygon));
        }
        // A lone clockwise ring describes the complement of its interior.
        return Ok(Geometry::Polygon(world_minus_ring(&polygon)));
    }

    Ok(Geometry::MultiPolygon(MultiPolygon::new(polygons)))
}

fn cut_multi_polygon(
    multi_polygon: &MultiPolygon,
    fix_winding: bool,
) -> Result<MultiPolygon, CutError> {
    let mut polygons = Vec::new();
    for polygon in &multi_polygon.polygons {
        polygons.extend(cut_polygon_to_list(polygon, fix_winding)?);
    }
    Ok(MultiPolygon::new(polygons))
}

/// Cut one polygon into its seam-free pieces.
pub(crate) fn cut_polygon_to_list(
    polygon: &Polygon,
    fix_winding: bool,
) -> Result<Vec<Polygon>, CutError> {
    if !matches!(polygon.layout, Layout::Xy | Layout::Xyz) {
        return Err(CutError::UnsupportedLayout(polygon.layout));
    }

    let exterior = normalize_ring(polygon.exterior());
    let mut segments = segment_ring(&exterior);

    if segments.is_empty() {
        // No seam crossing anywhere on the exterior.
        let whole = if fix_winding {
            rewind(polygon)
        } else {
            polygon.clone()
        };
        return Ok(vec![whole]);
    }

    let mut whole_interiors: Vec<Ring> = Vec::new();
    for interior in polygon.interiors() {
        let mut interior_segments = segment_ring(interior);
        if interior_segments.is_empty() {
            whole_interiors.push(interior.clone());
            continue;
        }
        if fix_winding && is_ring_ccw(&unwrap_ring(interior)) {
            // A hole must wind clockwise; rewind it and split again.
            let reversed = reverse_ring(interior);
            interior_segments = segment_ring(&reversed);
        }
        segments.extend(interior_segments);
    }

    let segments = extend_over_poles(segments, fix_winding);
    let mut polygons = build_polygons(polygon.layout, segments);

    // Attach each hole to the first piece that contains it; the rest stay
    // in the pool for later pieces, and anything left over is dropped.
    for piece in &mut polygons {
        whole_interiors.retain(|interior| {
            let hole = Polygon::new(piece.layout, vec![interior.clone()]);
            if contains(piece, &hole) {
                piece.rings.push(interior.clone());
                false
            } else {
                true
            }
        });
    }

    Ok(polygons)
}

/// Reorient the exterior counter-clockwise and every hole clockwise.
fn rewind(polygon: &Polygon) -> Polygon {
    let mut rings = Vec::with_capacity(polygon.rings.len());
    if let Some(exterior) = polygon.rings.first() {
        rings.push(if is_ring_ccw(exterior) {
            exterior.clone()
        } else {
            reverse_ring(exterior)
        });
    }
    for interior in polygon.interiors() {
        rings.push(if is_ring_ccw(interior) {
            reverse_ring(interior)
        } else {
            interior.clone()
        });
    }
    Polygon::new(polygon.layout, rings)
}

/// Shift longitudes into [0, 360) so a ring straddling the seam becomes
/// contiguous for the orientation test.
fn unwrap_ring(ring: &[Coord]) -> Ring {
    ring.iter()
        .map(|coord| Coord {
            xy: Vector2::new(coord.lon().rem_euclid(360.0), coord.lat()),
            z: coord.z,
        })
        .collect()
}

/// The world rectangle with `polygon`'s exterior as its single hole.
fn world_minus_ring(polygon: &Polygon) -> Polygon {
    let shell = vec![
        Coord::new(-180.0, 90.0),
        Coord::new(-180.0, -90.0),
        Coord::new(180.0, -90.0),
        Coord::new(180.0, 90.0),
        Coord::new(-180.0, 90.0),
    ];
    Polygon::new(polygon.layout, vec![shell, polygon.exterior().to_vec()])
}
