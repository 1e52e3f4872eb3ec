//! Ray-cast containment tests.
//!
//! Model
//! - `ring_contains_point` casts a horizontal ray from the query point and
//!   counts edge crossings; odd parity means inside. Rings with fewer than
//!   three vertices never contain anything.
//! - `contains` lifts the point test to polygons: every exterior vertex of
//!   the inner polygon must fall inside the outer exterior, and must not
//!   fall entirely inside any hole of the outer polygon.

use super::types::{Coord, Polygon};

/// One directed edge (a, b) against a horizontal ray from `p`.
#[inline]
fn ray_intersects(p: Coord, a: Coord, b: Coord) -> bool {
    (a.lat() > p.lat()) != (b.lat() > p.lat())
        && p.lon() < (b.lon() - a.lon()) * (p.lat() - a.lat()) / (b.lat() - a.lat()) + a.lon()
}

/// Point-in-ring by crossing parity.
pub fn ring_contains_point(ring: &[Coord], pt: Coord) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = ring[(i + n - 1) % n];
        let b = ring[i];
        if ray_intersects(pt, a, b) {
            inside = !inside;
        }
    }
    inside
}

/// True when `inner` is contained by `outer`.
///
/// Vertex-sampling test: sufficient for the cutter's use, where candidate
/// holes never cross the containing exterior (they were split beforehand if
/// they crossed the seam).
pub fn contains(outer: &Polygon, inner: &Polygon) -> bool {
    if outer.rings.is_empty() || inner.rings.is_empty() {
        return false;
    }

    let shell = outer.exterior();
    let probe = inner.exterior();
    let within = probe.iter().all(|&pt| ring_contains_point(shell, pt));

    if within {
        // Fully inside a hole of `outer` means not contained after all.
        for hole in outer.interiors() {
            if probe.iter().all(|&pt| ring_contains_point(hole, pt)) {
                return false;
            }
        }
    }

    within
}
