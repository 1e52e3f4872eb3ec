//! Winding primitives: signed area, orientation test, ring reversal.

use super::types::{Coord, Ring};

/// Twice the signed shoelace area of `ring` in the lon/lat plane.
///
/// Positive for counter-clockwise vertex order. The ring may be given
/// closed (first == last) or open; the wrap-around edge is included either
/// way (a closed ring just contributes one zero-length edge).
pub fn signed_area(ring: &[Coord]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let a = ring[i].xy;
        let b = ring[(i + 1) % n].xy;
        area += a.perp(&b);
    }
    area
}

/// Counter-clockwise test in lon/lat space (GeoJSON exterior orientation).
#[inline]
pub fn is_ring_ccw(ring: &[Coord]) -> bool {
    signed_area(ring) > 0.0
}

/// Reversed copy of `ring`. A closed ring stays closed: reversing
/// `[a, b, c, a]` yields `[a, c, b, a]`.
pub fn reverse_ring(ring: &[Coord]) -> Ring {
    let mut reversed = ring.to_vec();
    reversed.reverse();
    reversed
}
