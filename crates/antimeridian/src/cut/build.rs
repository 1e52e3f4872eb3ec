//! Greedy seam-walking reassembly of segments into closed polygons.
//!
//! Model
//! - Pop the last segment and look for a successor whose start continues
//!   the walk along the seam from the popped segment's end: same seam side,
//!   closer to the pole that side walks toward, and either crossing back to
//!   the other side or self-closing further out (donuts). The nearest such
//!   start wins; the two segments are concatenated and pushed back.
//! - A segment with no successor closes on itself and is emitted as a
//!   polygon; rings whose vertices are all equal (a corner pinned on the
//!   seam) are dropped.
//! - Terminates because every step either removes a segment from the pool
//!   or emits one; recursion depth is bounded by the segment count.

use std::cmp::Ordering;

use crate::geom::{Coord, Layout, Polygon};

/// Candidate successor: `index` into the remaining pool, or `None` for
/// closing the current segment on itself.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    index: Option<usize>,
    lat: f64,
}

/// A segment closes on itself when walking the seam from its end back to
/// its start moves toward the pole that seam side walks to (north on the
/// right rail, south on the left).
pub(crate) fn is_self_closing(segment: &[Coord]) -> bool {
    let start = segment[0];
    let end = segment[segment.len() - 1];
    let is_right = end.lon() == 180.0;
    start.lon() == end.lon()
        && ((is_right && start.lat() > end.lat()) || (!is_right && start.lat() < end.lat()))
}

/// Join segments into closed polygons.
pub(crate) fn build_polygons(layout: Layout, mut segments: Vec<Vec<Coord>>) -> Vec<Polygon> {
    let Some(mut segment) = segments.pop() else {
        return Vec::new();
    };

    let start = segment[0];
    let end = segment[segment.len() - 1];
    let is_right = end.lon() == 180.0;

    let mut candidates: Vec<Candidate> = Vec::new();
    if is_self_closing(&segment) {
        // Self-closing segments may still join another segment instead
        // (donuts), so self-closure competes as an ordinary candidate.
        candidates.push(Candidate {
            index: None,
            lat: start.lat(),
        });
    }

    for (index, other) in segments.iter().enumerate() {
        let other_start = other[0];
        if other_start.lon() != end.lon() {
            continue;
        }
        let other_end = other[other.len() - 1];

        let start_closer_to_north = other_start.lat() > end.lat();
        let start_closer_to_south = other_start.lat() < end.lat();
        let end_further_from_north = other_end.lat() < start.lat();
        let end_further_from_south = other_end.lat() > start.lat();

        if (is_right && start_closer_to_north && (!is_self_closing(other) || end_further_from_north))
            || (!is_right
                && start_closer_to_south
                && (!is_self_closing(other) || end_further_from_south))
        {
            candidates.push(Candidate {
                index: Some(index),
                lat: other_start.lat(),
            });
        }
    }

    // Closest continuation first: ascending latitude toward the north pole
    // on the right rail, descending toward the south pole on the left.
    candidates.sort_by(|a, b| a.lat.partial_cmp(&b.lat).unwrap_or(Ordering::Equal));
    if !is_right {
        candidates.reverse();
    }

    match candidates.first().and_then(|candidate| candidate.index) {
        Some(index) => {
            let successor = segments.remove(index);
            segment.extend(successor);
            segments.push(segment);
            build_polygons(layout, segments)
        }
        None => {
            let mut polygons = build_polygons(layout, segments);

            let all_equal = segment.iter().all(|&pt| pt == segment[0]);
            if !all_equal {
                if segment[segment.len() - 1] != segment[0] {
                    let first = segment[0];
                    segment.push(first);
                }
                polygons.push(Polygon::new(layout, vec![segment]));
            }

            polygons
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(pts: &[(f64, f64)]) -> Vec<Coord> {
        pts.iter().map(|&(lon, lat)| Coord::new(lon, lat)).collect()
    }

    #[test]
    fn self_closing_orientation_per_rail() {
        // Right rail: start north of end closes on itself.
        assert!(is_self_closing(&seg(&[(180.0, 10.0), (170.0, 0.0), (180.0, -10.0)])));
        assert!(!is_self_closing(&seg(&[(180.0, -10.0), (170.0, 0.0), (180.0, 10.0)])));
        // Left rail: start south of end.
        assert!(is_self_closing(&seg(&[(-180.0, -10.0), (-170.0, 0.0), (-180.0, 10.0)])));
        assert!(!is_self_closing(&seg(&[(-180.0, 10.0), (-170.0, 0.0), (-180.0, -10.0)])));
        // Opposite rails never self-close.
        assert!(!is_self_closing(&seg(&[(-180.0, 10.0), (0.0, 0.0), (180.0, -10.0)])));
    }

    #[test]
    fn two_independent_segments_emit_two_rings() {
        let east = seg(&[(180.0, -10.0), (170.0, -10.0), (170.0, 10.0), (180.0, 10.0)]);
        let west = seg(&[(-180.0, 10.0), (-170.0, 10.0), (-170.0, -10.0), (-180.0, -10.0)]);
        let polygons = build_polygons(Layout::Xy, vec![east, west]);
        assert_eq!(polygons.len(), 2);
        for polygon in &polygons {
            let ring = polygon.exterior();
            assert_eq!(ring.first(), ring.last());
        }
    }

    #[test]
    fn degenerate_pinned_corner_is_dropped() {
        let pinned = seg(&[(180.0, 10.0), (180.0, 10.0), (180.0, 10.0)]);
        let polygons = build_polygons(Layout::Xy, vec![pinned]);
        assert!(polygons.is_empty());
    }

    #[test]
    fn crossing_segments_join_before_emission() {
        // Two pieces of one ring around the seam: each starts where the
        // other ends, on opposite rails.
        let a = seg(&[(180.0, -10.0), (170.0, 0.0), (180.0, 10.0), (180.0, 90.0), (-180.0, 90.0)]);
        let b = seg(&[(-180.0, 10.0), (-170.0, 0.0), (-180.0, -10.0), (-180.0, -90.0), (180.0, -90.0)]);
        let polygons = build_polygons(Layout::Xy, vec![a, b]);
        assert_eq!(polygons.len(), 1);
        // All ten vertices plus the closure.
        assert_eq!(polygons[0].exterior().len(), 11);
    }
}
