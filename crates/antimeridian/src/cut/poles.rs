//! Pole enclosure from seam topology.
//!
//! Model
//! - After segmentation every segment starts and ends on the seam. Classify
//!   the endpoints by seam side and sort them toward the pole that side
//!   walks to (south on the left rail, north on the right). When no segment
//!   start stands between the extreme end and the pole, the input enclosed
//!   that pole: extend the ending segment along the seam and across the
//!   pole at ±90.
//! - Enclosing *both* poles while winding repair is on means the ring was
//!   wound opposite to its intent; the extensions are discarded and every
//!   original segment is returned reversed instead.

use std::cmp::Ordering;

use crate::geom::Coord;

/// One segment endpoint on the seam, addressable for extension.
#[derive(Clone, Copy, Debug)]
struct SeamEdge {
    index: usize,
    lat: f64,
}

fn sort_ascending(edges: &mut [SeamEdge]) {
    edges.sort_by(|a, b| a.lat.partial_cmp(&b.lat).unwrap_or(Ordering::Equal));
}

fn sort_descending(edges: &mut [SeamEdge]) {
    edges.sort_by(|a, b| b.lat.partial_cmp(&a.lat).unwrap_or(Ordering::Equal));
}

/// Extend segments across enclosed poles, or reverse everything for the
/// both-poles winding repair.
pub(crate) fn extend_over_poles(
    mut segments: Vec<Vec<Coord>>,
    fix_winding: bool,
) -> Vec<Vec<Coord>> {
    let mut left_starts: Vec<SeamEdge> = Vec::new();
    let mut right_starts: Vec<SeamEdge> = Vec::new();
    let mut left_ends: Vec<SeamEdge> = Vec::new();
    let mut right_ends: Vec<SeamEdge> = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        let start = segment[0];
        let end = segment[segment.len() - 1];
        if start.lon() == -180.0 {
            left_starts.push(SeamEdge {
                index,
                lat: start.lat(),
            });
        } else {
            right_starts.push(SeamEdge {
                index,
                lat: start.lat(),
            });
        }
        if end.lon() == -180.0 {
            left_ends.push(SeamEdge {
                index,
                lat: end.lat(),
            });
        } else {
            right_ends.push(SeamEdge {
                index,
                lat: end.lat(),
            });
        }
    }

    sort_ascending(&mut left_ends);
    sort_ascending(&mut left_starts);
    sort_descending(&mut right_ends);
    sort_descending(&mut right_starts);

    // Snapshot before extension; the both-poles repair reverses the
    // unextended segments.
    let original = segments.clone();

    let mut over_south_pole = false;
    let mut over_north_pole = false;

    if let Some(end) = left_ends.first() {
        if left_starts.first().map_or(true, |start| end.lat < start.lat) {
            over_south_pole = true;
            segments[end.index].push(Coord::new(-180.0, -90.0));
            segments[end.index].push(Coord::new(180.0, -90.0));
        }
    }

    if let Some(end) = right_ends.first() {
        if right_starts.first().map_or(true, |start| end.lat > start.lat) {
            over_north_pole = true;
            segments[end.index].push(Coord::new(180.0, 90.0));
            segments[end.index].push(Coord::new(-180.0, 90.0));
        }
    }

    if fix_winding && over_north_pole && over_south_pole {
        // Enclosing both poles is the complement of what the winding asked
        // for; flip the winding by reversing every segment.
        let mut reversed = original;
        for segment in &mut reversed {
            segment.reverse();
        }
        return reversed;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(pts: &[(f64, f64)]) -> Vec<Coord> {
        pts.iter().map(|&(lon, lat)| Coord::new(lon, lat)).collect()
    }

    #[test]
    fn north_pole_enclosure_extends_along_the_seam() {
        // Single segment from the left rail to the right rail at lat 80: a
        // ring around the north pole.
        let segments = extend_over_poles(
            vec![seg(&[(-180.0, 80.0), (0.0, 80.0), (180.0, 80.0)])],
            true,
        );
        let segment = &segments[0];
        let n = segment.len();
        assert_eq!(segment[n - 2], Coord::new(180.0, 90.0));
        assert_eq!(segment[n - 1], Coord::new(-180.0, 90.0));
    }

    #[test]
    fn south_pole_enclosure_extends_along_the_seam() {
        let segments = extend_over_poles(
            vec![seg(&[(180.0, -80.0), (0.0, -80.0), (-180.0, -80.0)])],
            true,
        );
        let segment = &segments[0];
        let n = segment.len();
        assert_eq!(segment[n - 2], Coord::new(-180.0, -90.0));
        assert_eq!(segment[n - 1], Coord::new(180.0, -90.0));
    }

    #[test]
    fn start_between_end_and_pole_blocks_extension() {
        // Right rail: an end at 50 with a start at 60 above it; the walk to
        // the north pole passes a start, so nothing is extended.
        let segments = extend_over_poles(
            vec![
                seg(&[(-180.0, 10.0), (0.0, 30.0), (180.0, 50.0)]),
                seg(&[(180.0, 60.0), (0.0, 70.0), (-180.0, 60.0)]),
            ],
            true,
        );
        assert_eq!(segments[0][segments[0].len() - 1], Coord::new(180.0, 50.0));
        // Left rail blocks too: end at 60 north of start at 10.
        assert_eq!(
            segments[1][segments[1].len() - 1],
            Coord::new(-180.0, 60.0)
        );
    }

    #[test]
    fn both_poles_with_winding_fix_reverses_segments() {
        // Right end (10) above the right start (-10) and left end (-10)
        // below the left start (10): both conditions fire.
        let east = seg(&[(180.0, -10.0), (170.0, 0.0), (180.0, 10.0)]);
        let west = seg(&[(-180.0, 10.0), (-170.0, 0.0), (-180.0, -10.0)]);
        let segments = extend_over_poles(vec![east.clone(), west.clone()], true);

        let mut east_reversed = east;
        east_reversed.reverse();
        let mut west_reversed = west;
        west_reversed.reverse();
        assert_eq!(segments, vec![east_reversed, west_reversed]);
    }

    #[test]
    fn both_poles_without_winding_fix_keeps_extensions() {
        let east = seg(&[(180.0, -10.0), (170.0, 0.0), (180.0, 10.0)]);
        let west = seg(&[(-180.0, 10.0), (-170.0, 0.0), (-180.0, -10.0)]);
        let segments = extend_over_poles(vec![east, west], false);

        let east_ext = &segments[0];
        assert_eq!(east_ext[east_ext.len() - 2], Coord::new(180.0, 90.0));
        let west_ext = &segments[1];
        assert_eq!(west_ext[west_ext.len() - 2], Coord::new(-180.0, -90.0));
    }
}
