//! Cut a Fiji-style bounding box that straddles the antimeridian and print
//! the resulting pieces.
//!
//! Usage:
//!   cargo run -p antimeridian --example split_fiji

use antimeridian::{cut, Coord, Geometry, Layout, Polygon};

fn main() {
    // Rough bounding box around the Fiji archipelago: lon 176°E to 178°W.
    let bbox = Polygon::new(
        Layout::Xy,
        vec![vec![
            Coord::new(176.0, -15.0),
            Coord::new(176.0, -20.0),
            Coord::new(-178.0, -20.0),
            Coord::new(-178.0, -15.0),
            Coord::new(176.0, -15.0),
        ]],
    );

    match cut(&Geometry::Polygon(bbox)).unwrap() {
        Geometry::Polygon(polygon) => {
            println!("1 polygon, {} exterior vertices", polygon.exterior().len());
        }
        Geometry::MultiPolygon(multi_polygon) => {
            println!("{} polygons:", multi_polygon.polygons.len());
            for (i, polygon) in multi_polygon.polygons.iter().enumerate() {
                let lons: Vec<f64> = polygon.exterior().iter().map(|c| c.lon()).collect();
                let min = lons.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = lons.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                println!("  piece {i}: lon span [{min}, {max}]");
            }
        }
        Geometry::Other(kind) => println!("unexpected geometry kind: {kind}"),
    }
}
