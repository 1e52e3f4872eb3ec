//! The antimeridian cutting pipeline.
//!
//! Purpose
//! - Turn a seam-crossing polygon into one or more seam-free polygons by
//!   (1) splitting rings at ±180° into seam-terminated segments
//!   (`segment`), (2) deciding pole enclosure from the seam topology of
//!   segment endpoints (`poles`), and (3) greedily rejoining segments into
//!   closed rings by walking along the seam (`build`). The drivers in
//!   `driver` orchestrate the stages and handle holes, winding repair, and
//!   the inverted-ring fallback.
//!
//! Why this split
//! - Each stage is independently testable and the data handed between them
//!   is just `Vec<Vec<Coord>>`; the drivers own all precondition checks.

mod build;
mod driver;
mod poles;
mod segment;

pub use driver::{cut, cut_with};
