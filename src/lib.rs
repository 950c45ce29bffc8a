//! This is the documentation for the **raybench** package, a sequential paraxial ray tracer for a
//! one-dimensional optical bench.
//!
//! A laser launches a ray from a fixed origin. The ray is traced through thin lenses and mirrors
//! placed along the horizontal optical axis until it leaves the bench. The result is a list of
//! [`RaySegment`](segment::RaySegment)s colored by the laser wavelength.
#![allow(clippy::module_name_repetitions)]

pub mod bench;
pub mod color;
pub mod console;
pub mod document;
pub mod element;
pub mod error;
pub mod export;
pub mod geometry;
pub mod laser;
pub mod segment;
pub mod tracer;
pub mod utils;

pub use bench::OpticalBench;
pub use document::BenchDocument;

/// Return the version information of the currently built raybench executable.
#[must_use]
pub fn get_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
