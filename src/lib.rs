//! Normalization of unordered boundary polylines into a planar
//! straight-line graph for mesh generation.
//!
//! Pieces of a region boundary digitized independently rarely line up: their
//! endpoints leave small gaps, they point in arbitrary directions and come
//! in no particular order. [`operations::Normalize`] snaps the endpoints
//! together, reverses pieces so that every junction runs tail-to-head, splits
//! the result into closed loops and puts the loop enclosing all others first.
//! [`pslg::BuildPslg`] and [`pslg::GeoWriter`] then turn the loops into a
//! gmsh geometry script, tagging every edge with the piece it came from.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pslg;
pub mod topology;

pub use error::{ErrorKind, GeomeshError, Result};
