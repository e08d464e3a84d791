pub mod adjacency;
pub mod boundary_loop;

pub use adjacency::{Adjacency, EndpointRef, Match};
pub use boundary_loop::Loop;
