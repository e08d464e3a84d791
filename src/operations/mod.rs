mod adjacency;
mod containment;
mod decompose;
mod extract;
mod nearest;
mod normalize;
mod orient;
mod snap;

pub use adjacency::BuildAdjacency;
pub use containment::{loop_polygon, OrderByContainment};
pub use decompose::DecomposeLoops;
pub use extract::ExtractSegments;
pub use nearest::find_nearest;
pub use normalize::{Normalize, Normalized};
pub use orient::{Orient, Oriented};
pub use snap::Snap;

/// Parameters shared by the stages that match endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizeParams {
    /// Maximum distance between two endpoints that may be joined.
    ///
    /// `None` joins every endpoint to its nearest candidate however far it
    /// is. `Some(t)` rejects any nearest match farther than `t`.
    pub tolerance: Option<f64>,
}

impl NormalizeParams {
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: Some(tolerance),
        }
    }
}
