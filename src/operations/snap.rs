use tracing::debug;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::distance_2d::midpoint;

use super::adjacency::BuildAdjacency;
use super::NormalizeParams;

/// Closes small gaps between touching endpoints.
///
/// Each pair of connected endpoints is moved to its midpoint. A closed
/// polyline, whose head and tail are connected to each other, gets both ends
/// moved to their average. Endpoints without a reciprocated match stay where
/// they are.
///
/// Moving a pair can make a previously one-sided match mutual, so passes are
/// repeated until one moves nothing, at most once per segment plus one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snap {
    params: NormalizeParams,
}

impl Snap {
    #[must_use]
    pub fn new(params: NormalizeParams) -> Self {
        Self { params }
    }

    /// Returns snapped copies of `segments`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`BuildAdjacency`].
    pub fn execute(&self, segments: &[Segment]) -> Result<Vec<Segment>> {
        let builder = BuildAdjacency::new(self.params);
        let mut snapped = segments.to_vec();

        let mut moved = 0usize;
        let mut passes = 0usize;
        while passes <= segments.len() {
            passes += 1;
            let step = snap_pass(&builder, &mut snapped)?;
            moved += step;
            if step == 0 {
                break;
            }
        }

        debug!(moved, passes, "snapped endpoints");
        Ok(snapped)
    }
}

/// Moves every connected pair to its midpoint; returns how many pairs moved.
///
/// Connections pair endpoints one-to-one, so updating in place reads no
/// endpoint that this pass has already written.
fn snap_pass(builder: &BuildAdjacency, segments: &mut [Segment]) -> Result<usize> {
    let adjacency = builder.execute(segments)?;
    let mut moved = 0usize;
    for (a, b) in adjacency.connections() {
        let pa = *segments[a.segment].endpoint(a.end);
        let pb = *segments[b.segment].endpoint(b.end);
        if pa == pb {
            continue;
        }
        moved += 1;
        let mid = midpoint(&pa, &pb);
        segments[a.segment].set_endpoint(a.end, mid);
        segments[b.segment].set_endpoint(b.end, mid);
    }
    Ok(moved)
}
