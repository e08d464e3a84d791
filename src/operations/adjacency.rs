use tracing::{debug, warn};

use crate::error::{Result, TopologyError};
use crate::geometry::{End, Segment};
use crate::topology::{Adjacency, EndpointRef};

use super::nearest::find_nearest;
use super::NormalizeParams;

/// Builds the signed endpoint adjacency of a segment list.
///
/// Both ends of every segment are matched to their nearest endpoint. The
/// result has to be rebuilt whenever segment geometry changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildAdjacency {
    params: NormalizeParams,
}

impl BuildAdjacency {
    #[must_use]
    pub fn new(params: NormalizeParams) -> Self {
        Self { params }
    }

    /// Executes the matching.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NoMatchWithinTolerance` if a tolerance is set
    /// and some endpoint has no candidate within it.
    pub fn execute(&self, segments: &[Segment]) -> Result<Adjacency> {
        let mut matches = Vec::with_capacity(segments.len());
        for i in 0..segments.len() {
            let head = find_nearest(segments, i, End::Head);
            let tail = find_nearest(segments, i, End::Tail);
            if let Some(tolerance) = self.params.tolerance {
                for (end, m) in [(End::Head, head), (End::Tail, tail)] {
                    if m.distance > tolerance {
                        return Err(TopologyError::NoMatchWithinTolerance {
                            segment: i,
                            end,
                            distance: m.distance,
                            tolerance,
                        }
                        .into());
                    }
                }
            }
            matches.push([head, tail]);
        }

        let adjacency = Adjacency::from_matches(matches);
        let dangling: Vec<EndpointRef> = adjacency.dangling().collect();
        if !dangling.is_empty() {
            warn!(count = dangling.len(), first = ?dangling[0], "unreciprocated endpoint matches");
        }
        debug!(
            segments = adjacency.len(),
            connections = adjacency.connections().count(),
            "built adjacency"
        );
        Ok(adjacency)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, GeomeshError};
    use crate::operations::fixtures::{scrambled_square, segments};

    #[test]
    fn square_is_fully_connected() {
        let adj = BuildAdjacency::default().execute(&scrambled_square()).unwrap();
        assert_eq!(adj.connections().count(), 4);
        assert_eq!(adj.dangling().count(), 0);
        // Tail of 0 at (1,0) touches the head of 2.
        assert_eq!(adj.sign(0, 2), 1);
        // Head of 0 at (0,0) touches the head of 3.
        assert_eq!(adj.sign(0, 3), -1);
        assert_eq!(adj.sign(0, 1), 0);
        // Pieces 1 and 3 are reversed, so two connections join like ends.
        assert!(!adj.is_consistent());
        assert_eq!(adj.inconsistencies().len(), 2);
    }

    #[test]
    fn tolerance_rejects_distant_match() {
        let segs = segments(&[
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)],
            &[(10.0, 10.0), (11.0, 10.0)],
        ]);
        let err = BuildAdjacency::new(NormalizeParams::with_tolerance(0.5))
            .execute(&segs)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoMatchWithinTolerance);
        match err {
            GeomeshError::Topology(TopologyError::NoMatchWithinTolerance { segment, end, .. }) => {
                assert_eq!(segment, 1);
                assert_eq!(end, End::Head);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn without_tolerance_distant_match_is_kept() {
        let segs = segments(&[
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)],
            &[(10.0, 10.0), (11.0, 10.0)],
        ]);
        let adj = BuildAdjacency::default().execute(&segs).unwrap();
        assert_eq!(adj.len(), 2);
        // The short piece's two ends are each other's nearest endpoints.
        assert_eq!(
            adj.connection(EndpointRef::new(1, End::Head)),
            Some(EndpointRef::new(1, End::Tail))
        );
    }
}
