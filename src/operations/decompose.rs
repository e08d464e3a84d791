use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::geometry::End;
use crate::topology::{Adjacency, EndpointRef, Loop};

/// Splits oriented segments into closed loops.
///
/// The tail connection of each segment gives its successor; loops are traced
/// from the lowest unvisited position until the walk comes back to its start.
/// A segment whose tail connects to its own head forms a loop by itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecomposeLoops;

impl DecomposeLoops {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the decomposition on an oriented adjacency.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::IncompleteCover` naming the first segment whose
    /// tail does not lead to a head, or that would be visited twice.
    pub fn execute(&self, adjacency: &Adjacency) -> Result<Vec<Loop>> {
        let n = adjacency.len();
        let successor: Vec<Option<usize>> = (0..n)
            .map(|i| match adjacency.connection(EndpointRef::new(i, End::Tail)) {
                Some(next) if next.end == End::Head => Some(next.segment),
                _ => None,
            })
            .collect();

        let mut visited = vec![false; n];
        let mut loops = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }
            let mut members = Vec::new();
            let mut current = start;
            loop {
                visited[current] = true;
                members.push(current);
                let next =
                    successor[current].ok_or(TopologyError::IncompleteCover { segment: current })?;
                if next == start {
                    break;
                }
                if visited[next] {
                    return Err(TopologyError::IncompleteCover { segment: next }.into());
                }
                current = next;
            }
            loops.push(Loop::new(members));
        }

        debug!(loops = loops.len(), "decomposed into loops");
        Ok(loops)
    }
}
