use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::geometry::Segment;
use crate::topology::Adjacency;

use super::adjacency::BuildAdjacency;
use super::NormalizeParams;

/// Segments after orientation, with the adjacency re-derived from them.
#[derive(Debug, Clone)]
pub struct Oriented {
    pub segments: Vec<Segment>,
    /// Positions of the segments whose point order was reversed.
    pub flipped: Vec<usize>,
    /// Adjacency of `segments`; every connection joins a tail to a head.
    pub adjacency: Adjacency,
}

/// Reverses segments so that every connection runs tail-to-head.
///
/// Signs are propagated breadth-first over each connected component, so the
/// work is linear in segments plus connections. Within a component the sign
/// assignment is unique up to negating all of it; the variant reversing
/// fewer segments is kept, ties keeping the lowest position as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orient {
    params: NormalizeParams,
}

impl Orient {
    #[must_use]
    pub fn new(params: NormalizeParams) -> Self {
        Self { params }
    }

    /// Executes the orientation.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OrientationContradiction` naming the two
    /// segments of a connection that no sign assignment can satisfy, and
    /// propagates errors from [`BuildAdjacency`].
    pub fn execute(&self, segments: &[Segment]) -> Result<Oriented> {
        let builder = BuildAdjacency::new(self.params);
        let adjacency = builder.execute(segments)?;
        let signs = solve_signs(&adjacency)?;

        let mut flipped = Vec::new();
        let oriented: Vec<Segment> = segments
            .iter()
            .zip(&signs)
            .enumerate()
            .map(|(i, (segment, &forward))| {
                if forward {
                    segment.clone()
                } else {
                    flipped.push(i);
                    segment.reversed()
                }
            })
            .collect();

        let adjacency = builder.execute(&oriented)?;
        ensure_consistent(&adjacency)?;

        debug!(flipped = flipped.len(), "oriented segments");
        Ok(Oriented {
            segments: oriented,
            flipped,
            adjacency,
        })
    }
}

/// Fails on the first connection that still joins two like ends.
fn ensure_consistent(adjacency: &Adjacency) -> Result<()> {
    match adjacency.inconsistencies().first() {
        Some((a, b)) => Err(TopologyError::OrientationContradiction {
            segment: a.segment,
            neighbor: b.segment,
        }
        .into()),
        None => Ok(()),
    }
}

/// Returns, per segment, `true` to keep its direction and `false` to reverse it.
fn solve_signs(adjacency: &Adjacency) -> Result<Vec<bool>> {
    let n = adjacency.len();
    let mut signs: Vec<Option<bool>> = vec![None; n];
    let mut queue = VecDeque::new();

    for root in 0..n {
        if signs[root].is_some() {
            continue;
        }
        signs[root] = Some(true);
        queue.push_back(root);
        let mut component = Vec::new();

        while let Some(i) = queue.pop_front() {
            component.push(i);
            let Some(sign_i) = signs[i] else {
                continue;
            };
            for (own_end, other) in adjacency.neighbors(i) {
                let j = other.segment;
                if j == i {
                    continue;
                }
                // Unlike ends keep relative orientation; like ends need one flipped.
                let required = if own_end == other.end { !sign_i } else { sign_i };
                match signs[j] {
                    None => {
                        signs[j] = Some(required);
                        queue.push_back(j);
                    }
                    Some(existing) if existing != required => {
                        return Err(TopologyError::OrientationContradiction {
                            segment: i,
                            neighbor: j,
                        }
                        .into());
                    }
                    Some(_) => {}
                }
            }
        }

        let reversed = component
            .iter()
            .filter(|&&i| signs[i] == Some(false))
            .count();
        if 2 * reversed > component.len() {
            for &i in &component {
                signs[i] = signs[i].map(|s| !s);
            }
        }
    }

    Ok(signs.into_iter().map(|s| s.unwrap_or(true)).collect())
}
