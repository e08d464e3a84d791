//! Planar straight-line graph output for an external mesh generator.

mod geo_writer;

pub use geo_writer::{GeoDocument, GeoWriter};

use std::collections::BTreeMap;
use std::ops::Range;

use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::geometry::Segment;
use crate::math::Point2;
use crate::topology::Loop;

/// Points and edges of closed boundary loops.
///
/// Every segment contributes all of its points except the last, which is the
/// first point of the next segment in its loop. Edge `e` starts at point `e`:
/// the edges of a segment join its consecutive points and then close onto
/// the first point of its loop successor.
#[derive(Debug, Clone)]
pub struct Pslg {
    pub points: Vec<Point2>,
    /// Pairs of 0-based point indices.
    pub edges: Vec<[usize; 2]>,
    /// Identifier of the segment each edge came from.
    pub edge_tags: Vec<usize>,
    /// Loops of segment positions, outer boundary first.
    pub loops: Vec<Loop>,
    /// First point (and edge) index of each segment, plus the total.
    offsets: Vec<usize>,
}

impl Pslg {
    /// Edge indices derived from the segment at `position`.
    #[must_use]
    pub fn edges_of_segment(&self, position: usize) -> Range<usize> {
        self.offsets[position]..self.offsets[position + 1]
    }

    /// Edge indices of loop `l`, in traversal order.
    #[must_use]
    pub fn loop_edges(&self, l: usize) -> Vec<usize> {
        self.loops[l]
            .segments()
            .iter()
            .flat_map(|&s| self.edges_of_segment(s))
            .collect()
    }

    /// Edge indices grouped by segment identifier, in identifier order.
    #[must_use]
    pub fn physical_lines(&self) -> BTreeMap<usize, Vec<usize>> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (e, &tag) in self.edge_tags.iter().enumerate() {
            groups.entry(tag).or_default().push(e);
        }
        groups
    }
}

/// Assembles a [`Pslg`] from oriented segments and their loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildPslg;

impl BuildPslg {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::IncompleteCover` if some segment belongs to no loop.
    pub fn execute(&self, segments: &[Segment], loops: &[Loop]) -> Result<Pslg> {
        let mut next: Vec<Option<usize>> = vec![None; segments.len()];
        for l in loops {
            for &s in l.segments() {
                next[s] = l.next_after(s);
            }
        }

        let mut offsets = Vec::with_capacity(segments.len() + 1);
        offsets.push(0);
        for s in segments {
            offsets.push(offsets[offsets.len() - 1] + s.len() - 1);
        }
        let total = offsets[segments.len()];

        let mut points = Vec::with_capacity(total);
        let mut edges = Vec::with_capacity(total);
        let mut edge_tags = Vec::with_capacity(total);

        for (position, segment) in segments.iter().enumerate() {
            let successor = next[position].ok_or(TopologyError::IncompleteCover { segment: position })?;
            let start = offsets[position];
            let kept = segment.len() - 1;

            points.extend_from_slice(&segment.points()[..kept]);
            for k in 0..kept - 1 {
                edges.push([start + k, start + k + 1]);
            }
            edges.push([start + kept - 1, offsets[successor]]);
            edge_tags.extend(std::iter::repeat(segment.id()).take(kept));
        }

        debug!(points = points.len(), edges = edges.len(), "built PSLG");
        Ok(Pslg {
            points,
            edges,
            edge_tags,
            loops: loops.to_vec(),
            offsets,
        })
    }
}
