use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::geometry::Segment;
use crate::math::polygon_2d::point_in_polygon;
use crate::math::Point2;
use crate::topology::Loop;

/// Returns the closed polygon traced by a loop.
///
/// The last point of each segment is dropped, as it coincides with the first
/// point of the next segment in the loop.
#[must_use]
pub fn loop_polygon(segments: &[Segment], boundary: &Loop) -> Vec<Point2> {
    boundary
        .segments()
        .iter()
        .flat_map(|&s| {
            let pts = segments[s].points();
            pts[..pts.len() - 1].iter().copied()
        })
        .collect()
}

/// Moves the loop enclosing every other loop to the front.
///
/// The remaining loops keep their relative order and act as holes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderByContainment;

impl OrderByContainment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the ordering.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NoBoundingLoop` if there are no loops or no
    /// loop contains all vertices of all other loops.
    pub fn execute(&self, segments: &[Segment], mut loops: Vec<Loop>) -> Result<Vec<Loop>> {
        match loops.len() {
            0 => return Err(TopologyError::NoBoundingLoop { loops: 0 }.into()),
            1 => return Ok(loops),
            _ => {}
        }

        let polygons: Vec<Vec<Point2>> = loops.iter().map(|l| loop_polygon(segments, l)).collect();
        let contains_all = |outer: usize| {
            polygons
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != outer)
                .all(|(_, inner)| inner.iter().all(|p| point_in_polygon(p, &polygons[outer])))
        };

        let outer = (0..loops.len())
            .find(|&k| contains_all(k))
            .ok_or(TopologyError::NoBoundingLoop { loops: loops.len() })?;

        let boundary = loops.remove(outer);
        loops.insert(0, boundary);
        debug!(outer, holes = loops.len() - 1, "ordered loops by containment");
        Ok(loops)
    }
}
