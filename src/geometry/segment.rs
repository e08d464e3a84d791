use std::fmt;

use crate::error::{InputError, Result};
use crate::math::Point2;

/// One of the two endpoints of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    /// The first point.
    Head,
    /// The last point.
    Tail,
}

impl End {
    /// Both ends, head first.
    pub const BOTH: [End; 2] = [End::Head, End::Tail];

    /// Returns the other end.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Head => Self::Tail,
            Self::Tail => Self::Head,
        }
    }

    /// Signed indicator used by the adjacency relation: `+1` for the tail,
    /// `-1` for the head.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Head => -1,
            Self::Tail => 1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Tail => 1,
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => f.write_str("head"),
            Self::Tail => f.write_str("tail"),
        }
    }
}

/// An ordered polyline piece of a region boundary.
///
/// The identifier is the segment's position in the extracted input and is
/// kept through every stage, so it can tag the edges emitted for the mesher.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: usize,
    points: Vec<Point2>,
}

impl Segment {
    /// Creates a segment from at least two points.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DegenerateSegment` if fewer than 2 points are given.
    pub fn new(id: usize, points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(InputError::DegenerateSegment {
                segment: id,
                points: points.len(),
            }
            .into());
        }
        Ok(Self { id, points })
    }

    /// Returns the segment identifier.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the ordered points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of points, always at least 2.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never `true` for a constructed segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn head(&self) -> &Point2 {
        &self.points[0]
    }

    #[must_use]
    pub fn tail(&self) -> &Point2 {
        &self.points[self.points.len() - 1]
    }

    /// Returns the point at the given end.
    #[must_use]
    pub fn endpoint(&self, end: End) -> &Point2 {
        match end {
            End::Head => self.head(),
            End::Tail => self.tail(),
        }
    }

    /// Moves the point at the given end.
    pub fn set_endpoint(&mut self, end: End, point: Point2) {
        let idx = match end {
            End::Head => 0,
            End::Tail => self.points.len() - 1,
        };
        self.points[idx] = point;
    }

    /// Returns a copy traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { id: self.id, points }
    }
}
