use thiserror::Error;

use crate::geometry::End;

/// Top-level error type for boundary normalization.
#[derive(Debug, Error)]
pub enum GeomeshError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading polyline features into segments.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("feature {feature} has an unsupported geometry type (expected LineString or MultiLineString)")]
    UnsupportedGeometry { feature: usize },

    #[error("segment {segment} has {points} point(s), at least 2 are required")]
    DegenerateSegment { segment: usize, points: usize },

    #[error("feature {feature} contains a position with fewer than 2 coordinates")]
    InvalidPosition { feature: usize },

    #[error("input contains no line features")]
    EmptyInput,
}

/// Errors raised while turning segments into a consistent set of loops.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error(
        "{end} of segment {segment} is {distance} away from its nearest endpoint, beyond tolerance {tolerance}"
    )]
    NoMatchWithinTolerance {
        segment: usize,
        end: End,
        distance: f64,
        tolerance: f64,
    },

    #[error("segments {segment} and {neighbor} cannot be oriented head-to-tail")]
    OrientationContradiction { segment: usize, neighbor: usize },

    #[error("segment {segment} does not close into a loop")]
    IncompleteCover { segment: usize },

    #[error("none of the {loops} loops contains all the others")]
    NoBoundingLoop { loops: usize },
}

/// Flat classification of a [`GeomeshError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedGeometry,
    DegenerateSegment,
    InvalidPosition,
    EmptyInput,
    NoMatchWithinTolerance,
    OrientationContradiction,
    IncompleteCover,
    NoBoundingLoop,
    Io,
}

impl GeomeshError {
    /// Returns the category of this error, dropping its details.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(e) => match e {
                InputError::UnsupportedGeometry { .. } => ErrorKind::UnsupportedGeometry,
                InputError::DegenerateSegment { .. } => ErrorKind::DegenerateSegment,
                InputError::InvalidPosition { .. } => ErrorKind::InvalidPosition,
                InputError::EmptyInput => ErrorKind::EmptyInput,
            },
            Self::Topology(e) => match e {
                TopologyError::NoMatchWithinTolerance { .. } => ErrorKind::NoMatchWithinTolerance,
                TopologyError::OrientationContradiction { .. } => {
                    ErrorKind::OrientationContradiction
                }
                TopologyError::IncompleteCover { .. } => ErrorKind::IncompleteCover,
                TopologyError::NoBoundingLoop { .. } => ErrorKind::NoBoundingLoop,
            },
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Convenience type alias for results using [`GeomeshError`].
pub type Result<T> = std::result::Result<T, GeomeshError>;
