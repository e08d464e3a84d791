use tracing::debug;

use crate::error::{InputError, Result};
use crate::geometry::{FeatureCollection, Geometry, Position, Segment};
use crate::math::Point2;

/// Flattens line and multi-line features into numbered segments.
///
/// Segments are numbered in input order; a multi-line feature contributes one
/// segment per part, in part order. Several collections are read one after
/// the other, as if they were a single collection.
pub struct ExtractSegments<'a> {
    collections: Vec<&'a FeatureCollection>,
}

impl<'a> ExtractSegments<'a> {
    /// Creates an extraction over a single collection.
    #[must_use]
    pub fn new(collection: &'a FeatureCollection) -> Self {
        Self {
            collections: vec![collection],
        }
    }

    /// Creates an extraction over several collections, concatenated.
    #[must_use]
    pub fn from_collections(collections: impl IntoIterator<Item = &'a FeatureCollection>) -> Self {
        Self {
            collections: collections.into_iter().collect(),
        }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns `InputError::UnsupportedGeometry` for a feature that is not a
    /// line or multi-line, `InputError::InvalidPosition` for a position with
    /// fewer than two coordinates, `InputError::DegenerateSegment` for a part
    /// with fewer than two points, and `InputError::EmptyInput` if nothing
    /// was extracted.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();
        let features = self.collections.iter().flat_map(|c| c.features.iter());

        for (feature_idx, feature) in features.enumerate() {
            match &feature.geometry {
                Geometry::LineString { coordinates } => {
                    let points = to_points(feature_idx, coordinates)?;
                    segments.push(Segment::new(segments.len(), points)?);
                }
                Geometry::MultiLineString { coordinates } => {
                    for part in coordinates {
                        let points = to_points(feature_idx, part)?;
                        segments.push(Segment::new(segments.len(), points)?);
                    }
                }
                Geometry::Unsupported => {
                    return Err(InputError::UnsupportedGeometry {
                        feature: feature_idx,
                    }
                    .into());
                }
            }
        }

        if segments.is_empty() {
            return Err(InputError::EmptyInput.into());
        }
        debug!(segments = segments.len(), "extracted segments");
        Ok(segments)
    }
}

fn to_points(feature: usize, coordinates: &[Position]) -> Result<Vec<Point2>> {
    coordinates
        .iter()
        .map(|pos| match pos.as_slice() {
            [x, y, ..] => Ok(Point2::new(*x, *y)),
            _ => Err(InputError::InvalidPosition { feature }.into()),
        })
        .collect()
}
