use tracing::info;

use crate::error::{InputError, Result};
use crate::geometry::{Feature, FeatureCollection, Geometry, Properties, Segment};
use crate::pslg::{BuildPslg, Pslg};
use crate::topology::Loop;

use super::{
    DecomposeLoops, ExtractSegments, NormalizeParams, OrderByContainment, Orient, Snap,
};

/// Snapped, oriented segments grouped into loops, outer loop first.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub segments: Vec<Segment>,
    pub loops: Vec<Loop>,
    /// Positions of the segments that were reversed.
    pub flipped: Vec<usize>,
}

impl Normalized {
    /// The loop enclosing all others.
    #[must_use]
    pub fn outer_loop(&self) -> &Loop {
        &self.loops[0]
    }

    /// Builds the planar straight-line graph of these loops.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`BuildPslg`].
    pub fn to_pslg(&self) -> Result<Pslg> {
        BuildPslg::new().execute(&self.segments, &self.loops)
    }

    /// Returns the normalized boundary as line features in loop order.
    ///
    /// Each feature records its segment identifier and the index of its loop.
    #[must_use]
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .loops
            .iter()
            .enumerate()
            .flat_map(|(loop_index, l)| l.segments().iter().map(move |&s| (loop_index, s)))
            .map(|(loop_index, s)| {
                let segment = &self.segments[s];
                Feature::new(Geometry::LineString {
                    coordinates: segment.points().iter().map(|p| vec![p.x, p.y]).collect(),
                })
                .with_properties(Properties {
                    name: None,
                    segment: Some(segment.id()),
                    loop_index: Some(loop_index),
                })
            })
            .collect();
        FeatureCollection::new(features)
    }
}

/// Runs the whole normalization: extract, snap, orient, decompose into
/// loops, and put the enclosing loop first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalize {
    params: NormalizeParams,
}

impl Normalize {
    #[must_use]
    pub fn new(params: NormalizeParams) -> Self {
        Self { params }
    }

    /// Normalizes the line features of a collection.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage; no partial result is kept.
    pub fn execute(&self, collection: &FeatureCollection) -> Result<Normalized> {
        let segments = ExtractSegments::new(collection).execute()?;
        self.execute_segments(&segments)
    }

    /// Normalizes already extracted segments.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyInput` for an empty slice, otherwise the
    /// first error raised by any stage; no partial result is kept.
    pub fn execute_segments(&self, segments: &[Segment]) -> Result<Normalized> {
        if segments.is_empty() {
            return Err(InputError::EmptyInput.into());
        }
        let snapped = Snap::new(self.params).execute(segments)?;
        let oriented = Orient::new(self.params).execute(&snapped)?;
        let loops = DecomposeLoops::new().execute(&oriented.adjacency)?;
        let loops = OrderByContainment::new().execute(&oriented.segments, loops)?;

        info!(
            segments = oriented.segments.len(),
            loops = loops.len(),
            flipped = oriented.flipped.len(),
            "normalized boundary"
        );
        Ok(Normalized {
            segments: oriented.segments,
            loops,
            flipped: oriented.flipped,
        })
    }
}
