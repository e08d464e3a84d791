pub mod feature;
pub mod segment;

pub use feature::{Feature, FeatureCollection, Geometry, Position, Properties};
pub use segment::{End, Segment};
