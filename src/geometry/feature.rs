use serde::{Deserialize, Serialize};

/// A coordinate tuple. Only the first two values (x, y) are used; any
/// further dimensions are carried through deserialization and ignored.
pub type Position = Vec<f64>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureCollectionTag {
    #[default]
    FeatureCollection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

/// A GeoJSON-shaped collection of polyline features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    tag: FeatureCollectionTag,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features,
        }
    }
}

/// A single feature: one geometry plus optional properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    tag: FeatureTag,
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Feature {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            geometry,
            properties: None,
        }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Shorthand for a `LineString` feature built from `(x, y)` pairs.
    #[must_use]
    pub fn line(points: &[(f64, f64)]) -> Self {
        Self::new(Geometry::LineString {
            coordinates: points.iter().map(|&(x, y)| vec![x, y]).collect(),
        })
    }
}

/// Geometry of a feature, tagged by its GeoJSON `type`.
///
/// Every geometry type other than the two line types deserializes into
/// [`Geometry::Unsupported`] and is rejected during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    #[serde(other)]
    Unsupported,
}

/// Feature properties recognized by this crate. Unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Segment identifier, set on normalized output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<usize>,
    /// Index of the loop the segment belongs to, set on normalized output.
    #[serde(rename = "loop", default, skip_serializing_if = "Option::is_none")]
    pub loop_index: Option<usize>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_and_multiline() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 0, 5]]},
                    "properties": {"name": "calving front", "color": "red"}
                },
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "MultiLineString",
                        "coordinates": [[[1, 0], [1, 1]], [[1, 1], [0, 0]]]
                    }
                }
            ]
        }"#;
        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(fc.features.len(), 2);
        assert_eq!(
            fc.features[0].properties.as_ref().unwrap().name.as_deref(),
            Some("calving front")
        );
        match &fc.features[1].geometry {
            Geometry::MultiLineString { coordinates } => assert_eq!(coordinates.len(), 2),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn other_geometry_is_unsupported() {
        let json = r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 0]}}"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.geometry, Geometry::Unsupported);
    }

    #[test]
    fn serializes_type_tags() {
        let fc = FeatureCollection::new(vec![Feature::line(&[(0.0, 0.0), (1.0, 0.0)])]);
        let value = serde_json::to_value(&fc).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert_eq!(value["features"][0]["geometry"]["type"], "LineString");
        assert!(value["features"][0].get("properties").is_none());
    }
}
