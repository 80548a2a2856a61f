use geojson::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// A `(longitude, latitude)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    fn to_geojson(self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }
}

/// Geometry kinds carried by map fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    LineString(Vec<Position>),
    /// Outer ring first, holes after.
    Polygon(Vec<Vec<Position>>),
}

impl Geometry {
    /// Number of polygon rings whose first point differs from the last.
    ///
    /// Line strings never count as unclosed.
    #[must_use]
    pub fn unclosed_rings(&self) -> usize {
        match self {
            Self::LineString(_) => 0,
            Self::Polygon(rings) => rings.iter().filter(|ring| !ring_is_closed(ring)).count(),
        }
    }

    /// Returns a copy where every polygon ring ends on its first point.
    #[must_use]
    pub fn closed(&self) -> Self {
        match self {
            Self::LineString(points) => Self::LineString(points.clone()),
            Self::Polygon(rings) => {
                Self::Polygon(rings.iter().map(|ring| close_ring(ring)).collect())
            }
        }
    }

    #[must_use]
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Self::LineString(points) => Box::new(points.iter()),
            Self::Polygon(rings) => Box::new(rings.iter().flatten()),
        }
    }

    /// Converts to a `geojson` geometry. Rings are closed on the way out
    /// because RFC 7946 requires linear rings to end where they start.
    #[must_use]
    pub fn to_geojson(&self) -> geojson::Geometry {
        let value = match self.closed() {
            Self::LineString(points) => {
                geojson::Value::LineString(points.into_iter().map(Position::to_geojson).collect())
            }
            Self::Polygon(rings) => geojson::Value::Polygon(
                rings
                    .into_iter()
                    .map(|ring| ring.into_iter().map(Position::to_geojson).collect())
                    .collect(),
            ),
        };
        geojson::Geometry::new(value)
    }
}

fn ring_is_closed(ring: &[Position]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => first == last,
        _ => true,
    }
}

fn close_ring(ring: &[Position]) -> Vec<Position> {
    let mut closed = ring.to_vec();
    if !ring_is_closed(ring) {
        if let Some(first) = ring.first() {
            closed.push(*first);
        }
    }
    closed
}

/// One shape of a map, optionally named so chart data can target it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFeature {
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MapFeature {
    #[must_use]
    pub fn line(points: Vec<Position>) -> Self {
        Self {
            geometry: Geometry::LineString(points),
            name: None,
        }
    }

    #[must_use]
    pub fn polygon(name: impl Into<String>, rings: Vec<Vec<Position>>) -> Self {
        Self {
            geometry: Geometry::Polygon(rings),
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub fn to_geojson(&self) -> geojson::Feature {
        let mut properties = JsonObject::new();
        if let Some(name) = &self.name {
            properties.insert("name".to_owned(), JsonValue::String(name.clone()));
        }
        geojson::Feature {
            bbox: None,
            geometry: Some(self.geometry.to_geojson()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Ordered set of features registered under one map id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<MapFeature>,
}

impl FeatureCollection {
    #[must_use]
    pub fn new(features: Vec<MapFeature>) -> Self {
        Self { features }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Looks up a named feature (polygon regions carry names, lines do not).
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&MapFeature> {
        self.features
            .iter()
            .find(|feature| feature.name.as_deref() == Some(name))
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter_map(|feature| feature.name.as_deref())
    }

    #[must_use]
    pub fn unclosed_rings(&self) -> usize {
        self.features
            .iter()
            .map(|feature| feature.geometry.unclosed_rings())
            .sum()
    }

    #[must_use]
    pub fn to_geojson(&self) -> geojson::FeatureCollection {
        geojson::FeatureCollection {
            bbox: None,
            features: self.features.iter().map(MapFeature::to_geojson).collect(),
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> crate::error::ChartResult<String> {
        serde_json::to_string(&self.to_geojson()).map_err(|e| {
            crate::error::ChartError::InvalidData(format!(
                "failed to serialize feature collection as geojson: {e}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Geometry, Position, close_ring, ring_is_closed};

    fn square(closed: bool) -> Vec<Position> {
        let mut ring = vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(0.0, 1.0),
        ];
        if closed {
            ring.push(Position::new(0.0, 0.0));
        }
        ring
    }

    #[test]
    fn empty_ring_counts_as_closed() {
        assert!(ring_is_closed(&[]));
        assert!(close_ring(&[]).is_empty());
    }

    #[test]
    fn close_ring_appends_first_point_only_when_open() {
        assert_eq!(close_ring(&square(false)), square(true));
        assert_eq!(close_ring(&square(true)), square(true));
    }

    #[test]
    fn line_strings_are_never_reported_unclosed() {
        let line = Geometry::LineString(square(false));
        assert_eq!(line.unclosed_rings(), 0);
        assert_eq!(line.closed(), line);
    }

    #[test]
    fn geojson_polygon_rings_are_closed() {
        let polygon = Geometry::Polygon(vec![square(false)]);
        assert_eq!(polygon.unclosed_rings(), 1);
        match polygon.to_geojson().value {
            geojson::Value::Polygon(rings) => {
                assert_eq!(rings[0].len(), 5);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("unexpected geometry: {other:?}"),
        }
    }
}
