use geo::Point;
use serde::{Deserialize, Serialize};

/// Error type for GeoJSON conversions.
#[derive(Debug)]
pub enum GeoJsonError {
    /// Serialization failed
    Serialization(String),
}

impl std::fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "GeoJSON serialization error: {}", msg),
        }
    }
}

impl std::error::Error for GeoJsonError {}

/// One match of an exact location search.
///
/// Serializes with the `lat` / `lon` / `name` / `id` keys the front end reads.
///
/// # Examples
///
/// ```
/// use rastermap_types::location::LocationRecord;
///
/// let hall = LocationRecord::new(42, -122.2587, 37.8756, Some("Soda Hall".into()));
/// assert_eq!(hall.point().x(), -122.2587);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Original, uncleaned display name of the vertex
    #[serde(rename = "name")]
    pub display_name: Option<String>,
    #[serde(rename = "id")]
    pub vertex_id: u64,
}

impl LocationRecord {
    pub fn new(vertex_id: u64, longitude: f64, latitude: f64, display_name: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_name,
            vertex_id,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }

    /// Convert into a GeoJSON point feature carrying the name as a property.
    #[cfg(feature = "geojson")]
    pub fn to_geojson_feature(&self) -> geojson::Feature {
        use geojson::{Feature, Geometry, JsonObject, Value, feature::Id};

        let mut properties = JsonObject::new();
        if let Some(name) = &self.display_name {
            properties.insert("name".to_string(), serde_json::Value::from(name.clone()));
        }

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![
                self.longitude,
                self.latitude,
            ]))),
            id: Some(Id::Number(serde_json::Number::from(self.vertex_id))),
            properties: Some(properties),
            foreign_members: None,
        }
    }

    /// Serialize as a GeoJSON feature string.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String, GeoJsonError> {
        serde_json::to_string(&self.to_geojson_feature()).map_err(|e| {
            GeoJsonError::Serialization(format!("Failed to serialize location: {}", e))
        })
    }
}

/// Collect search results into a GeoJSON feature collection.
#[cfg(feature = "geojson")]
pub fn to_feature_collection(records: &[LocationRecord]) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features: records
            .iter()
            .map(LocationRecord::to_geojson_feature)
            .collect(),
        foreign_members: None,
    }
}
