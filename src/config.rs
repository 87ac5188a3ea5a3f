//! Configuration for the tile rasterer and location index.
//!
//! The defaults describe the Berkeley street map tile set: a root image
//! covering part of the East Bay, 256 px tiles, and eight zoom depths.
use crate::error::{RasterMapError, Result};
use rastermap_types::bbox::QueryBox;
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dataset and index configuration.
///
/// # Example
///
/// ```rust
/// use rastermap::Config;
///
/// let config = Config::default();
/// assert_eq!(config.tile_size, 256);
///
/// let json = r#"{
///     "root_ullon": -10.0, "root_ullat": 10.0,
///     "root_lrlon": 10.0, "root_lrlat": -10.0,
///     "max_depth": 3
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.max_depth, 3);
/// assert_eq!(config.name_key, "name");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Upper-left longitude of the root tile
    #[serde(default = "Config::default_root_ullon")]
    pub root_ullon: f64,

    /// Upper-left latitude of the root tile
    #[serde(default = "Config::default_root_ullat")]
    pub root_ullat: f64,

    /// Lower-right longitude of the root tile
    #[serde(default = "Config::default_root_lrlon")]
    pub root_lrlon: f64,

    /// Lower-right latitude of the root tile
    #[serde(default = "Config::default_root_lrlat")]
    pub root_lrlat: f64,

    /// Edge length of one tile image in pixels
    #[serde(default = "Config::default_tile_size")]
    pub tile_size: u32,

    /// Deepest zoom level available (depth-scale table holds `max_depth + 1` entries)
    #[serde(default = "Config::default_max_depth")]
    pub max_depth: u32,

    /// Vertex attribute indexed for name search
    #[serde(default = "Config::default_name_key")]
    pub name_key: String,
}

impl Config {
    /// Tile pyramids deeper than this would overflow 32-bit tile indices.
    pub const DEPTH_LIMIT: u32 = 30;

    const fn default_root_ullon() -> f64 {
        -122.2998046875
    }

    const fn default_root_ullat() -> f64 {
        37.892195547244356
    }

    const fn default_root_lrlon() -> f64 {
        -122.2119140625
    }

    const fn default_root_lrlat() -> f64 {
        37.82280243352756
    }

    const fn default_tile_size() -> u32 {
        256
    }

    const fn default_max_depth() -> u32 {
        7
    }

    fn default_name_key() -> String {
        "name".to_string()
    }

    /// Replace the root bounding box.
    pub fn with_root(mut self, root: QueryBox) -> Self {
        self.root_ullon = root.west;
        self.root_ullat = root.north;
        self.root_lrlon = root.east;
        self.root_lrlat = root.south;
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        assert!(tile_size > 0, "Tile size must be greater than zero");
        self.tile_size = tile_size;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        assert!(
            max_depth <= Self::DEPTH_LIMIT,
            "Max depth must not exceed {}",
            Self::DEPTH_LIMIT
        );
        self.max_depth = max_depth;
        self
    }

    pub fn with_name_key<S: Into<String>>(mut self, key: S) -> Self {
        self.name_key = key.into();
        self
    }

    /// The root bounding box covered by the depth-0 tile.
    pub fn root_box(&self) -> QueryBox {
        QueryBox::new(
            self.root_ullon,
            self.root_lrlon,
            self.root_ullat,
            self.root_lrlat,
        )
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), String> {
        let root = self.root_box();
        if !root.is_finite() {
            return Err("Root bounding box must be finite".to_string());
        }
        if root.west >= root.east {
            return Err(format!(
                "Root upper-left longitude ({}) must be west of lower-right longitude ({})",
                root.west, root.east
            ));
        }
        if root.south >= root.north {
            return Err(format!(
                "Root upper-left latitude ({}) must be north of lower-right latitude ({})",
                root.north, root.south
            ));
        }
        if self.tile_size == 0 {
            return Err("Tile size must be greater than zero".to_string());
        }
        if self.max_depth > Self::DEPTH_LIMIT {
            return Err(format!("Max depth must not exceed {}", Self::DEPTH_LIMIT));
        }
        if self.name_key.is_empty() {
            return Err("Name key cannot be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a file, choosing the format by extension.
    ///
    /// `.json` is always understood; `.toml` needs the `toml` feature.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::from_json(&contents)?),
            #[cfg(feature = "toml")]
            Some("toml") => {
                Self::from_toml(&contents).map_err(|e| RasterMapError::Config(e.to_string()))
            }
            other => Err(RasterMapError::Config(format!(
                "Unsupported config format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_ullon: Self::default_root_ullon(),
            root_ullat: Self::default_root_ullat(),
            root_lrlon: Self::default_root_lrlon(),
            root_lrlat: Self::default_root_lrlat(),
            tile_size: Self::default_tile_size(),
            max_depth: Self::default_max_depth(),
            name_key: Self::default_name_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_depth, 7);
        assert!(config.root_box().is_well_formed());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config::default().with_max_depth(4).with_name_key("label");
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_inverted_root() {
        let json = r#"{"root_ullon": 5.0, "root_lrlon": -5.0}"#;
        assert!(Config::from_json(json).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_tile_size() {
        let config = Config {
            tile_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"tile_size": 512}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.tile_size, 512);
        assert_eq!(config.root_ullon, -122.2998046875);
    }

    #[test]
    fn test_from_file_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(RasterMapError::Config(_))));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default().with_tile_size(128);
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
