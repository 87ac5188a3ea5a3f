use serde::{Deserialize, Serialize};

/// Outcome of a tile raster query, shaped for the map front end.
///
/// On failure every numeric field is zero and `render_grid` is `None`.
///
/// # Examples
///
/// ```
/// use rastermap_types::raster::RasterResult;
///
/// let failed = RasterResult::failure();
/// assert!(!failed.query_success);
/// assert!(failed.render_grid.is_none());
/// assert_eq!(failed.depth, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterResult {
    /// Tile file names, rows top to bottom, columns left to right
    pub render_grid: Option<Vec<Vec<String>>>,
    pub raster_ul_lon: f64,
    pub raster_ul_lat: f64,
    pub raster_lr_lon: f64,
    pub raster_lr_lat: f64,
    /// Zoom depth of every tile in the grid
    pub depth: u32,
    pub query_success: bool,
}

impl RasterResult {
    /// The zeroed result reported for a rejected query.
    pub fn failure() -> Self {
        Self {
            render_grid: None,
            raster_ul_lon: 0.0,
            raster_ul_lat: 0.0,
            raster_lr_lon: 0.0,
            raster_lr_lat: 0.0,
            depth: 0,
            query_success: false,
        }
    }

    /// Number of tile rows, zero on failure.
    pub fn rows(&self) -> usize {
        self.render_grid.as_ref().map_or(0, Vec::len)
    }

    /// Number of tile columns, zero on failure.
    pub fn columns(&self) -> usize {
        self.render_grid
            .as_ref()
            .and_then(|grid| grid.first())
            .map_or(0, Vec::len)
    }
}

impl Default for RasterResult {
    fn default() -> Self {
        Self::failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_serializes_null_grid() {
        let json = serde_json::to_value(RasterResult::failure()).unwrap();
        assert!(json["render_grid"].is_null());
        assert_eq!(json["query_success"], false);
        assert_eq!(json["raster_ul_lon"], 0.0);
    }

    #[test]
    fn test_grid_dimensions() {
        let result = RasterResult {
            render_grid: Some(vec![
                vec!["a".into(), "b".into(), "c".into()],
                vec!["d".into(), "e".into(), "f".into()],
            ]),
            query_success: true,
            ..RasterResult::failure()
        };
        assert_eq!(result.rows(), 2);
        assert_eq!(result.columns(), 3);
    }
}
