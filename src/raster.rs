//! Tile selection for map rastering.
//!
//! The dataset is a quadtree of square image tiles over a fixed root box.
//! At depth `d` the root is split into `2^d` columns and `2^d` rows, and
//! tile `(x, y)` is stored as `d{d}_x{x}_y{y}.png`. Column indices grow
//! eastwards, row indices grow southwards.
//!
//! A query picks the coarsest depth whose longitude-distance-per-pixel
//! (LonDPP) is at most the query's, then every tile at that depth touching
//! the query box.

use crate::compute::validation::{validate_query_box, validate_viewport};
use crate::config::Config;
use crate::error::{RasterMapError, Result};
use rastermap_types::bbox::{QueryBox, RasterRequest};
use rastermap_types::raster::RasterResult;

/// Largest tile grid a single query may return.
///
/// Depth follows longitude only, so a tall narrow box at a deep level can
/// span every row of the pyramid.
pub const MAX_GRID_TILES: usize = 1 << 16;

/// LonDPP of a single tile at each depth, finest last.
///
/// # Examples
///
/// ```
/// use rastermap::raster::DepthScale;
/// use rastermap_types::bbox::QueryBox;
///
/// let root = QueryBox::new(-10.0, 10.0, 10.0, -10.0);
/// let scales = DepthScale::new(&root, 256, 7);
///
/// assert_eq!(scales.len(), 8);
/// assert_eq!(scales.get(0), Some(20.0 / 256.0));
/// assert_eq!(scales.find_depth(0.02), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DepthScale {
    scales: Vec<f64>,
}

impl DepthScale {
    pub fn new(root: &QueryBox, tile_size: u32, max_depth: u32) -> Self {
        let tile_size = f64::from(tile_size);
        let scales = (0..=max_depth)
            .map(|depth| root.width() / tiles_per_side(depth) / tile_size)
            .collect();
        Self { scales }
    }

    pub fn get(&self, depth: u32) -> Option<f64> {
        self.scales.get(depth as usize).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scales
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn max_depth(&self) -> u32 {
        self.scales.len().saturating_sub(1) as u32
    }

    /// Shallowest depth whose scale does not exceed `lon_dpp`, or the
    /// deepest level when even that is too coarse.
    pub fn find_depth(&self, lon_dpp: f64) -> u32 {
        self.scales
            .iter()
            .position(|&scale| scale <= lon_dpp)
            .map_or(self.max_depth(), |depth| depth as u32)
    }
}

fn tiles_per_side(depth: u32) -> f64 {
    f64::from(depth).exp2()
}

/// Inclusive tile index range at one depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpan {
    pub depth: u32,
    pub x_min: u32,
    pub x_max: u32,
    pub y_min: u32,
    pub y_max: u32,
}

impl TileSpan {
    pub fn columns(&self) -> usize {
        (self.x_max - self.x_min + 1) as usize
    }

    pub fn rows(&self) -> usize {
        (self.y_max - self.y_min + 1) as usize
    }

    /// Tile file names, rows top to bottom, columns left to right.
    pub fn file_names(&self) -> Vec<Vec<String>> {
        (self.y_min..=self.y_max)
            .map(|y| {
                (self.x_min..=self.x_max)
                    .map(|x| tile_name(self.depth, x, y))
                    .collect()
            })
            .collect()
    }
}

/// File name of tile `(x, y)` at `depth`.
pub fn tile_name(depth: u32, x: u32, y: u32) -> String {
    format!("d{}_x{}_y{}.png", depth, x, y)
}

/// Tiles chosen for one query and the area they actually cover.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    pub span: TileSpan,
    pub tiles: Vec<Vec<String>>,
    /// Union of the selected tiles' extents, not the query box
    pub bounds: QueryBox,
}

impl TileGrid {
    pub fn depth(&self) -> u32 {
        self.span.depth
    }

    pub fn into_result(self) -> RasterResult {
        RasterResult {
            render_grid: Some(self.tiles),
            raster_ul_lon: self.bounds.west,
            raster_ul_lat: self.bounds.north,
            raster_lr_lon: self.bounds.east,
            raster_lr_lat: self.bounds.south,
            depth: self.span.depth,
            query_success: true,
        }
    }
}

/// Picks tiles for query boxes over a fixed root.
///
/// Holds only immutable state, so one selector can serve any number of
/// threads through a shared reference.
#[derive(Debug, Clone)]
pub struct TileSelector {
    root: QueryBox,
    scales: DepthScale,
}

impl TileSelector {
    /// Build a selector for the root box and tile size in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate().map_err(RasterMapError::Config)?;
        let root = config.root_box();
        Ok(Self {
            root,
            scales: DepthScale::new(&root, config.tile_size, config.max_depth),
        })
    }

    pub fn root(&self) -> &QueryBox {
        &self.root
    }

    pub fn depth_scale(&self) -> &DepthScale {
        &self.scales
    }

    /// Select the tile grid for `bbox` drawn into a `width` x `height` viewport.
    ///
    /// # Errors
    ///
    /// `InvalidBoundingBox` for malformed boxes and boxes enclosing the
    /// whole root; `InvalidInput` for a non-positive viewport or a grid
    /// larger than [`MAX_GRID_TILES`].
    pub fn select_tiles(&self, bbox: &QueryBox, width: f64, height: f64) -> Result<TileGrid> {
        validate_query_box(bbox, &self.root)?;
        validate_viewport(width, height)?;

        let lon_dpp = bbox.width() / width;
        let depth = self.scales.find_depth(lon_dpp);
        let span = self.span_at(bbox, depth);

        log::debug!(
            "LonDPP {} selects depth {} ({}x{} tiles)",
            lon_dpp,
            depth,
            span.columns(),
            span.rows()
        );

        let tiles = span.columns().saturating_mul(span.rows());
        if tiles > MAX_GRID_TILES {
            return Err(RasterMapError::InvalidInput(format!(
                "Query needs {} tiles at depth {}, limit is {}",
                tiles, depth, MAX_GRID_TILES
            )));
        }

        Ok(TileGrid {
            tiles: span.file_names(),
            bounds: self.span_bounds(&span),
            span,
        })
    }

    /// Like [`select_tiles`](Self::select_tiles), but reports failures as
    /// the zeroed front-end result instead of an error.
    pub fn raster(&self, request: &RasterRequest) -> RasterResult {
        match self.select_tiles(&request.bbox, request.width, request.height) {
            Ok(grid) => grid.into_result(),
            Err(e) => {
                log::warn!("Rejecting raster query {:?}: {}", request.bbox, e);
                RasterResult::failure()
            }
        }
    }

    fn units(&self, depth: u32) -> (f64, f64) {
        let n = tiles_per_side(depth);
        (self.root.width() / n, self.root.height() / n)
    }

    /// Tile index range covering `bbox` at `depth`, clamped to the root.
    pub fn span_at(&self, bbox: &QueryBox, depth: u32) -> TileSpan {
        let (x_unit, y_unit) = self.units(depth);
        let max_index = tiles_per_side(depth) - 1.0;

        let index = |offset: f64, unit: f64| (offset / unit).floor().clamp(0.0, max_index) as u32;

        TileSpan {
            depth,
            x_min: index(bbox.west - self.root.west, x_unit),
            x_max: index(bbox.east - self.root.west, x_unit),
            y_min: index(self.root.north - bbox.north, y_unit),
            y_max: index(self.root.north - bbox.south, y_unit),
        }
    }

    /// Geographic extent of the tiles in `span`.
    pub fn span_bounds(&self, span: &TileSpan) -> QueryBox {
        let (x_unit, y_unit) = self.units(span.depth);
        QueryBox::new(
            self.root.west + f64::from(span.x_min) * x_unit,
            self.root.west + f64::from(span.x_max + 1) * x_unit,
            self.root.north - f64::from(span.y_min) * y_unit,
            self.root.north - f64::from(span.y_max + 1) * y_unit,
        )
    }
}
