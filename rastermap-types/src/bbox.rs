use geo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A geographic query box given by its four edges, in degrees.
///
/// Unlike `geo::Rect` the edges are stored exactly as supplied and are not
/// reordered, so a malformed box (west of east, south of north) stays
/// observable and can be rejected by the caller.
///
/// The serde aliases accept the upper-left / lower-right parameter names
/// used by the map front end (`ullon`, `ullat`, `lrlon`, `lrlat`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryBox {
    /// Western edge (upper-left longitude)
    #[serde(alias = "ullon")]
    pub west: f64,
    /// Eastern edge (lower-right longitude)
    #[serde(alias = "lrlon")]
    pub east: f64,
    /// Northern edge (upper-left latitude)
    #[serde(alias = "ullat")]
    pub north: f64,
    /// Southern edge (lower-right latitude)
    #[serde(alias = "lrlat")]
    pub south: f64,
}

impl QueryBox {
    /// Create a new query box from its edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastermap_types::bbox::QueryBox;
    ///
    /// let bbox = QueryBox::new(-10.0, 10.0, 10.0, -10.0);
    /// assert_eq!(bbox.width(), 20.0);
    /// ```
    pub fn new(west: f64, east: f64, north: f64, south: f64) -> Self {
        Self {
            west,
            east,
            north,
            south,
        }
    }

    /// Create a query box from upper-left and lower-right corners.
    pub fn from_corners(upper_left: Point, lower_right: Point) -> Self {
        Self::new(upper_left.x(), lower_right.x(), upper_left.y(), lower_right.y())
    }

    /// Create a query box covering a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min().x, rect.max().x, rect.max().y, rect.min().y)
    }

    /// Convert into a `geo::Rect`. The rect normalizes the corner order.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.west, y: self.south },
            geo::coord! { x: self.east, y: self.north },
        )
    }

    /// East-west extent in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// North-south extent in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn upper_left(&self) -> Point {
        Point::new(self.west, self.north)
    }

    pub fn lower_right(&self) -> Point {
        Point::new(self.east, self.south)
    }

    /// True when every edge is finite, west <= east and south <= north.
    pub fn is_well_formed(&self) -> bool {
        self.is_finite() && self.west <= self.east && self.south <= self.north
    }

    /// True when all four edges are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.west.is_finite()
            && self.east.is_finite()
            && self.north.is_finite()
            && self.south.is_finite()
    }

    /// True when this box strictly extends past `other` on all four sides.
    pub fn encloses(&self, other: &QueryBox) -> bool {
        self.west < other.west
            && self.north > other.north
            && self.east > other.east
            && self.south < other.south
    }

    /// Check if a point lies inside this box (edges inclusive).
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x() >= self.west
            && point.x() <= self.east
            && point.y() >= self.south
            && point.y() <= self.north
    }

    /// Check if this box overlaps another (shared edges count).
    pub fn intersects(&self, other: &QueryBox) -> bool {
        !(self.east < other.west
            || self.west > other.east
            || self.north < other.south
            || self.south > other.north)
    }
}

/// Error raised when a raster request is assembled from loose parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A required parameter was absent
    Missing(&'static str),
    /// A viewport dimension was zero, negative or not finite
    InvalidViewport(f64),
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "Missing query parameter '{}'", name),
            Self::InvalidViewport(value) => {
                write!(f, "Viewport dimension must be positive, got: {}", value)
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// A tile raster request: the query box plus the viewport it is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterRequest {
    pub bbox: QueryBox,
    /// Viewport width in pixels
    #[serde(alias = "w")]
    pub width: f64,
    /// Viewport height in pixels
    #[serde(alias = "h")]
    pub height: f64,
}

impl RasterRequest {
    pub fn new(bbox: QueryBox, width: f64, height: f64) -> Self {
        Self {
            bbox,
            width,
            height,
        }
    }

    /// Assemble a request from the front end's query parameters
    /// (`ullon`, `ullat`, `lrlon`, `lrlat`, `w`, `h`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rastermap_types::bbox::RasterRequest;
    /// use std::collections::HashMap;
    ///
    /// let params: HashMap<String, f64> = [
    ///     ("ullon", -5.0), ("ullat", 5.0), ("lrlon", 5.0),
    ///     ("lrlat", -5.0), ("w", 500.0), ("h", 500.0),
    /// ]
    /// .into_iter()
    /// .map(|(k, v)| (k.to_string(), v))
    /// .collect();
    ///
    /// let request = RasterRequest::from_params(&params).unwrap();
    /// assert_eq!(request.bbox.west, -5.0);
    /// assert_eq!(request.width, 500.0);
    /// ```
    pub fn from_params(params: &HashMap<String, f64>) -> Result<Self, ParamError> {
        let get = |name: &'static str| params.get(name).copied().ok_or(ParamError::Missing(name));

        let bbox = QueryBox::new(get("ullon")?, get("lrlon")?, get("ullat")?, get("lrlat")?);
        let width = get("w")?;
        let height = get("h")?;

        for dim in [width, height] {
            if !dim.is_finite() || dim <= 0.0 {
                return Err(ParamError::InvalidViewport(dim));
            }
        }

        Ok(Self::new(bbox, width, height))
    }

    /// Longitude distance per pixel requested by this query.
    pub fn lon_dpp(&self) -> f64 {
        self.bbox.width() / self.width
    }
}
