use geo::Point;
use rustc_hash::{FxHashMap, FxHashSet};

/// Externally assigned vertex identifier (an OSM node id).
pub type VertexId = u64;

/// A location in the street graph.
///
/// Coordinates are WGS84 (`x = longitude`, `y = latitude`). Attributes are
/// free-form tags as supplied by ingestion, e.g. `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub location: Point,
    pub(crate) adjacent: FxHashSet<VertexId>,
    pub attributes: FxHashMap<String, String>,
}

impl Vertex {
    /// Construct a vertex with no neighbors and no attributes.
    ///
    /// # Examples
    /// ```
    /// use rastermap::graph::Vertex;
    ///
    /// let v = Vertex::new(1, -122.2587, 37.8756);
    /// assert_eq!(v.lon(), -122.2587);
    /// assert!(v.is_isolated());
    /// ```
    pub fn new(id: VertexId, lon: f64, lat: f64) -> Self {
        Self {
            id,
            location: Point::new(lon, lat),
            adjacent: FxHashSet::default(),
            attributes: FxHashMap::default(),
        }
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    /// Ids of the vertices sharing an edge with this one.
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_isolated(&self) -> bool {
        self.adjacent.is_empty()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set a tag, returning the previous value if any.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }
}
