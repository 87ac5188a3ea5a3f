//! Location search over the street graph.
//!
//! Combines the active graph, the vertices pruned from it and the name
//! trie. Pruned vertices are unreachable for routing and nearest-vertex
//! queries but still answer name searches.

use crate::error::{RasterMapError, Result};
use crate::graph::{NearestVertexFinder, SpatialGraph, Vertex, VertexId};
use crate::trie::{PrefixIndex, clean_name};
use rastermap_types::location::LocationRecord;
use rustc_hash::FxHashMap;

#[derive(Debug)]
pub struct LocationIndex {
    graph: SpatialGraph,
    removed: FxHashMap<VertexId, Vertex>,
    names: PrefixIndex,
    name_key: String,
}

impl LocationIndex {
    /// Assemble an index from a pruned graph. Normally called by
    /// [`IndexBuilder::build`](crate::IndexBuilder::build).
    pub fn new(
        graph: SpatialGraph,
        removed: Vec<Vertex>,
        names: PrefixIndex,
        name_key: impl Into<String>,
    ) -> Self {
        Self {
            graph,
            removed: removed.into_iter().map(|v| (v.id, v)).collect(),
            names,
            name_key: name_key.into(),
        }
    }

    /// Every location whose cleaned name equals the cleaned `name`,
    /// ordered by vertex id.
    pub fn search(&self, name: &str) -> Vec<LocationRecord> {
        let Some(node) = self
            .names
            .find_exact(&clean_name(name))
            .filter(|node| node.is_terminal())
        else {
            return Vec::new();
        };

        let mut records: Vec<LocationRecord> = node
            .ids()
            .filter_map(|id| self.lookup(id))
            .map(|vertex| {
                LocationRecord::new(
                    vertex.id,
                    vertex.lon(),
                    vertex.lat(),
                    vertex.attribute(&self.name_key).map(str::to_string),
                )
            })
            .collect();
        records.sort_by_key(|record| record.vertex_id);
        records
    }

    /// Distinct original names starting with `prefix` once both are cleaned.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.names.find_by_prefix(prefix)
    }

    /// Nearest active vertex to `(lon, lat)`.
    pub fn closest(&self, lon: f64, lat: f64) -> Result<VertexId> {
        NearestVertexFinder::new(&self.graph).closest(lon, lat)
    }

    /// A vertex from the active graph, or from the pruned set.
    pub fn lookup(&self, id: VertexId) -> Option<&Vertex> {
        self.graph.vertex(id).or_else(|| self.removed.get(&id))
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.vertex_ids()
    }

    pub fn neighbors(&self, id: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.graph.neighbors(id)
    }

    /// Great-circle distance in miles between two active vertices.
    pub fn distance(&self, v: VertexId, w: VertexId) -> Result<f64> {
        self.graph.distance(v, w)
    }

    /// Initial bearing in degrees between two active vertices.
    pub fn bearing(&self, v: VertexId, w: VertexId) -> Result<f64> {
        self.graph.bearing(v, w)
    }

    pub fn graph(&self) -> &SpatialGraph {
        &self.graph
    }

    pub fn is_removed(&self, id: VertexId) -> bool {
        self.removed.contains_key(&id)
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Search results serialized as the front end's JSON array.
    pub fn search_json(&self, name: &str) -> Result<String> {
        serde_json::to_string(&self.search(name)).map_err(RasterMapError::from)
    }

    /// Search results as a GeoJSON feature collection.
    #[cfg(feature = "geojson")]
    pub fn search_geojson(&self, name: &str) -> geojson::FeatureCollection {
        rastermap_types::location::to_feature_collection(&self.search(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> LocationIndex {
        let mut graph = SpatialGraph::new();
        let mut soda = Vertex::new(42, -122.2587, 37.8756);
        soda.set_attribute("name", "Soda Hall");
        graph.add_vertex(soda).unwrap();
        graph.add_vertex(Vertex::new(43, -122.2590, 37.8760)).unwrap();
        let mut kiosk = Vertex::new(7, -122.2600, 37.8700);
        kiosk.set_attribute("name", "Soda hall!");
        graph.add_vertex(kiosk).unwrap();
        graph.add_edge(42, 43).unwrap();

        let removed = graph.prune();
        let mut names = PrefixIndex::new();
        names.insert("Soda Hall", 42);
        names.insert("Soda hall!", 7);
        LocationIndex::new(graph, removed, names, "name")
    }

    #[test]
    fn test_search_resolves_active_and_removed() {
        let index = index();
        let results = index.search("SODA HALL");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].vertex_id, 7);
        assert_eq!(results[0].display_name.as_deref(), Some("Soda hall!"));
        assert_eq!(results[1].vertex_id, 42);
        assert_eq!(results[1].latitude, 37.8756);
        assert!(index.is_removed(7));
    }

    #[test]
    fn test_search_on_inner_node_is_empty() {
        assert!(index().search("soda").is_empty());
        assert!(index().search("unknown place").is_empty());
    }

    #[test]
    fn test_closest_skips_removed() {
        let index = index();
        assert_eq!(index.closest(-122.2600, 37.8700).unwrap(), 42);
        assert_eq!(index.vertices().collect::<Vec<_>>(), vec![42, 43]);
    }

    #[test]
    fn test_search_json_keys() {
        let json = index().search_json("soda hall").unwrap();
        assert!(json.contains("\"id\":42"));
        assert!(json.contains("\"name\":\"Soda Hall\""));
    }
}
