//! Nearest active vertex to an arbitrary coordinate.

use super::spatial_graph::SpatialGraph;
use super::vertex::VertexId;
use crate::compute::geo_math;
use crate::error::{RasterMapError, Result};
use geo::Point;

/// Linear great-circle scan over the active vertices of a graph.
///
/// The finder only borrows the graph, so any number of finders may run
/// concurrently over a shared, fully built graph.
#[derive(Debug, Clone, Copy)]
pub struct NearestVertexFinder<'a> {
    graph: &'a SpatialGraph,
}

impl<'a> NearestVertexFinder<'a> {
    pub fn new(graph: &'a SpatialGraph) -> Self {
        Self { graph }
    }

    /// Id of the vertex closest to `(lon, lat)`.
    ///
    /// Ties go to the vertex inserted first.
    ///
    /// # Errors
    ///
    /// `EmptyGraph` when the graph has no active vertices.
    pub fn closest(&self, lon: f64, lat: f64) -> Result<VertexId> {
        self.closest_to(&Point::new(lon, lat))
            .map(|(id, _)| id)
    }

    /// Closest vertex id together with its distance in miles.
    pub fn closest_to(&self, target: &Point) -> Result<(VertexId, f64)> {
        let mut best: Option<(VertexId, f64)> = None;

        for vertex in self.graph.vertices() {
            let dist = geo_math::distance(target, &vertex.location);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((vertex.id, dist)),
            }
        }

        best.ok_or(RasterMapError::EmptyGraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    fn connected(points: &[(VertexId, f64, f64)]) -> SpatialGraph {
        let mut graph = SpatialGraph::new();
        for &(id, lon, lat) in points {
            graph.add_vertex(Vertex::new(id, lon, lat)).unwrap();
        }
        for pair in points.windows(2) {
            graph.add_edge(pair[0].0, pair[1].0).unwrap();
        }
        graph
    }

    #[test]
    fn test_closest_of_three() {
        let graph = connected(&[(10, -122.26, 37.87), (20, -122.25, 37.88), (30, -122.24, 37.86)]);
        let finder = NearestVertexFinder::new(&graph);

        assert_eq!(finder.closest(-122.2501, 37.8799).unwrap(), 20);
        assert_eq!(finder.closest(-122.2399, 37.8601).unwrap(), 30);
        assert_eq!(finder.closest(-122.30, 37.87).unwrap(), 10);
    }

    #[test]
    fn test_ties_resolve_to_first_inserted() {
        let graph = connected(&[(5, 1.0, 0.0), (3, -1.0, 0.0)]);
        let finder = NearestVertexFinder::new(&graph);
        assert_eq!(finder.closest(0.0, 0.0).unwrap(), 5);
    }

    #[test]
    fn test_exact_hit_has_zero_distance() {
        let graph = connected(&[(1, 0.0, 0.0), (2, 0.5, 0.5)]);
        let (id, dist) = NearestVertexFinder::new(&graph)
            .closest_to(&Point::new(0.5, 0.5))
            .unwrap();
        assert_eq!(id, 2);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = SpatialGraph::new();
        let result = NearestVertexFinder::new(&graph).closest(0.0, 0.0);
        assert!(matches!(result, Err(RasterMapError::EmptyGraph)));
    }

    #[test]
    fn test_does_not_touch_graph() {
        let graph = connected(&[(1, 0.0, 0.0), (2, 1.0, 1.0)]);
        let finder = NearestVertexFinder::new(&graph);
        finder.closest(0.2, 0.2).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec![1, 2]);
    }
}
