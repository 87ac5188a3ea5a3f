//! Undirected street graph keyed by vertex id.
//!
//! The graph is built once (vertices, then edges, then a single prune) and
//! is read-only afterwards. Iteration follows vertex insertion order.

use super::vertex::{Vertex, VertexId};
use crate::compute::geo_math;
use crate::error::{RasterMapError, Result};
use geo::Point;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct SpatialGraph {
    vertices: FxHashMap<VertexId, Vertex>,
    /// Insertion order of the ids in `vertices`
    order: Vec<VertexId>,
    vertex_count: usize,
    /// Raw number of `add_edge` calls minus detached edges
    edge_count: usize,
}

impl SpatialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex with no neighbors.
    ///
    /// Any adjacency the vertex carries (for example when cloned out of
    /// another graph) is cleared; edges only come from [`add_edge`](Self::add_edge).
    ///
    /// # Errors
    ///
    /// `DuplicateVertex` if the id is already present.
    pub fn add_vertex(&mut self, mut vertex: Vertex) -> Result<()> {
        if self.vertices.contains_key(&vertex.id) {
            return Err(RasterMapError::DuplicateVertex(vertex.id));
        }
        vertex.adjacent.clear();
        self.order.push(vertex.id);
        self.vertices.insert(vertex.id, vertex);
        self.vertex_count += 1;
        Ok(())
    }

    /// Remove a vertex, detaching it from every neighbor.
    ///
    /// Each detached neighbor decrements the edge counter by one.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex> {
        let mut vertex = self
            .vertices
            .remove(&id)
            .ok_or(RasterMapError::UnknownVertex(id))?;

        for neighbor in vertex.adjacent.drain() {
            if let Some(other) = self.vertices.get_mut(&neighbor) {
                other.adjacent.remove(&id);
            }
            self.edge_count = self.edge_count.saturating_sub(1);
        }

        self.order.retain(|&v| v != id);
        self.vertex_count -= 1;
        Ok(vertex)
    }

    /// Connect two existing vertices.
    ///
    /// Adjacency is a set, so repeating an edge does not change the
    /// neighbors, but the edge counter still counts every call.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u == v {
            return Err(RasterMapError::InvalidInput(format!(
                "Self-loop on vertex {} is not allowed",
                u
            )));
        }
        if !self.vertices.contains_key(&v) {
            return Err(RasterMapError::UnknownVertex(v));
        }
        self.vertex_mut(u)?.adjacent.insert(v);
        self.vertex_mut(v)?.adjacent.insert(u);
        self.edge_count += 1;
        Ok(())
    }

    pub fn set_attribute(&mut self, id: VertexId, key: &str, value: &str) -> Result<()> {
        self.vertex_mut(id)?.set_attribute(key, value);
        Ok(())
    }

    /// Move every vertex without neighbors out of the graph.
    ///
    /// Returns the pruned vertices in insertion order, attributes intact.
    pub fn prune(&mut self) -> Vec<Vertex> {
        let vertices = &mut self.vertices;
        let mut pruned = Vec::new();

        self.order.retain(|id| {
            let isolated = vertices.get(id).is_some_and(Vertex::is_isolated);
            if isolated {
                if let Some(vertex) = vertices.remove(id) {
                    pruned.push(vertex);
                }
            }
            !isolated
        });

        self.vertex_count -= pruned.len();
        log::debug!(
            "Pruned {} isolated vertices, {} remain",
            pruned.len(),
            self.vertex_count
        );
        pruned
    }

    /// Ids of all active vertices in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// All active vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.order.iter().filter_map(|id| self.vertices.get(id))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex> {
        self.vertices
            .get_mut(&id)
            .ok_or(RasterMapError::UnknownVertex(id))
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn neighbors(&self, id: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.vertex(id)
            .map(Vertex::neighbors)
            .ok_or(RasterMapError::UnknownVertex(id))
    }

    pub fn coordinates_of(&self, id: VertexId) -> Option<Point> {
        self.vertex(id).map(|v| v.location)
    }

    pub fn lon(&self, id: VertexId) -> Option<f64> {
        self.vertex(id).map(Vertex::lon)
    }

    pub fn lat(&self, id: VertexId) -> Option<f64> {
        self.vertex(id).map(Vertex::lat)
    }

    /// Great-circle distance in miles between two vertices.
    pub fn distance(&self, v: VertexId, w: VertexId) -> Result<f64> {
        let (a, b) = self.endpoints(v, w)?;
        Ok(geo_math::distance(&a, &b))
    }

    /// Initial bearing in degrees from `v` towards `w`.
    pub fn bearing(&self, v: VertexId, w: VertexId) -> Result<f64> {
        let (a, b) = self.endpoints(v, w)?;
        Ok(geo_math::bearing(&a, &b))
    }

    fn endpoints(&self, v: VertexId, w: VertexId) -> Result<(Point, Point)> {
        let a = self
            .coordinates_of(v)
            .ok_or(RasterMapError::UnknownVertex(v))?;
        let b = self
            .coordinates_of(w)
            .ok_or(RasterMapError::UnknownVertex(w))?;
        Ok((a, b))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of `add_edge` calls still attached, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct undirected vertex pairs.
    pub fn distinct_edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}
