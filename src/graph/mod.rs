mod vertex;

use std::ops;

use hashbrown::HashSet;

use crate::{collections::Queue, dims::Dims};

pub use vertex::{Direction, Edge, Vertex, VertexId};

/// Grid graph: one vertex per cell, edges only between orthogonal neighbours.
///
/// Vertices are stored row by row, so the first vertex is the top-left cell and the last one
/// is the bottom-right cell.
#[derive(Debug, Clone)]
pub struct Graph {
    size: Dims,
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Creates all vertices of a `size` grid, without any edges.
    pub fn new(size: Dims) -> Self {
        Self {
            size,
            vertices: size.iter_fill().map(Vertex::new).collect(),
        }
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn id_of(&self, pos: Dims) -> Option<VertexId> {
        if !self.size.contains(pos) {
            return None;
        }

        Some(VertexId(pos.1 as usize * self.size.0 as usize + pos.0 as usize))
    }

    pub fn pos_of(&self, id: VertexId) -> Option<Dims> {
        self.vertices.get(id.0).map(Vertex::pos)
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// First vertex of the sequence, where every search starts.
    pub fn start(&self) -> VertexId {
        VertexId(0)
    }

    /// Bottom-right cell, where every search ends.
    pub fn goal(&self) -> VertexId {
        VertexId(self.vertices.len().saturating_sub(1))
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Every edge of every vertex, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.vertices.iter().flat_map(|v| v.edges.iter())
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    /// Positions of the in-bounds neighbours of `pos`, in [`Direction::ALL`] order.
    pub fn neighbors_pos(&self, pos: Dims) -> impl Iterator<Item = Dims> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| pos + dir.to_coord())
            .filter(|&n| self.size.contains(n))
    }

    /// Adds the edge to the adjacency of its `from` vertex.
    pub fn add_edge(&mut self, edge: Edge) {
        self[edge.from].edges.push(edge);
    }

    pub fn clear_edges(&mut self) {
        for vertex in &mut self.vertices {
            vertex.edges.clear();
        }
    }

    /// Clears the search flags of every vertex, leaving edges untouched.
    pub fn reset_flags(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset_flags();
        }
    }

    pub fn travelled_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.travelled).count()
    }

    /// Vertices currently flagged as part of the solution path, in vertex order.
    pub fn path_cells(&self) -> Vec<VertexId> {
        self.ids().filter(|&id| self[id].in_path).collect()
    }

    /// Whether every vertex can be reached from the first one along edges.
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return false;
        }

        let mut seen = HashSet::with_capacity(self.vertices.len());
        let mut queue = Queue::new();
        seen.insert(self.start());
        queue.enqueue(self.start());

        while let Ok(id) = queue.dequeue() {
            for edge in &self[id].edges {
                if seen.insert(edge.to) {
                    queue.enqueue(edge.to);
                }
            }
        }

        seen.len() == self.vertices.len()
    }
}

impl ops::Index<VertexId> for Graph {
    type Output = Vertex;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id.0]
    }
}

impl ops::IndexMut<VertexId> for Graph {
    fn index_mut(&mut self, id: VertexId) -> &mut Self::Output {
        &mut self.vertices[id.0]
    }
}
