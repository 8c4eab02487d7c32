pub mod disjoint_set;
pub mod merge_sort;
mod rnd_kruskals;

use rand::Rng as _;

use crate::{
    dims::Dims,
    graph::{Edge, Graph},
};

pub use disjoint_set::DisjointSet;
pub use rnd_kruskals::spanning_tree;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Edge weights are drawn from `0..MAX_WEIGHT`.
pub const MAX_WEIGHT: u32 = 1000;

/// Builds the full grid graph: every cell gets a directed edge to each in-bounds neighbour, each
/// with its own random weight.
pub fn build_grid(size: Dims, rng: &mut Random) -> Graph {
    let mut graph = Graph::new(size);

    let mut edges = Vec::with_capacity(graph.len() * 4);
    for from in graph.ids() {
        let pos = graph[from].pos();
        for to in graph.neighbors_pos(pos).filter_map(|n| graph.id_of(n)) {
            edges.push(Edge::new(from, to, rng.gen_range(0..MAX_WEIGHT)));
        }
    }

    for edge in edges {
        graph.add_edge(edge);
    }

    graph
}
