use log::debug;

use super::{merge_sort::merge_sort_by_key, DisjointSet};
use crate::{
    collections::List,
    graph::{Edge, Graph},
};

/// Replaces the edges of the full grid `graph` with a minimum spanning tree of them.
///
/// Edges are taken in ascending weight order, ties in their original order. An edge is accepted
/// when its endpoints are in different sets; it is then added back to `from` together with a
/// reverse edge of the same weight on `to`. Returns the accepted edges in acceptance order.
pub fn spanning_tree(graph: &mut Graph) -> List<Edge> {
    let target = graph.len().saturating_sub(1);

    let edges: Vec<Edge> = graph.edges().copied().collect();
    graph.clear_edges();

    debug!("sorting {} edges", edges.len());
    let sorted = merge_sort_by_key(edges, |e| e.weight);

    let mut sets = DisjointSet::from_keys(graph.ids());
    let mut tree = List::with_capacity(target);

    for edge in sorted {
        if tree.len() == target {
            break;
        }

        if sets.find(edge.to) == sets.find(edge.from) {
            continue;
        }

        graph.add_edge(edge);
        graph.add_edge(edge.reversed());
        sets.union(edge.to, edge.from);
        tree.push(edge);
    }

    // a connected grid always has enough edges
    assert_eq!(
        tree.len(),
        target,
        "edge supply exhausted before the spanning tree was complete"
    );

    debug!("accepted {} passages", tree.len());
    tree
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::{
        dims::Dims,
        maze::algorithms::{build_grid, Random},
    };

    #[test]
    fn tree_spans_the_grid() {
        let mut graph = build_grid(Dims(6, 4), &mut Random::seed_from_u64(1));
        let tree = spanning_tree(&mut graph);

        assert_eq!(tree.len(), 23);
        assert_eq!(graph.edge_count(), 46);
        assert!(graph.is_connected());
    }

    #[test]
    fn accepted_edges_never_close_a_cycle() {
        let mut graph = build_grid(Dims(5, 5), &mut Random::seed_from_u64(9));
        let tree = spanning_tree(&mut graph);

        let mut sets = DisjointSet::from_keys(graph.ids());
        for edge in &tree {
            assert!(sets.union(edge.from, edge.to));
        }
    }

    #[test]
    fn tree_prefers_light_edges() {
        let mut graph = Graph::new(Dims(3, 1));
        let (a, b, c) = (
            graph.id_of(Dims(0, 0)).unwrap(),
            graph.id_of(Dims(1, 0)).unwrap(),
            graph.id_of(Dims(2, 0)).unwrap(),
        );
        graph.add_edge(Edge::new(a, b, 50));
        graph.add_edge(Edge::new(b, a, 3));
        graph.add_edge(Edge::new(b, c, 7));
        graph.add_edge(Edge::new(c, b, 7));

        let tree = spanning_tree(&mut graph);
        assert_eq!(tree.into_vec(), [Edge::new(b, a, 3), Edge::new(b, c, 7)]);
        assert_eq!(graph[a].edges(), [Edge::new(a, b, 3)]);
        assert_eq!(graph[b].edges(), [Edge::new(b, a, 3), Edge::new(b, c, 7)]);
    }

    #[test]
    fn single_cell_needs_no_passages() {
        let mut graph = build_grid(Dims(1, 1), &mut Random::seed_from_u64(3));
        assert!(spanning_tree(&mut graph).is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
