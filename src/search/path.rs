use hashbrown::HashMap;

use crate::graph::{Graph, VertexId};

/// Walks predecessor links from `goal` back to the vertex that has none (the start).
///
/// Returned in walk order: `goal` first, start last. Predecessor links form a tree, the walk is
/// still bounded by the number of links so a corrupted map cannot loop forever.
pub fn trace_back(predecessors: &HashMap<VertexId, VertexId>, goal: VertexId) -> Vec<VertexId> {
    let mut walk = vec![goal];
    let mut current = goal;

    for _ in 0..predecessors.len() {
        match predecessors.get(&current) {
            Some(&prev) => {
                walk.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    walk
}

/// Flags every vertex of the walk from `goal` back to the start as part of the path.
pub fn mark_path(
    graph: &mut Graph,
    predecessors: &HashMap<VertexId, VertexId>,
    goal: VertexId,
) -> usize {
    let walk = trace_back(predecessors, goal);
    for &id in &walk {
        graph[id].in_path = true;
    }
    walk.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::Dims;

    #[test]
    fn walks_back_to_the_root() {
        let predecessors: HashMap<_, _> = [
            (VertexId(3), VertexId(2)),
            (VertexId(2), VertexId(0)),
            (VertexId(1), VertexId(0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            trace_back(&predecessors, VertexId(3)),
            [VertexId(3), VertexId(2), VertexId(0)]
        );
        assert_eq!(trace_back(&predecessors, VertexId(0)), [VertexId(0)]);
    }

    #[test]
    fn cyclic_map_terminates() {
        let predecessors: HashMap<_, _> = [(VertexId(0), VertexId(1)), (VertexId(1), VertexId(0))]
            .into_iter()
            .collect();

        assert_eq!(trace_back(&predecessors, VertexId(0)).len(), 3);
    }

    #[test]
    fn marks_only_the_walk() {
        let mut graph = Graph::new(Dims(2, 2));
        let predecessors: HashMap<_, _> = [(VertexId(3), VertexId(1)), (VertexId(1), VertexId(0))]
            .into_iter()
            .collect();

        assert_eq!(mark_path(&mut graph, &predecessors, VertexId(3)), 3);
        assert_eq!(graph.path_cells(), [VertexId(0), VertexId(1), VertexId(3)]);
    }
}
