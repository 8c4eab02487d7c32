use std::marker::PhantomData;

use hashbrown::HashMap;
use log::{info, trace, warn};

use super::{path, SearchKind, SearchState, Strategy};
use crate::{
    collections::Frontier,
    graph::{Graph, VertexId},
};

/// Resumable graph search from the first vertex of a graph to its last one.
///
/// Every call to [`step`](Self::step) removes exactly one vertex from the frontier and expands
/// it, then hands control back. All state lives here between calls except the `travelled` and
/// `in_path` flags, which are written to the graph.
#[derive(Debug, Clone)]
pub struct Search<S: Strategy> {
    frontier: S::Frontier,
    predecessors: HashMap<VertexId, VertexId>,
    start: VertexId,
    goal: VertexId,
    state: SearchState,
    steps: usize,
    path_len: usize,
    _strategy: PhantomData<S>,
}

impl<S: Strategy> Search<S> {
    /// Marks the start vertex as visited and seeds the frontier with it.
    pub fn new(graph: &mut Graph) -> Self {
        let (start, goal) = (graph.start(), graph.goal());
        graph[start].travelled = true;

        let mut search = Self {
            frontier: S::Frontier::default(),
            predecessors: HashMap::new(),
            start,
            goal,
            state: SearchState::Running,
            steps: 0,
            path_len: 0,
            _strategy: PhantomData,
        };
        search.frontier.put(start);

        if start == goal {
            search.found(graph);
        }

        search
    }

    pub fn kind(&self) -> SearchKind {
        S::KIND
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn goal(&self) -> VertexId {
        self.goal
    }

    /// Number of frontier removals so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of vertices discovered so far, the start included.
    pub fn visited_count(&self) -> usize {
        self.predecessors.len() + 1
    }

    pub fn has_next(&self) -> bool {
        self.state == SearchState::Running && !self.frontier.is_empty()
    }

    /// Advances by one frontier removal. Returns `false` once the search is over.
    pub fn step(&mut self, graph: &mut Graph) -> bool {
        self.advance(graph).is_some()
    }

    /// Steps until the goal is found or the frontier runs dry.
    pub fn run(&mut self, graph: &mut Graph) -> SearchState {
        while self.step(graph) {}
        self.state
    }

    /// Iterator over the vertices expanded by each following step.
    pub fn iter_steps<'a>(&'a mut self, graph: &'a mut Graph) -> Steps<'a, S> {
        Steps {
            search: self,
            graph,
        }
    }

    /// The start-to-goal path, once the goal has been found.
    pub fn path(&self) -> Option<Vec<VertexId>> {
        if self.state != SearchState::GoalFound {
            return None;
        }

        let mut path = path::trace_back(&self.predecessors, self.goal);
        path.reverse();
        Some(path)
    }

    /// Vertex the given one was discovered from.
    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.predecessors.get(&id).copied()
    }

    fn advance(&mut self, graph: &mut Graph) -> Option<VertexId> {
        if self.state != SearchState::Running {
            return None;
        }

        let Ok(current) = self.frontier.take() else {
            self.exhausted();
            return None;
        };
        self.steps += 1;
        trace!("{:?} step {}: expanding {:?}", S::KIND, self.steps, current);

        for i in 0..graph[current].edges().len() {
            let edge = graph[current].edges()[i];
            if graph[edge.to].travelled {
                continue;
            }

            self.predecessors.insert(edge.to, edge.from);

            if edge.to == self.goal {
                self.found(graph);
                return Some(current);
            }

            graph[edge.to].travelled = true;

            if S::DESCEND {
                // parent goes back first, its other children are tried when the branch ends
                self.frontier.put(current);
                self.frontier.put(edge.to);
                break;
            }

            self.frontier.put(edge.to);
        }

        if self.frontier.is_empty() {
            self.exhausted();
        }

        Some(current)
    }

    fn found(&mut self, graph: &mut Graph) {
        self.path_len = path::mark_path(graph, &self.predecessors, self.goal);
        self.frontier.clear();
        self.state = SearchState::GoalFound;
        info!(
            "{:?} reached the goal after {} steps, path of {} cells",
            S::KIND,
            self.steps,
            self.path_len
        );
    }

    fn exhausted(&mut self) {
        self.state = SearchState::Exhausted;
        warn!(
            "{:?} exhausted the frontier after {} steps without reaching the goal",
            S::KIND,
            self.steps
        );
    }
}

pub struct Steps<'a, S: Strategy> {
    search: &'a mut Search<S>,
    graph: &'a mut Graph,
}

impl<S: Strategy> Iterator for Steps<'_, S> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.search.advance(self.graph)
    }
}
