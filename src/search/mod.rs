//! Breadth-first and depth-first maze solvers, advanced one step at a time.

pub mod path;
mod traversal;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    collections::{Frontier, Queue, Stack},
    graph::{Graph, VertexId},
};

pub use traversal::{Search, Steps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum SearchKind {
    Bfs,
    Dfs,
}

impl Default for SearchKind {
    fn default() -> Self {
        SearchKind::Bfs
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Bfs => write!(f, "breadth-first"),
            SearchKind::Dfs => write!(f, "depth-first"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Goal not found yet and the frontier still has vertices.
    Running,
    /// Path is marked, further steps do nothing.
    GoalFound,
    /// Frontier ran dry without reaching the goal.
    Exhausted,
}

/// How a search picks and expands its vertices.
pub trait Strategy: fmt::Debug + Clone {
    type Frontier: Frontier<VertexId> + fmt::Debug + Clone;

    const KIND: SearchKind;

    /// Expand only the first unvisited neighbour per step, putting the parent back before it.
    const DESCEND: bool;
}

#[derive(Debug, Clone, Copy)]
pub struct Bfs;

#[derive(Debug, Clone, Copy)]
pub struct Dfs;

impl Strategy for Bfs {
    type Frontier = Queue<VertexId>;
    const KIND: SearchKind = SearchKind::Bfs;
    const DESCEND: bool = false;
}

impl Strategy for Dfs {
    type Frontier = Stack<VertexId>;
    const KIND: SearchKind = SearchKind::Dfs;
    const DESCEND: bool = true;
}

pub type BreadthFirst = Search<Bfs>;
pub type DepthFirst = Search<Dfs>;

/// Either search, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Engine {
    Bfs(BreadthFirst),
    Dfs(DepthFirst),
}

impl Engine {
    pub fn new(kind: SearchKind, graph: &mut Graph) -> Self {
        match kind {
            SearchKind::Bfs => Engine::Bfs(Search::new(graph)),
            SearchKind::Dfs => Engine::Dfs(Search::new(graph)),
        }
    }

    pub fn kind(&self) -> SearchKind {
        match self {
            Engine::Bfs(_) => SearchKind::Bfs,
            Engine::Dfs(_) => SearchKind::Dfs,
        }
    }

    pub fn state(&self) -> SearchState {
        match self {
            Engine::Bfs(s) => s.state(),
            Engine::Dfs(s) => s.state(),
        }
    }

    pub fn has_next(&self) -> bool {
        match self {
            Engine::Bfs(s) => s.has_next(),
            Engine::Dfs(s) => s.has_next(),
        }
    }

    pub fn step(&mut self, graph: &mut Graph) -> bool {
        match self {
            Engine::Bfs(s) => s.step(graph),
            Engine::Dfs(s) => s.step(graph),
        }
    }

    pub fn run(&mut self, graph: &mut Graph) -> SearchState {
        match self {
            Engine::Bfs(s) => s.run(graph),
            Engine::Dfs(s) => s.run(graph),
        }
    }

    pub fn steps(&self) -> usize {
        match self {
            Engine::Bfs(s) => s.steps(),
            Engine::Dfs(s) => s.steps(),
        }
    }

    pub fn visited_count(&self) -> usize {
        match self {
            Engine::Bfs(s) => s.visited_count(),
            Engine::Dfs(s) => s.visited_count(),
        }
    }

    pub fn path(&self) -> Option<Vec<VertexId>> {
        match self {
            Engine::Bfs(s) => s.path(),
            Engine::Dfs(s) => s.path(),
        }
    }
}

impl From<BreadthFirst> for Engine {
    fn from(search: BreadthFirst) -> Self {
        Engine::Bfs(search)
    }
}

impl From<DepthFirst> for Engine {
    fn from(search: DepthFirst) -> Self {
        Engine::Dfs(search)
    }
}

/// Clears every search flag and starts both searches over on the unchanged maze.
pub fn reset(graph: &mut Graph) -> (BreadthFirst, DepthFirst) {
    graph.reset_flags();
    (Search::new(graph), Search::new(graph))
}
