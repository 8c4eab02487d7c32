pub mod algorithms;

use hashbrown::HashSet;
use log::{debug, info};
use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{
    collections::List,
    dims::Dims,
    graph::{Edge, Graph},
};
use algorithms::{build_grid, spanning_tree, Random};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid maze size {0}, both dimensions must be at least 1")]
    InvalidSize(Dims),
}

/// What to generate. Passed explicitly to everything that needs the grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub size: Dims,
    /// Seed of the weight generator, random when `None`.
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn new(size: Dims) -> Self {
        Self { size, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A perfect maze: the grid graph reduced to a spanning tree, plus the walls left over.
#[derive(Debug, Clone)]
pub struct Maze {
    graph: Graph,
    passages: List<Edge>,
    walls: List<Edge>,
    seed: u64,
}

impl Maze {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn size(&self) -> Dims {
        self.graph.size()
    }

    /// Spanning tree edges, in the order they were accepted.
    pub fn passages(&self) -> &List<Edge> {
        &self.passages
    }

    /// Full grid edges that are not passages. Every wall is listed in both directions.
    pub fn walls(&self) -> &List<Edge> {
        &self.walls
    }

    /// One edge per wall, the first direction seen.
    pub fn unique_walls(&self) -> Vec<Edge> {
        let mut seen = HashSet::with_capacity(self.walls.len() / 2);
        self.walls
            .iter()
            .filter(|e| seen.insert(e.undirected()))
            .copied()
            .collect()
    }

    /// Seed the weights were drawn with; generating with it again gives the same maze.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    config: MazeConfig,
}

impl Generator {
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    pub fn generate(&self) -> Result<Maze, GeneratorError> {
        let size = self.config.size;
        if size.0 < 1 || size.1 < 1 {
            return Err(GeneratorError::InvalidSize(size));
        }

        let seed = self.config.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        debug!("building {} grid", size);
        let mut graph = build_grid(size, &mut rng);

        let full_grid: Vec<Edge> = graph.edges().copied().collect();

        debug!("selecting passages");
        let passages = spanning_tree(&mut graph);

        debug!("deriving walls");
        let walls = derive_walls(&graph, &full_grid);

        info!(
            "generated {} maze, seed {}, {} passages, {} walls",
            size,
            seed,
            passages.len(),
            walls.len()
        );

        Ok(Maze {
            graph,
            passages,
            walls,
            seed,
        })
    }
}

/// Generates a `width` by `height` maze with a random seed.
pub fn generate(width: i32, height: i32) -> Result<Maze, GeneratorError> {
    Generator::new(MazeConfig::new(Dims(width, height))).generate()
}

/// Keeps every edge of `full_grid` that neither in its own direction nor reversed is present
/// in `graph`'s adjacency.
pub fn derive_walls(graph: &Graph, full_grid: &[Edge]) -> List<Edge> {
    let passages: HashSet<_> = graph.edges().map(|e| e.undirected()).collect();

    full_grid
        .iter()
        .filter(|e| !passages.contains(&e.undirected()))
        .copied()
        .collect()
}
