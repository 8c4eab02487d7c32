use std::time::Duration;

use log::{debug, info};
use pausable_clock::{PausableClock, PausableInstant};
use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{
    collections::List,
    graph::{Edge, Graph},
    maze::{algorithms::Random, Generator, GeneratorError, Maze, MazeConfig},
    search::{self, BreadthFirst, DepthFirst, SearchKind, SearchState},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no search is running")]
    NotRunning,
    #[error("search is not paused")]
    NotPaused,
    #[error("no search has been started")]
    NoActiveSearch,
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    NotStarted,
    Running,
    Paused,
    Finished,
}

/// Input-agnostic requests the outside world can make, see [`Session::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    StartBfs,
    StartDfs,
    Reset,
    Regenerate,
    TogglePause,
}

/// One maze with both searches over it, advanced by an external tick loop.
///
/// Both searches always exist, only the active one moves on [`tick`](Self::tick). They share
/// the flags stored in the maze's vertices.
pub struct Session {
    config: MazeConfig,
    seeds: Random,
    maze: Maze,
    bfs: BreadthFirst,
    dfs: DepthFirst,
    active: Option<SearchKind>,
    state: SessionState,
    clock: Option<PausableClock>,
    start: Option<PausableInstant>,
}

impl Session {
    /// The first maze is generated with the configured seed, later ones with seeds drawn from
    /// a generator seeded the same way.
    pub fn new(config: MazeConfig) -> Result<Self, GeneratorError> {
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        let seeds = Random::seed_from_u64(seed);
        let mut maze = Generator::new(config.with_seed(seed)).generate()?;
        let (bfs, dfs) = search::reset(maze.graph_mut());

        Ok(Self {
            config,
            seeds,
            maze,
            bfs,
            dfs,
            active: None,
            state: SessionState::NotStarted,
            clock: None,
            start: None,
        })
    }

    fn generate(config: MazeConfig, seeds: &mut Random) -> Result<Maze, GeneratorError> {
        let config = MazeConfig {
            seed: Some(seeds.gen()),
            ..config
        };
        Generator::new(config).generate()
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn graph(&self) -> &Graph {
        self.maze.graph()
    }

    pub fn walls(&self) -> &List<Edge> {
        self.maze.walls()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn active(&self) -> Option<SearchKind> {
        self.active
    }

    pub fn bfs(&self) -> &BreadthFirst {
        &self.bfs
    }

    pub fn dfs(&self) -> &DepthFirst {
        &self.dfs
    }

    pub fn search_state(&self) -> Option<SearchState> {
        self.active.map(|kind| match kind {
            SearchKind::Bfs => self.bfs.state(),
            SearchKind::Dfs => self.dfs.state(),
        })
    }

    /// Steps taken by the active search.
    pub fn steps(&self) -> usize {
        match self.active {
            Some(SearchKind::Bfs) => self.bfs.steps(),
            Some(SearchKind::Dfs) => self.dfs.steps(),
            None => 0,
        }
    }

    /// Time spent running the active search, pauses excluded.
    pub fn elapsed(&self) -> Option<Duration> {
        let clock = self.clock.as_ref()?;
        Some(self.start?.elapsed(clock))
    }

    /// Restarts both searches and makes `kind` the one that ticks.
    pub fn start(&mut self, kind: SearchKind) {
        self.reset();
        self.active = Some(kind);
        self.state = SessionState::Running;

        let clock = PausableClock::default();
        self.start = Some(clock.now());
        self.clock = Some(clock);

        info!("started {} search on {} maze", kind, self.maze.size());
    }

    /// Advances the active search by one step. Does nothing unless running.
    pub fn tick(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }

        let graph = self.maze.graph_mut();
        let advanced = match self.active {
            Some(SearchKind::Bfs) => self.bfs.step(graph),
            Some(SearchKind::Dfs) => self.dfs.step(graph),
            None => false,
        };

        if self.search_state() != Some(SearchState::Running) {
            self.finish();
        }

        advanced
    }

    /// Clears every flag and starts fresh searches on the same maze.
    pub fn reset(&mut self) {
        let (bfs, dfs) = search::reset(self.maze.graph_mut());
        self.bfs = bfs;
        self.dfs = dfs;
        self.state = SessionState::NotStarted;
        self.clock = None;
        self.start = None;
    }

    /// Replaces the maze with a freshly generated one. The old maze and searches are dropped,
    /// no search is active afterwards.
    pub fn regenerate(&mut self) -> Result<(), GeneratorError> {
        let mut maze = Self::generate(self.config, &mut self.seeds)?;
        let (bfs, dfs) = search::reset(maze.graph_mut());
        debug!("regenerated maze with seed {}", maze.seed());

        self.maze = maze;
        self.bfs = bfs;
        self.dfs = dfs;
        self.active = None;
        self.state = SessionState::NotStarted;
        self.clock = None;
        self.start = None;

        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Running {
            return Err(SessionError::NotRunning);
        }

        self.state = SessionState::Paused;
        if let Some(clock) = self.clock.as_mut() {
            clock.pause();
        }
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Paused {
            return Err(SessionError::NotPaused);
        }

        self.state = SessionState::Running;
        if let Some(clock) = self.clock.as_mut() {
            clock.resume();
        }
        Ok(())
    }

    pub fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::StartBfs => self.start(SearchKind::Bfs),
            Command::StartDfs => self.start(SearchKind::Dfs),
            Command::Reset => {
                let active = self.active.ok_or(SessionError::NoActiveSearch)?;
                self.start(active);
            }
            Command::Regenerate => self.regenerate()?,
            Command::TogglePause => match self.state {
                SessionState::Paused => self.resume()?,
                _ => self.pause()?,
            },
        }

        Ok(())
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        if let Some(clock) = self.clock.as_mut() {
            clock.pause();
        }
    }
}
