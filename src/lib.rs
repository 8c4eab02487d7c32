pub mod collections;
pub mod dims;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod search;
pub mod session;
pub mod settings;

pub use maze::{generate, Generator, GeneratorError, Maze, MazeConfig};
pub use search::{reset, Engine, SearchKind, SearchState};
pub use session::{Command, Session, SessionError, SessionState};
