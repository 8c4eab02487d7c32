//! Containers the generator and the solvers are built on.

pub mod deque;
pub mod list;
pub mod queue;

use thiserror::Error;

pub use deque::{Deque, NodeId};
pub use list::List;
pub use queue::{Frontier, Queue, Stack};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    #[error("cannot remove from an empty collection")]
    Empty,
    #[error("node {0:?} is not a live member of the chain")]
    InvalidNode(NodeId),
}
