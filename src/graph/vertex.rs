use crate::dims::Dims;

use Direction::*;

/// Dense, row-major index of a vertex in its [`Graph`](super::Graph): `y * width + x`.
///
/// Injective over the grid since `x < width`, so it doubles as the lookup key of the disjoint
/// set and of the predecessor map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    /// Order in which neighbours are linked when the grid is built.
    pub const ALL: [Direction; 4] = [Left, Right, Top, Bottom];

    pub fn to_coord(self) -> Dims {
        match self {
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
            Top => Dims(0, -1),
            Bottom => Dims(0, 1),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }

    pub fn between(from: Dims, to: Dims) -> Option<Direction> {
        match to - from {
            Dims(-1, 0) => Some(Left),
            Dims(1, 0) => Some(Right),
            Dims(0, -1) => Some(Top),
            Dims(0, 1) => Some(Bottom),
            _ => None,
        }
    }
}

/// Directed link between two grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: u32,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: u32) -> Self {
        Self { from, to, weight }
    }

    pub fn reversed(self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }

    /// Endpoints ordered so that an edge and its reverse give the same pair.
    pub fn undirected(self) -> (VertexId, VertexId) {
        (self.from.min(self.to), self.from.max(self.to))
    }

    /// Whether both edges separate the same two cells, in either direction.
    pub fn same_wall(self, other: Edge) -> bool {
        self.undirected() == other.undirected()
    }
}

#[derive(Debug, Clone)]
pub struct Vertex {
    pos: Dims,
    pub(crate) travelled: bool,
    pub(crate) in_path: bool,
    pub(crate) edges: Vec<Edge>,
}

impl Vertex {
    pub(crate) fn new(pos: Dims) -> Self {
        Self {
            pos,
            travelled: false,
            in_path: false,
            edges: Vec::new(),
        }
    }

    pub fn pos(&self) -> Dims {
        self.pos
    }

    pub fn x(&self) -> i32 {
        self.pos.0
    }

    pub fn y(&self) -> i32 {
        self.pos.1
    }

    /// Set once a search has discovered this cell.
    pub fn travelled(&self) -> bool {
        self.travelled
    }

    /// Set on every cell of the reconstructed start-to-goal path.
    pub fn in_path(&self) -> bool {
        self.in_path
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn reset_flags(&mut self) {
        self.travelled = false;
        self.in_path = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trip() {
        for dir in Direction::ALL {
            let from = Dims(5, 5);
            let to = from + dir.to_coord();
            assert_eq!(Direction::between(from, to), Some(dir));
            assert_eq!(Direction::between(to, from), Some(dir.reverse()));
        }
        assert_eq!(Direction::between(Dims(0, 0), Dims(1, 1)), None);
        assert_eq!(Direction::between(Dims(0, 0), Dims(0, 0)), None);
    }

    #[test]
    fn edges_with_swapped_endpoints_are_the_same_wall() {
        let a = Edge::new(VertexId(3), VertexId(4), 10);
        let b = Edge::new(VertexId(4), VertexId(3), 999);
        let c = Edge::new(VertexId(3), VertexId(7), 10);

        assert!(a.same_wall(b));
        assert!(a.same_wall(a.reversed()));
        assert!(!a.same_wall(c));
        assert_eq!(a.reversed().weight, 10);
    }
}
