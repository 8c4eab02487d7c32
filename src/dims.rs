use std::{
    fmt,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// Position of a cell, or size of a grid, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    /// Whether `pos` lies inside a grid of this size.
    pub fn contains(self, pos: Dims) -> bool {
        (0..self.0).contains(&pos.0) && (0..self.1).contains(&pos.1)
    }

    /// Iterates every position of a grid of this size, row by row.
    pub fn iter_fill(self) -> impl Iterator<Item = Dims> {
        let Dims(w, h) = self;
        (0..h.max(0)).flat_map(move |y| (0..w.max(0)).map(move |x| Dims(x, y)))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}
