use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A cell position on the grid.
///
/// Equality and hashing only look at the position, the frontier keeps its
/// own score next to the coordinate.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Read-only occupancy view handed to neighbor policies.
pub trait WallMap {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Whether `c` is blocked. Anything outside the grid is a wall.
    fn is_wall(&self, c: Coordinate) -> bool;

    /// Check if the coordinate lies within `[0, width) x [0, height)`
    #[inline]
    fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width() && (c.y as usize) < self.height()
    }
}

/// Per-cell scratch storage handed out by a [`GridStore`].
///
/// Callers only pass coordinates that lie within the grid the storage was
/// created for.
pub trait CellStorage<T> {
    fn get(&self, c: Coordinate) -> T;
    fn get_mut(&mut self, c: Coordinate) -> &mut T;
}

/// Occupancy and per-search markers of a rectangular grid.
///
/// Implemented by [`DenseGrid`](crate::DenseGrid), backed by arrays sized to
/// the grid, and [`SparseGrid`](crate::SparseGrid), backed by hash sets that
/// only hold the cells that were actually touched.
pub trait GridStore: WallMap {
    /// The type the grid uses for per-search scratch values
    type Storage<T: Default + Copy + 'static>: CellStorage<T>;

    /// Create an empty grid with no walls.
    fn with_size(width: usize, height: usize) -> Self
    where
        Self: Sized;

    /// Replace the grid with an empty one of the given size. Walls and
    /// search markers are all cleared.
    fn resize(&mut self, width: usize, height: usize);

    /// Set or clear a wall. Coordinates outside the grid are ignored.
    fn set_wall(&mut self, c: Coordinate, wall: bool);

    fn is_visited(&self, c: Coordinate) -> bool;
    fn is_on_path(&self, c: Coordinate) -> bool;

    fn set_visited(&mut self, c: Coordinate);
    fn set_on_path(&mut self, c: Coordinate);

    /// Forget the visited and path markers of the previous search.
    fn clear_marks(&mut self);

    /// All wall coordinates in row-major order.
    fn walls(&self) -> Vec<Coordinate>;

    fn wall_count(&self) -> usize {
        self.walls().len()
    }

    /// Number of cells in the grid
    fn len(&self) -> usize {
        self.width() * self.height()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a storage for values of type T, every cell starting at `T::default()`
    fn create_storage<T: Default + Copy + 'static>(&self) -> Self::Storage<T>;
}
