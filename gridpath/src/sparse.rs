use std::collections::{HashMap, HashSet};

use crate::grid::{CellStorage, Coordinate, GridStore, WallMap};

/// A CellStorage that only holds entries for cells that were written to.
/// Reading an untouched cell yields `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct SparseStorage<T> {
    cells: HashMap<Coordinate, T>,
}

impl<T> SparseStorage<T> {
    /// Number of cells that hold a value
    pub fn touched(&self) -> usize {
        self.cells.len()
    }
}

impl<T: Default + Copy + 'static> CellStorage<T> for SparseStorage<T> {
    fn get(&self, c: Coordinate) -> T {
        self.cells.get(&c).copied().unwrap_or_default()
    }

    fn get_mut(&mut self, c: Coordinate) -> &mut T {
        self.cells.entry(c).or_default()
    }
}

/// Grid state kept in hash sets.
///
/// Memory grows with the number of walls and visited cells instead of the
/// grid area, which suits large mostly-open grids.
#[derive(Debug, Clone, Default)]
pub struct SparseGrid {
    width: usize,
    height: usize,
    walls: HashSet<Coordinate>,
    visited: HashSet<Coordinate>,
    path: HashSet<Coordinate>,
}

impl SparseGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl WallMap for SparseGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_wall(&self, c: Coordinate) -> bool {
        !self.contains(c) || self.walls.contains(&c)
    }
}

impl GridStore for SparseGrid {
    type Storage<T: Default + Copy + 'static> = SparseStorage<T>;

    fn with_size(width: usize, height: usize) -> Self {
        Self::new(width, height)
    }

    fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    fn set_wall(&mut self, c: Coordinate, wall: bool) {
        if !self.contains(c) {
            return;
        }
        if wall {
            self.walls.insert(c);
        } else {
            self.walls.remove(&c);
        }
    }

    fn is_visited(&self, c: Coordinate) -> bool {
        self.visited.contains(&c)
    }

    fn is_on_path(&self, c: Coordinate) -> bool {
        self.path.contains(&c)
    }

    fn set_visited(&mut self, c: Coordinate) {
        if self.contains(c) {
            self.visited.insert(c);
        }
    }

    fn set_on_path(&mut self, c: Coordinate) {
        if self.contains(c) {
            self.path.insert(c);
        }
    }

    fn clear_marks(&mut self) {
        self.visited.clear();
        self.path.clear();
    }

    fn walls(&self) -> Vec<Coordinate> {
        let mut walls: Vec<_> = self.walls.iter().copied().collect();
        walls.sort_unstable_by_key(|c| (c.y, c.x));
        walls
    }

    fn wall_count(&self) -> usize {
        self.walls.len()
    }

    fn create_storage<T: Default + Copy + 'static>(&self) -> Self::Storage<T> {
        SparseStorage::default()
    }
}
