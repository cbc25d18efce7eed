use crate::grid::{CellStorage, Coordinate, GridStore, WallMap};

/// A CellStorage that keeps one slot per cell in a single row-major vec
#[derive(Debug, Clone)]
pub struct DenseStorage<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T> DenseStorage<T> {
    #[inline]
    fn index(&self, c: Coordinate) -> usize {
        c.y as usize * self.width + c.x as usize
    }
}

impl<T: Copy + 'static> CellStorage<T> for DenseStorage<T> {
    fn get(&self, c: Coordinate) -> T {
        self.cells[self.index(c)]
    }

    fn get_mut(&mut self, c: Coordinate) -> &mut T {
        let i = self.index(c);
        &mut self.cells[i]
    }
}

/// Grid state kept in flat arrays sized to the grid.
///
/// Every query is a single index computation, memory is proportional to
/// `width * height` no matter how many walls there are.
#[derive(Debug, Clone, Default)]
pub struct DenseGrid {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    visited: Vec<bool>,
    path: Vec<bool>,
}

impl DenseGrid {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            walls: vec![false; len],
            visited: vec![false; len],
            path: vec![false; len],
        }
    }

    /// Flat index of `c`, or `None` if it is outside the grid.
    #[inline]
    fn index(&self, c: Coordinate) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.width + c.x as usize)
    }

    #[inline]
    fn point(&self, idx: usize) -> Coordinate {
        Coordinate::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

impl WallMap for DenseGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_wall(&self, c: Coordinate) -> bool {
        self.index(c).map_or(true, |i| self.walls[i])
    }
}

impl GridStore for DenseGrid {
    type Storage<T: Default + Copy + 'static> = DenseStorage<T>;

    fn with_size(width: usize, height: usize) -> Self {
        Self::new(width, height)
    }

    fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    fn set_wall(&mut self, c: Coordinate, wall: bool) {
        if let Some(i) = self.index(c) {
            self.walls[i] = wall;
        }
    }

    fn is_visited(&self, c: Coordinate) -> bool {
        self.index(c).is_some_and(|i| self.visited[i])
    }

    fn is_on_path(&self, c: Coordinate) -> bool {
        self.index(c).is_some_and(|i| self.path[i])
    }

    fn set_visited(&mut self, c: Coordinate) {
        if let Some(i) = self.index(c) {
            self.visited[i] = true;
        }
    }

    fn set_on_path(&mut self, c: Coordinate) {
        if let Some(i) = self.index(c) {
            self.path[i] = true;
        }
    }

    fn clear_marks(&mut self) {
        self.visited.fill(false);
        self.path.fill(false);
    }

    fn walls(&self) -> Vec<Coordinate> {
        self.walls
            .iter()
            .enumerate()
            .filter(|(_, wall)| **wall)
            .map(|(i, _)| self.point(i))
            .collect()
    }

    fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }

    fn create_storage<T: Default + Copy + 'static>(&self) -> Self::Storage<T> {
        DenseStorage {
            width: self.width,
            cells: vec![T::default(); self.len()],
        }
    }
}
