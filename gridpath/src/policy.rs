use std::f64::consts::SQRT_2;
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::distance::{manhattan, octile};
use crate::grid::{Coordinate, WallMap};

/// A traversable neighbor and the cost of stepping onto it.
pub type Edge = (Coordinate, f64);

/// Estimate of the remaining cost between two cells.
///
/// The search only returns shortest paths if the estimate never
/// overestimates the true cost. Any `Fn(Coordinate, Coordinate) -> f64`
/// is a heuristic, so the functions in [`crate::distance`] can be
/// installed directly.
pub trait Heuristic {
    fn estimate(&self, from: Coordinate, to: Coordinate) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Coordinate, Coordinate) -> f64,
{
    fn estimate(&self, from: Coordinate, to: Coordinate) -> f64 {
        self(from, to)
    }
}

/// Neighbor enumeration for the search.
///
/// Closures of the shape `FnMut(Coordinate, &dyn WallMap, &mut Vec<Edge>)`
/// implement this trait as well.
pub trait NeighborPolicy {
    /// Append the traversable neighbors of `cell` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&mut self, cell: Coordinate, grid: &dyn WallMap, buf: &mut Vec<Edge>);

    /// Called once before every search.
    fn reset(&mut self) {}
}

impl<F> NeighborPolicy for F
where
    F: FnMut(Coordinate, &dyn WallMap, &mut Vec<Edge>),
{
    fn neighbors(&mut self, cell: Coordinate, grid: &dyn WallMap, buf: &mut Vec<Edge>) {
        self(cell, grid, buf)
    }
}

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const ORTHOGONAL_REVERSED: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// 4-directional movement with unit cost.
///
/// The enumeration order flips on every expansion so that ties are not
/// always resolved towards the same direction, which keeps paths on open
/// ground close to the straight line instead of hugging one axis.
#[derive(Debug, Clone, Default)]
pub struct Orthogonal {
    flip: bool,
}

impl Orthogonal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NeighborPolicy for Orthogonal {
    fn neighbors(&mut self, cell: Coordinate, grid: &dyn WallMap, buf: &mut Vec<Edge>) {
        self.flip = !self.flip;
        let dirs = if self.flip {
            &ORTHOGONAL
        } else {
            &ORTHOGONAL_REVERSED
        };
        for &(dx, dy) in dirs {
            let n = cell.offset(dx, dy);
            if !grid.is_wall(n) {
                buf.push((n, 1.0));
            }
        }
    }

    fn reset(&mut self) {
        // the start cell is expanded with the forward order
        self.flip = false;
    }
}

/// 8-directional movement, orthogonal steps cost 1 and diagonal steps √2.
///
/// A diagonal step is refused when both orthogonal cells next to it are
/// walls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagonal;

impl NeighborPolicy for Diagonal {
    fn neighbors(&mut self, cell: Coordinate, grid: &dyn WallMap, buf: &mut Vec<Edge>) {
        for (dx, dy) in ORTHOGONAL {
            let n = cell.offset(dx, dy);
            if !grid.is_wall(n) {
                buf.push((n, 1.0));
            }
        }
        for (dx, dy) in DIAGONAL {
            if grid.is_wall(cell.offset(dx, 0)) && grid.is_wall(cell.offset(0, dy)) {
                continue;
            }
            let n = cell.offset(dx, dy);
            if !grid.is_wall(n) {
                buf.push((n, SQRT_2));
            }
        }
    }
}

/// The built-in movement rules, each paired with a matching admissible
/// heuristic.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    /// 4 directions, Manhattan heuristic
    Orthogonal,
    /// 8 directions, octile heuristic
    #[default]
    Diagonal,
}

impl Movement {
    pub fn neighbors(self) -> Box<dyn NeighborPolicy> {
        match self {
            Movement::Orthogonal => Box::new(Orthogonal::new()),
            Movement::Diagonal => Box::new(Diagonal),
        }
    }

    pub fn heuristic(self) -> fn(Coordinate, Coordinate) -> f64 {
        match self {
            Movement::Orthogonal => manhattan,
            Movement::Diagonal => octile,
        }
    }
}

impl Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Movement::Orthogonal => "orthogonal",
                Movement::Diagonal => "diagonal",
            }
        )
    }
}

impl FromStr for Movement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orthogonal" | "4" => Ok(Movement::Orthogonal),
            "diagonal" | "8" => Ok(Movement::Diagonal),
            _ => Err(anyhow::anyhow!("Invalid movement: {}", s)),
        }
    }
}
