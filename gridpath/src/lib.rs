//! A* shortest-path search on 2D grids.
//!
//! The search engine ([`PathFinder`]) is written once and runs on top of a
//! [`GridStore`], of which there are two backends:
//!
//! - [`DenseGrid`] keeps walls and search markers in arrays sized to the grid
//! - [`SparseGrid`] keeps them in hash sets, so memory follows the number of
//!   walls and visited cells rather than the grid area
//!
//! Movement costs and the distance estimate are pluggable through the
//! [`NeighborPolicy`] and [`Heuristic`] traits. [`Movement`] bundles the two
//! built-in rule sets (4-way with Manhattan distance, 8-way with octile
//! distance).
//!
//! ```
//! use gridpath::{Coordinate, Movement, PathFinder};
//!
//! let mut finder = PathFinder::dense(5, 5);
//! finder.set_movement(Movement::Orthogonal);
//! finder.set_wall(Coordinate::new(2, 2), true);
//!
//! let report = finder.do_search(Coordinate::new(0, 0), Coordinate::new(4, 4));
//! assert!(report.found);
//! assert_eq!(report.cost, 8.0);
//! ```

pub mod config;
pub mod dense;
pub mod distance;
pub mod find;
pub mod grid;
pub mod policy;
pub mod run;
pub mod sparse;
pub mod util;

pub use config::{RunConfig, StorageKind};
pub use dense::DenseGrid;
pub use find::{PathFinder, PathResult, Search, SearchReport, SearchState, SearchStats};
pub use grid::{CellStorage, Coordinate, GridStore, WallMap};
pub use policy::{Diagonal, Edge, Heuristic, Movement, NeighborPolicy, Orthogonal};
pub use sparse::SparseGrid;
