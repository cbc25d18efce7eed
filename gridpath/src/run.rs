use anyhow::bail;

use crate::config::{RunConfig, StorageKind};
use crate::find::{PathFinder, SearchReport};
use crate::grid::{Coordinate, GridStore};
use crate::util::{load_map, Render};
use crate::{DenseGrid, SparseGrid};

/// Result of one console run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub start: Coordinate,
    pub goal: Coordinate,
    pub report: SearchReport,
    /// Text rendering of the grid, empty if rendering was disabled
    pub rendering: String,
}

/// Build the grid described by `config`, search it once and render it.
///
/// A grid with no cells is an error here, even though [`PathFinder`] itself
/// accepts one and fails every search on it.
pub fn run(config: &RunConfig) -> Result<Outcome, anyhow::Error> {
    match config.storage {
        StorageKind::Dense => run_with::<DenseGrid>(config),
        StorageKind::Sparse => run_with::<SparseGrid>(config),
    }
}

fn run_with<G: GridStore>(config: &RunConfig) -> Result<Outcome, anyhow::Error> {
    let (mut grid, start_mark, goal_mark) = match &config.map {
        Some(path) => {
            let map = load_map::<G>(path)?;
            (map.grid, map.start, map.goal)
        }
        None => (G::with_size(config.width, config.height), None, None),
    };
    if grid.is_empty() {
        bail!("grid is empty");
    }

    for &wall in &config.walls {
        grid.set_wall(wall, true);
    }

    // same corners as the interactive demo
    let start = config.start.or(start_mark).unwrap_or(Coordinate::new(0, 0));
    let goal = config.goal.or(goal_mark).unwrap_or(Coordinate::new(
        grid.width() as i32 - 1,
        grid.height() as i32 - 1,
    ));
    log::info!(
        "searching {}x{} {} grid from {} to {} ({} movement, {} walls)",
        grid.width(),
        grid.height(),
        config.storage,
        start,
        goal,
        config.movement,
        grid.wall_count()
    );

    let mut finder = PathFinder::with_movement(grid, config.movement);
    let report = finder.do_search(start, goal);

    let rendering = if config.render {
        Render::new(finder.grid()).start(start).goal(goal).to_string()
    } else {
        String::new()
    };

    Ok(Outcome {
        start,
        goal,
        report,
        rendering,
    })
}
