use std::{fmt::Display, path::Path};

use anyhow::{anyhow, bail, Context};
use image::{DynamicImage, GenericImageView};

use crate::grid::{Coordinate, GridStore};

/// A grid read from a file, with the start and goal markers it carried.
#[derive(Debug, Clone)]
pub struct LoadedMap<G> {
    pub grid: G,
    pub start: Option<Coordinate>,
    pub goal: Option<Coordinate>,
}

/// Turn an image into a grid, dark pixels become walls.
pub fn parse_img<G: GridStore>(img: &DynamicImage) -> Result<G, anyhow::Error> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        bail!("image has no pixels");
    }

    let mut grid = G::with_size(width, height);

    for row in 0..height {
        for col in 0..width {
            let p = img.get_pixel(col as u32, row as u32);

            if p.0[0] < 128 {
                grid.set_wall(Coordinate::new(col as i32, row as i32), true);
            }
        }
    }

    Ok(grid)
}

/// Parse a text map.
///
/// `#` is a wall, `.` and space are free, `S` and `G` mark the start and the
/// goal. Short rows are padded with free cells.
pub fn parse_ascii<G: GridStore>(text: &str) -> Result<LoadedMap<G>, anyhow::Error> {
    let rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    let height = rows
        .iter()
        .rposition(|r| !r.trim().is_empty())
        .map(|last| last + 1)
        .ok_or_else(|| anyhow!("map is empty"))?;
    let width = rows[..height]
        .iter()
        .map(|r| r.chars().count())
        .max()
        .unwrap_or(0);

    let mut grid = G::with_size(width, height);
    let mut start = None;
    let mut goal = None;

    for (row, line) in rows[..height].iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let c = Coordinate::new(col as i32, row as i32);
            match ch {
                '#' => grid.set_wall(c, true),
                '.' | ' ' => {}
                'S' => {
                    if start.replace(c).is_some() {
                        bail!("second start marker at line {}, column {}", row + 1, col + 1);
                    }
                }
                'G' => {
                    if goal.replace(c).is_some() {
                        bail!("second goal marker at line {}, column {}", row + 1, col + 1);
                    }
                }
                other => {
                    log::warn!(
                        "unknown map glyph {:?} at line {}, column {}, treating it as free",
                        other,
                        row + 1,
                        col + 1
                    );
                }
            }
        }
    }

    Ok(LoadedMap { grid, start, goal })
}

/// Load a map from disk. `.txt` and `.map` files are read as text maps,
/// anything else is decoded as an image.
pub fn load_map<G: GridStore>(path: impl AsRef<Path>) -> Result<LoadedMap<G>, anyhow::Error> {
    let path = path.as_ref();
    let is_text = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("txt") | Some("map")
    );

    if is_text {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read map {}", path.display()))?;
        parse_ascii(&text).with_context(|| format!("failed to parse map {}", path.display()))
    } else {
        let img = image::open(path)
            .with_context(|| format!("failed to open image {}", path.display()))?;
        let grid = parse_img(&img).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(LoadedMap {
            grid,
            start: None,
            goal: None,
        })
    }
}

/// Text rendering of a grid after a search.
///
/// `S` start, `G` goal, `*` path, `+` visited, `#` wall, `.` free.
pub struct Render<'a, G> {
    grid: &'a G,
    start: Option<Coordinate>,
    goal: Option<Coordinate>,
}

impl<'a, G: GridStore> Render<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Self {
            grid,
            start: None,
            goal: None,
        }
    }

    pub fn start(mut self, start: Coordinate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn goal(mut self, goal: Coordinate) -> Self {
        self.goal = Some(goal);
        self
    }

    fn glyph(&self, c: Coordinate) -> char {
        if Some(c) == self.start {
            'S'
        } else if Some(c) == self.goal {
            'G'
        } else if self.grid.is_on_path(c) {
            '*'
        } else if self.grid.is_visited(c) {
            '+'
        } else if self.grid.is_wall(c) {
            '#'
        } else {
            '.'
        }
    }
}

impl<G: GridStore> Display for Render<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                write!(f, "{}", self.glyph(Coordinate::new(x as i32, y as i32)))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
