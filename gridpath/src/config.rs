use std::{fmt::Display, path::Path, path::PathBuf, str::FromStr};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::grid::Coordinate;
use crate::policy::Movement;

/// Which [`GridStore`](crate::GridStore) backend to build.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Dense,
    Sparse,
}

impl Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StorageKind::Dense => "dense",
                StorageKind::Sparse => "sparse",
            }
        )
    }
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dense" => Ok(StorageKind::Dense),
            "sparse" => Ok(StorageKind::Sparse),
            _ => Err(anyhow::anyhow!("Invalid storage: {}", s)),
        }
    }
}

/// Settings of a single console run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields take their default values
pub struct RunConfig {
    /// Image or text map to load, the grid is `width x height` and empty otherwise
    pub map: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    /// Extra walls placed on top of the map
    pub walls: Vec<Coordinate>,
    pub start: Option<Coordinate>,
    pub goal: Option<Coordinate>,
    pub movement: Movement,
    pub storage: StorageKind,
    /// Print the grid after the search
    pub render: bool,
    /// Print the report as JSON instead of text
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            map: None,
            width: 60,
            height: 40,
            walls: Vec::new(),
            start: None,
            goal: None,
            movement: Movement::default(),
            storage: StorageKind::default(),
            render: true,
            json: false,
        }
    }
}

impl RunConfig {
    pub fn from_json(text: &str) -> Result<Self, anyhow::Error> {
        serde_json::from_str(text).context("invalid run config")
    }

    /// Read a config file. A relative `map` path is resolved against the
    /// directory of the config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::from_json(&text)
            .with_context(|| format!("failed to load config {}", path.display()))?;

        if let (Some(map), Some(dir)) = (&config.map, path.parent()) {
            if map.is_relative() {
                config.map = Some(dir.join(map));
            }
        }

        Ok(config)
    }
}
