use std::path::PathBuf;

use clap::Parser;
use gridpath::{run::run, Movement, RunConfig, StorageKind};

/// Search a grid once and print the result
#[derive(Parser, Debug)]
#[command(name = "gridpath", version)]
struct Cli {
    /// JSON run config, defaults are used when omitted
    config: Option<PathBuf>,

    /// Movement rules: orthogonal (4) or diagonal (8)
    #[arg(long)]
    movement: Option<Movement>,

    /// Grid backend: dense or sparse
    #[arg(long)]
    storage: Option<StorageKind>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the grid
    #[arg(long)]
    no_render: bool,
}

impl Cli {
    fn load_config(&self) -> Result<RunConfig, anyhow::Error> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Command line flags win over the config file.
    fn apply(&self, config: &mut RunConfig) {
        if let Some(movement) = self.movement {
            config.movement = movement;
        }
        if let Some(storage) = self.storage {
            config.storage = storage;
        }
        if self.json {
            config.json = true;
        }
        if self.no_render {
            config.render = false;
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let config = Cli::parse().load_config()?;
    let outcome = run(&config)?;

    if config.render {
        print!("{}", outcome.rendering);
    }
    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        println!("start:      {}", outcome.start);
        println!("goal:       {}", outcome.goal);
        println!("{}", outcome.report);
    }

    Ok(())
}
