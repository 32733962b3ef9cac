// main.rs - Terminal driver: steps a Game of Life session with row coroutines
//
// Reads its settings from the JSON file named by CONWAY_CONFIG (defaults
// otherwise), prints every generation as text and stops after the configured
// number of generations or once the grid starts repeating.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use conway::{GridConfig, Session};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "CONWAY_CONFIG";

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DriverConfig {
    #[serde(flatten)]
    grid          : GridConfig,
    generations   : Option<u64>,    // None runs until a cycle (or forever)
    interval_ms   : u64,
    stop_on_cycle : bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            generations: None,
            interval_ms: 50,
            stop_on_cycle: true,
        }
    }
}

impl DriverConfig {
    fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DriverConfig::load()?;
    let mut session = Session::new(config.grid.build_grid()?);
    info!(size = session.grid().size(), population = session.population(), "starting");

    let mut ticker = tokio::time::interval(Duration::from_millis(config.interval_ms.max(1)));
    loop {
        ticker.tick().await;
        render(&session);

        if config.generations.is_some_and(|limit| session.generation() >= limit) {
            break;
        }
        let cycling = session.advance_async().await?;
        if cycling && config.stop_on_cycle {
            render(&session);
            break;
        }
    }

    info!(generation = session.generation(), population = session.population(), "finished");
    Ok(())
}

fn render(session: &Session) {
    // Clear screen, home cursor
    print!("\x1b[2J\x1b[H");
    println!("Generation {}  live cells {}", session.generation(), session.population());
    print!("{}", session.grid());
}
