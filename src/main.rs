use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use malware_snake::app::App;
use malware_snake::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GameConfig};

#[derive(Parser)]
#[command(name = "malware-snake")]
#[command(version, about = "Terminal snake that dodges malware")]
struct Cli {
    /// Board width, frame included
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Board height, frame included
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u16,

    /// Tick interval at level 1, in milliseconds
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,

    /// Seed for food and hazard placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write logs (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: PathBuf) -> Result<()> {
    let file = File::create(&path).with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(|| std::env::temp_dir().join("malware-snake.log"));
    init_logging(log_path)?;

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        base_interval: Duration::from_millis(cli.tick_ms),
        seed: cli.seed,
    };

    let mut app = App::new(config)?;
    app.run().await
}
