use anyhow::Result;
use clap::Parser;
use tracing::info;

mod app;
mod config;
mod scene;
mod theme;
mod vector;

use config::Config;
use theme::Theme;
use vector::Vector2;

#[derive(Parser, Debug)]
#[command(name = "vecscope")]
#[command(author, version, about = "Interactive 2D vector converter and visualizer")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Write a commented default config to the XDG path and exit
    #[arg(long)]
    init_config: bool,

    /// Color theme: classic, dark, light, mono
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Initial x component
    #[arg(long, default_value = "0")]
    ax: f64,

    /// Initial y component
    #[arg(long, default_value = "0")]
    ay: f64,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vecscope=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Load or create config
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    }
    .validated();
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    info!("Starting vecscope with theme {:?}", config.theme);

    app::run(
        config,
        Vector2 {
            ax: args.ax,
            ay: args.ay,
        },
    )
}
