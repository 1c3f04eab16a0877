//! huntarr-dash - A terminal dashboard for the Huntarr backend
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use hdash_app::config::{default_config_path, init_config_file, load_settings};
use hdash_app::View;
use hdash_core::AppId;
use hdash_tui::StartOptions;
use tracing::{info, warn};

/// huntarr-dash - A terminal dashboard for the Huntarr backend
#[derive(Parser, Debug)]
#[command(name = "hdash")]
#[command(about = "A terminal dashboard for the Huntarr backend", long_about = None)]
struct Args {
    /// Backend base URL (overrides `server.base_url` from the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// App selected at startup (sonarr, radarr, lidarr, readarr)
    #[arg(long, default_value = "sonarr")]
    app: AppId,

    /// View shown at startup (home, logs, settings)
    #[arg(long, default_value = "home")]
    view: View,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    hdash_core::logging::init()?;

    let config_path = match args.config {
        Some(path) => path,
        None => {
            let path = default_config_path();
            if let Err(e) = init_config_file(&path) {
                warn!("Could not create default config: {}", e);
            }
            path
        }
    };

    let mut settings = load_settings(&config_path);
    if let Some(url) = args.url {
        settings.server.base_url = url;
    }
    info!("huntarr-dash starting (config: {})", config_path.display());

    let options = StartOptions {
        view: args.view,
        app: args.app,
    };
    hdash_tui::run(settings, options).await?;
    Ok(())
}
