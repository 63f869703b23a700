//! Minefeed - A terminal alert desk for crypto-mining news.
//!
//! Minefeed shows a live feed of mining news alerts, each with a drafted post,
//! and lets the user publish, edit, queue or dismiss them from the terminal.
//!
//! # Features
//!
//! - **Alert Feed**: Prioritized alerts with key points and a draft post
//! - **Speed Mode**: Posts wait for a 10 seconds countdown that can be cancelled
//! - **Filters**: Narrow the feed by priority and category
//! - **Performance Figures**: Mock follower and engagement figures with an engagement trend
//! - **YAML Configuration**: Simple configuration file format with environment variable support
//!
//! # Configuration
//!
//! Create a `minefeed.yaml` file with your settings:
//!
//! ```yaml
//! feed:
//!   speed_mode: true
//!   seed_path: "./seed.json"
//!
//! metrics:
//!   refresh_interval: 30
//! ```
//!
//! Every setting has a default, the file itself is optional. Override any value
//! using environment variables with the `MINEFEED_` prefix:
//!
//! ```bash
//! export MINEFEED_FEED__SPEED_MODE=true
//! ```
//!
//! # Usage
//!
//! ```bash
//! minefeed --config minefeed.yaml
//! ```
//!
//! Then type commands such as `!feed list`, `!feed post 1` or `!feed cancel`.
//! `!feed help` lists them all.
//!
//! # Architecture
//!
//! - [`alerts`] - Alert items, the store, the auto-post controller and the feed
//! - [`commands`] - Command parsing, execution and text responses
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`dashboard`] - Terminal runtime: command loop, countdown ticker, metrics refresh
//! - [`metrics`] - Performance figures and engagement trend
//! - [`notifier`] - Notices for completed actions
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{config::Config, dashboard::Dashboard};

mod alerts;
mod commands;
mod config;
mod dashboard;
mod metrics;
mod notifier;

/// Command-line arguments for minefeed.
///
/// # Examples
///
/// ```bash
/// minefeed --config minefeed.yaml
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// A missing file is not an error, the defaults are used. See the
    /// [`config`] module for the expected format.
    #[arg(short, long, default_value = "minefeed.yaml")]
    config: String,
}

/// Main entry point.
///
/// 1. **Logging Setup**: `info` level by default, overridden by `RUST_LOG`
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Reads the YAML file merged with the environment
/// 4. **Dashboard Execution**: Loads the seed alerts and reads commands until
///    stdin is closed
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting minefeed {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    let dashboard = Dashboard::new(config).await;
    if let Err(e) = dashboard.start().await {
        error!("Dashboard stopped: {:#}", e);
    }
}
