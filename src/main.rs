//! Warden - a Discord bot for Minecraft server whitelisting.
//!
//! This is the main entry point for the Warden bot, which lets Discord users
//! self-register (and later rename) their Minecraft username for the Nine SMP
//! server through a button-and-modal panel.
//!
//! # Overview
//!
//! An admin runs `/setup` in a channel to post the whitelist panel. From there,
//! users click a button, fill in their Minecraft username in a modal, and the
//! bot relays the matching whitelist console command to the channel watched by
//! the game server. A rename button lets registered users swap their handle,
//! which relays a removal of the old name followed by an addition of the new
//! one.
//!
//! # Features
//!
//! - **Self-Service Whitelisting**: One-click button plus modal, no admin involved
//! - **Renames**: Registered users can replace their handle at any time
//! - **Console Relay**: Whitelist mutations are posted as plain-text commands
//!   to the game server's console channel
//! - **Persistent Registry**: The user-to-handle mapping survives restarts in a
//!   flat JSON file
//! - **Keep-Alive Endpoint**: A minimal HTTP route so hosting platforms can
//!   ping the process
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! discord:
//!   token: "your-bot-token"
//!   application_id: 1234567890
//!   relay_channel_id: 9876543210
//!
//! http:
//!   port: 3000
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the
//! `WARDEN_` prefix:
//!
//! ```bash
//! export WARDEN_DISCORD__TOKEN="token-from-env"
//! export WARDEN_DISCORD__APPLICATION_ID="1234567890"
//! export WARDEN_DISCORD__RELAY_CHANNEL_ID="9876543210"
//! ```
//!
//! # Usage
//!
//! ```bash
//! warden --config config.yaml --data ./warden-data
//! ```
//!
//! # Architecture
//!
//! The bot consists of several modules:
//!
//! - [`registry`] - Registration storage with flat-file persistence
//! - [`interactions`] - Interaction routing, handle validation and reply text
//! - [`discord`] - Gateway event handling, command registration and UI builders
//! - [`relay`] - Console command relay to the game-server channel
//! - [`liveness`] - Keep-alive HTTP endpoint
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`bot`] - Lifecycle wiring of all of the above
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod config;
mod discord;
mod interactions;
mod liveness;
mod registry;
mod relay;
mod utils;

/// Command-line arguments for the Warden bot.
///
/// Most configuration is done through the YAML file (see [`config::Config`]);
/// the command line only locates that file and the data directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Values can be overridden with `WARDEN_`-prefixed environment
    /// variables, see the [`config`] module for the expected format.
    #[arg(short, long)]
    config: String,

    /// Path to the directory for storing persistent data.
    ///
    /// This directory will contain the `registrations` JSON file with the
    /// user-to-handle whitelist mapping.
    #[arg(short, long)]
    data: String,
}

/// Main entry point for the Warden bot.
///
/// Initializes logging (`info` by default, `RUST_LOG` to override), parses
/// command-line arguments, loads the configuration and runs the bot until the
/// process is terminated. Configuration and initialization errors are logged
/// and end the process without a panic.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting warden {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable overrides
    let config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Launch bot
    let bot = match Bot::new(config, args).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };
    bot.start().await;
}
