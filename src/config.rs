//! Configuration file structures for the Warden bot.
//!
//! This module defines the configuration file format using YAML. The
//! configuration is split into two sections: Discord account settings and the
//! keep-alive HTTP endpoint.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Discord Configuration
//! discord:
//!   # Bot token of the Discord application
//!   token: "your-bot-token"
//!
//!   # Application id the slash command set is registered under
//!   application_id: 1234567890
//!
//!   # Text channel watched by the game-server console
//!   relay_channel_id: 9876543210
//!
//! # Keep-alive HTTP endpoint (optional)
//! http:
//!   port: 3000
//! ```
//!
//! # Environment Variable Overrides
//!
//! Every value can be overridden with a `WARDEN_`-prefixed environment
//! variable, using `__` as the section separator:
//!
//! ```bash
//! export WARDEN_DISCORD__TOKEN="token-from-env"
//! export WARDEN_DISCORD__RELAY_CHANNEL_ID="9876543210"
//! export WARDEN_HTTP__PORT="8080"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure for the Warden bot.
#[derive(Deserialize)]
pub struct Config {
    /// Discord account configuration
    pub discord: Discord,
    /// Keep-alive HTTP endpoint configuration
    #[serde(default)]
    pub http: Http,
}

impl Config {
    /// Loads the configuration from a YAML file, merged with `WARDEN_`
    /// environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the merged
    /// configuration does not match the expected structure.
    pub fn load(path: &str) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("WARDEN_").split("__"))
            .extract()
    }
}

/// Discord account configuration.
///
/// # YAML Section
///
/// ```yaml
/// discord:
///   token: "your-bot-token"
///   application_id: 1234567890
///   relay_channel_id: 9876543210
/// ```
#[derive(Deserialize)]
pub struct Discord {
    /// Bot token used to authenticate against the Discord gateway and API.
    pub token: String,

    /// Application id the global slash command set is registered under.
    pub application_id: u64,

    /// Id of the text channel whose messages the game server interprets as
    /// console commands.
    pub relay_channel_id: u64,
}

/// Keep-alive HTTP endpoint configuration.
///
/// The whole section is optional; hosting platforms that ping the bot over
/// HTTP usually expect port 3000.
#[derive(Deserialize)]
pub struct Http {
    /// Port the liveness endpoint listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Http {
    fn default() -> Self {
        Http {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}
