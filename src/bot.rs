//! Bot lifecycle: wiring the registry, router, gateway client and the
//! liveness endpoint.
//!
//! # Architecture
//!
//! The bot runs two concurrent pieces:
//!
//! 1. **Gateway loop**: serenity's event loop invokes the [`Handler`] once
//!    per interaction (slash command, button click, modal submission).
//! 2. **Liveness task**: a background HTTP server answering keep-alive pings
//!    on `GET /`.
//!
//! The registration registry is loaded from the data directory once at
//! startup; every mutation afterwards rewrites the file through the store
//! injected into the router.

use anyhow::Context as _;
use log::{error, info};
use serenity::Client;
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::{ApplicationId, ChannelId};

use crate::{
    Args,
    config::Config,
    discord::Handler,
    interactions::Router,
    liveness,
    registry::{JsonFileStore, RegistrationStore},
    utils::get_path,
};

/// Whitelist bot: a Discord gateway client plus the liveness endpoint.
pub struct Bot {
    /// Gateway client with the interaction handler installed.
    client: Client,
    /// Port for the keep-alive endpoint.
    http_port: u16,
}

impl Bot {
    /// Creates a new Bot instance from configuration and command line
    /// arguments.
    ///
    /// Loads the registration registry from the data directory (fault
    /// tolerant, see [`JsonFileStore::load`]), wires the router into the
    /// gateway event handler and builds the client with the `GUILDS` intent.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway client cannot be built.
    pub async fn new(config: Config, args: Args) -> Result<Self, anyhow::Error> {
        let store = JsonFileStore::load(get_path(&args.data, "registrations")).await;
        info!("{} users currently whitelisted", store.load_all().len());

        let router = Router::new(store);
        let handler = Handler::new(router, ChannelId::new(config.discord.relay_channel_id));

        let client = Client::builder(&config.discord.token, GatewayIntents::GUILDS)
            .application_id(ApplicationId::new(config.discord.application_id))
            .event_handler(handler)
            .await
            .context("failed to build the gateway client")?;

        Ok(Bot {
            client,
            http_port: config.http.port,
        })
    }

    /// Starts the liveness endpoint and runs the gateway loop until the
    /// process is terminated.
    pub async fn start(mut self) {
        liveness::spawn(self.http_port);

        if let Err(e) = self.client.start().await {
            error!("gateway loop ended with error: {:?}", e);
        }
    }
}
