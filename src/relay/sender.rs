//! Console line sender for the relay channel.

use std::sync::Arc;

use log::debug;
use mockall::automock;
use serenity::http::Http;
use serenity::model::id::ChannelId;

/// Builds the console line whitelisting a handle.
pub fn add_command(handle: &str) -> String {
    format!("twl add {} permanent", handle)
}

/// Builds the console line removing a handle from the whitelist.
pub fn remove_command(handle: &str) -> String {
    format!("twl remove {}", handle)
}

/// Sender of console lines to the game server.
///
/// This trait abstracts the channel send for easier testing with mocks.
#[automock]
pub trait Relay {
    /// Sends one plain-text console line to the relay channel.
    async fn send_line(&self, line: &str) -> Result<(), anyhow::Error>;
}

/// Relay implementation posting to the configured Discord text channel.
///
/// One message per console line; the game server picks them up in channel
/// order.
pub struct ChannelRelay {
    /// REST handle used for the channel send.
    http: Arc<Http>,
    /// Channel watched by the game-server console.
    channel_id: ChannelId,
}

impl ChannelRelay {
    /// Create a new [ChannelRelay] for the given channel.
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        ChannelRelay { http, channel_id }
    }
}

impl Relay for ChannelRelay {
    async fn send_line(&self, line: &str) -> Result<(), anyhow::Error> {
        debug!("relaying console line to channel {}: {}", self.channel_id, line);
        self.channel_id.say(&self.http, line).await?;
        Ok(())
    }
}
