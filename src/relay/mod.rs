//! Game-server console relay.
//!
//! The game server watches one Discord text channel and executes whitelist
//! commands posted there as plain text. This module builds those console
//! lines and sends them:
//!
//! - `twl add <handle> permanent` whitelists a player
//! - `twl remove <handle>` removes a player
//!
//! The [`Relay`] trait abstracts the channel send so router tests can assert
//! on the exact lines (and their order) with the generated `MockRelay`.

mod sender;

pub use crate::relay::sender::{ChannelRelay, MockRelay, Relay, add_command, remove_command};
