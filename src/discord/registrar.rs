//! Global slash command registration.

use log::{error, info};
use serenity::builder::CreateCommand;
use serenity::http::Http;
use serenity::model::application::Command;

/// Name of the single application command.
pub const SETUP_COMMAND: &str = "setup";

/// The command set published for the application.
fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(SETUP_COMMAND)
            .description("Send the whitelist/rename GUI to this channel"),
    ]
}

/// Overwrites the global application command set with the `/setup` command.
///
/// Failure is logged, not fatal: the bot keeps serving whatever commands
/// Discord already has registered for the application.
pub async fn register_commands(http: &Http) {
    match Command::set_global_commands(http, commands()).await {
        Ok(_) => info!("registered slash commands"),
        Err(e) => error!("failed to register slash commands: {}", e),
    }
}
