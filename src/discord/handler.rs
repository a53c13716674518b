//! Gateway event handler dispatching interactions to the router.
//!
//! One callback per interaction: the `/setup` command posts the panel,
//! button clicks open a modal or an ephemeral error, and modal submissions
//! defer an ephemeral reply that is later edited with the outcome. Anything
//! else coming over the gateway is ignored.

use log::{error, info};
use serenity::async_trait;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::client::{Context, EventHandler};
use serenity::model::application::{
    CommandInteraction, ComponentInteraction, Interaction, ModalInteraction,
};
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;

use crate::{
    discord::{
        registrar::{self, SETUP_COMMAND},
        ui,
    },
    interactions::{ButtonOutcome, Router},
    registry::JsonFileStore,
    relay::ChannelRelay,
};

/// Gateway event handler for the whitelist bot.
pub struct Handler {
    /// Platform-free interaction router.
    router: Router<JsonFileStore>,
    /// Channel watched by the game-server console.
    relay_channel_id: ChannelId,
}

impl Handler {
    /// Creates the handler around an already-wired router.
    pub fn new(router: Router<JsonFileStore>, relay_channel_id: ChannelId) -> Self {
        Handler {
            router,
            relay_channel_id,
        }
    }

    /// `/setup`: posts the panel embed with the two buttons.
    async fn handle_setup(&self, ctx: &Context, command: &CommandInteraction) {
        let message = CreateInteractionResponseMessage::new()
            .embed(ui::panel_embed())
            .components(vec![ui::panel_buttons()]);

        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            error!("failed to send whitelist panel: {}", e);
        }
    }

    /// Button clicks: open the matching modal or reject with an ephemeral
    /// error.
    async fn handle_button(&self, ctx: &Context, component: &ComponentInteraction) {
        let user_id = component.user.id.to_string();

        let (outcome, modal) = match component.data.custom_id.as_str() {
            ui::WHITELIST_BUTTON_ID => (
                self.router.whitelist_button(&user_id).await,
                ui::whitelist_modal(),
            ),
            ui::RENAME_BUTTON_ID => (
                self.router.rename_button(&user_id).await,
                ui::rename_modal(),
            ),
            _ => return,
        };

        let response = match outcome {
            ButtonOutcome::OpenForm => CreateInteractionResponse::Modal(modal),
            ButtonOutcome::Reject(reply) => CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(reply)
                    .ephemeral(true),
            ),
        };

        if let Err(e) = component.create_response(&ctx.http, response).await {
            error!(
                "failed to respond to button {}: {}",
                component.data.custom_id, e
            );
        }
    }

    /// Modal submissions: defer an ephemeral reply, run the flow and edit
    /// the reply with the outcome.
    async fn handle_modal(&self, ctx: &Context, modal: &ModalInteraction) {
        let (field_id, rename) = match modal.data.custom_id.as_str() {
            ui::WHITELIST_MODAL_ID => (ui::WHITELIST_FIELD_ID, false),
            ui::RENAME_MODAL_ID => (ui::RENAME_FIELD_ID, true),
            _ => return,
        };

        // The field is marked required, so a missing value is a malformed
        // payload rather than a user mistake.
        let Some(submitted_name) = ui::input_value(&modal.data, field_id) else {
            error!(
                "modal {} submitted without field {}",
                modal.data.custom_id, field_id
            );
            return;
        };

        let defer =
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true));
        if let Err(e) = modal.create_response(&ctx.http, defer).await {
            error!("failed to defer reply to {}: {}", modal.data.custom_id, e);
            return;
        }

        let relay = ChannelRelay::new(ctx.http.clone(), self.relay_channel_id);
        let user_id = modal.user.id.to_string();

        let reply = if rename {
            self.router
                .submit_rename(&relay, &user_id, &submitted_name)
                .await
        } else {
            self.router
                .submit_whitelist(&relay, &user_id, &submitted_name)
                .await
        };

        if let Err(e) = modal
            .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
            .await
        {
            error!(
                "failed to edit deferred reply to {}: {}",
                modal.data.custom_id, e
            );
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("bot is online as {}", ready.user.name);
        registrar::register_commands(&ctx.http).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) if command.data.name == SETUP_COMMAND => {
                self.handle_setup(&ctx, &command).await;
            }
            Interaction::Component(component) => self.handle_button(&ctx, &component).await,
            Interaction::Modal(modal) => self.handle_modal(&ctx, &modal).await,
            // Everything else (pings, autocompletes, unknown commands) is
            // ignored.
            _ => {}
        }
    }
}
