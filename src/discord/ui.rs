//! Builders for the whitelist panel and its modals.
//!
//! The custom ids below are wire values: Discord echoes them back inside
//! interaction events and the handler dispatches on them.

use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed, CreateInputText, CreateModal};
use serenity::model::application::{
    ActionRowComponent, ButtonStyle, InputTextStyle, ModalInteractionData,
};

/// Custom id of the first-time whitelist button.
pub const WHITELIST_BUTTON_ID: &str = "open_whitelist_modal";
/// Custom id of the rename button.
pub const RENAME_BUTTON_ID: &str = "rename_whitelist_modal";
/// Custom id of the first-time whitelist modal.
pub const WHITELIST_MODAL_ID: &str = "submit_whitelist";
/// Custom id of the rename modal.
pub const RENAME_MODAL_ID: &str = "rename_whitelist";
/// Field id of the username input in the whitelist modal.
pub const WHITELIST_FIELD_ID: &str = "mc_name";
/// Field id of the username input in the rename modal.
pub const RENAME_FIELD_ID: &str = "new_mc_name";

/// Embed posted by `/setup`.
pub fn panel_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("🧾 Whitelist Panel")
        .description("Click to whitelist or rename your Minecraft name on **Nine SMP** server!")
        .color(0x00FFAA)
}

/// Button row shown under the panel embed.
pub fn panel_buttons() -> CreateActionRow {
    let whitelist_button = CreateButton::new(WHITELIST_BUTTON_ID)
        .label("🎮 Click to Whitelist")
        .style(ButtonStyle::Success);

    let rename_button = CreateButton::new(RENAME_BUTTON_ID)
        .label("♻ Rename Username")
        .style(ButtonStyle::Primary);

    CreateActionRow::Buttons(vec![whitelist_button, rename_button])
}

/// Modal collecting the first Minecraft username.
pub fn whitelist_modal() -> CreateModal {
    let input = CreateInputText::new(
        InputTextStyle::Short,
        "Enter your Minecraft username",
        WHITELIST_FIELD_ID,
    )
    .placeholder("e.g. NeonPlayz")
    .required(true);

    CreateModal::new(WHITELIST_MODAL_ID, "Minecraft Whitelist")
        .components(vec![CreateActionRow::InputText(input)])
}

/// Modal collecting the replacement username.
pub fn rename_modal() -> CreateModal {
    let input = CreateInputText::new(
        InputTextStyle::Short,
        "Enter your NEW Minecraft username",
        RENAME_FIELD_ID,
    )
    .placeholder("e.g. NewName")
    .required(true);

    CreateModal::new(RENAME_MODAL_ID, "Rename Minecraft Username")
        .components(vec![CreateActionRow::InputText(input)])
}

/// Extracts the value of a text input from submitted modal data.
pub fn input_value(data: &ModalInteractionData, field_id: &str) -> Option<String> {
    data.components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == field_id => {
                input.value.clone()
            }
            _ => None,
        })
}
