//! Reply text for interaction responses.
//!
//! Everything the bot says back to a user ends up here, so wording lives in
//! one place. All of these are sent as ephemeral replies.

/// Error shown when an already-registered user clicks the whitelist button.
pub fn format_already_submitted() -> String {
    "❌ You already submitted a name. Use Rename option.".to_owned()
}

/// Error shown when an unregistered user tries to rename.
pub fn format_not_whitelisted() -> String {
    "❌ You haven't whitelisted yet. Use the whitelist button first.".to_owned()
}

/// Error shown when the submitted username fails validation.
pub fn format_invalid_handle() -> String {
    "❌ Invalid Minecraft username!".to_owned()
}

/// Success reply after a first-time whitelist submission.
pub fn format_whitelisted(handle: &str) -> String {
    format!(
        "✅ Whitelisted as `{}`. Use the rename button to update.",
        handle
    )
}

/// Success reply after a rename.
pub fn format_renamed(old_handle: &str, new_handle: &str) -> String {
    format!(
        "♻ Updated username from `{}` to `{}`.",
        old_handle, new_handle
    )
}

/// Error shown when the console channel could not be reached. The local
/// registry is never changed when this is returned.
pub fn format_relay_failure() -> String {
    "⚠️ Could not reach the server console. Please try again later.".to_owned()
}
