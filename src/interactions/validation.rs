//! Minecraft handle validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a well-formed Minecraft username: an optional leading dot
/// (Bedrock accounts joining through Geyser carry one), then 3 to 16
/// alphanumeric or underscore characters.
static HANDLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.?[A-Za-z0-9_]{3,16}$").unwrap());

/// Returns `true` if `handle` is a well-formed Minecraft username.
///
/// The caller trims surrounding whitespace before validating. Handles are not
/// checked for uniqueness across users; the same username may be registered
/// by several Discord accounts.
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_PATTERN.is_match(handle)
}
