//! Interaction routing, validation and reply text.
//!
//! This module implements the whitelist flows independently of the platform
//! SDK: the [`Router`] consumes user ids and submitted field text, decides
//! what happens against the registration store and the console relay, and
//! returns the reply strings. The `discord` module translates gateway events
//! into router calls and router outcomes back into interaction responses.
//!
//! # Flows
//!
//! ```text
//! whitelist button ─┬─ no registration ──→ open the whitelist modal
//!                   └─ registered ───────→ "already submitted" ephemeral
//!
//! rename button ────┬─ registered ───────→ open the rename modal
//!                   └─ no registration ──→ "not whitelisted" ephemeral
//!
//! modal submit ──→ trim + validate ──→ relay console line(s)
//!                                  ──→ write registry ──→ success reply
//! ```

mod responses;
mod router;
mod validation;

pub use crate::interactions::router::{ButtonOutcome, Router};
