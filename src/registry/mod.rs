//! Whitelist registration registry.
//!
//! Tracks which Discord user registered which Minecraft handle. The registry
//! holds at most one handle per user: a first-time submission creates the
//! entry, a rename overwrites it, and nothing ever deletes it.
//!
//! The [`RegistrationStore`] trait is the storage interface handed to the
//! interaction router; [`JsonFileStore`] is the flat-file production
//! implementation. Tests run against the generated `MockRegistrationStore`
//! and never touch the filesystem.

mod store;

pub use crate::registry::store::{JsonFileStore, MockRegistrationStore, RegistrationStore};
