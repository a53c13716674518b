//! Registration persistence: storage trait plus the flat-file implementation.
//!
//! The whole registry is a single JSON object on disk (user id -> handle),
//! read once at startup and rewritten in full on every mutation.

use std::collections::HashMap;

use log::{debug, error, info, warn};
use mockall::automock;
use tokio::fs;

/// Storage interface for whitelist registrations.
///
/// The interaction router only talks to this trait, so unit tests exercise
/// the flows against `MockRegistrationStore` without real file I/O.
#[automock]
pub trait RegistrationStore {
    /// Returns the handle registered by the user, if any.
    fn get(&self, user_id: &str) -> Option<String>;
    /// Inserts or overwrites the handle for the user.
    fn set(&mut self, user_id: &str, handle: &str);
    /// Snapshot of the whole registration map.
    fn load_all(&self) -> HashMap<String, String>;
    /// Rewrites the backing storage with the current map.
    async fn persist(&self);
}

/// Flat-file registration store.
///
/// Keeps the registrations in memory as the source of truth while running and
/// mirrors them to one pretty-printed JSON file. Loading is fault-tolerant:
/// a missing or corrupted file yields an empty registry so the bot always
/// starts.
pub struct JsonFileStore {
    /// Path to the JSON file where registrations are stored.
    path: String,
    /// In-memory registration map.
    registrations: HashMap<String, String>,
}

impl JsonFileStore {
    /// Loads the store from disk.
    ///
    /// A missing file is the normal first-run case. An unparsable file is
    /// logged as an error; both cases fall back to an empty registry.
    pub async fn load(path: String) -> Self {
        let Ok(raw) = fs::read_to_string(&path).await else {
            warn!("no persisted registrations found, starting with an empty registry");
            return JsonFileStore {
                path,
                registrations: HashMap::new(),
            };
        };

        let Ok(registrations) = serde_json::from_str::<HashMap<String, String>>(&raw) else {
            error!("failed to deserialize persisted registrations, starting with an empty registry");
            return JsonFileStore {
                path,
                registrations: HashMap::new(),
            };
        };

        info!("loaded {} persisted registrations", registrations.len());

        JsonFileStore {
            path,
            registrations,
        }
    }
}

impl RegistrationStore for JsonFileStore {
    fn get(&self, user_id: &str) -> Option<String> {
        self.registrations.get(user_id).cloned()
    }

    fn set(&mut self, user_id: &str, handle: &str) {
        self.registrations
            .insert(user_id.to_owned(), handle.to_owned());
    }

    fn load_all(&self) -> HashMap<String, String> {
        self.registrations.clone()
    }

    /// Full-file rewrite, no atomic rename. A crash mid-write can corrupt the
    /// file; accepted for this single-process registry. Serialization or
    /// write failures are logged and swallowed so the bot keeps operating.
    async fn persist(&self) {
        let serialized = match serde_json::to_string_pretty(&self.registrations) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!("failed to serialize registrations: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, &serialized).await {
            error!("failed to persist registrations: {}", e);
            return;
        }

        debug!("persisted {} registrations", self.registrations.len());
    }
}
