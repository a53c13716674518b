//! Interaction routing over the store and relay seams.
//!
//! The [`Router`] implements the per-interaction state machine of the
//! whitelist panel. It is platform-free: it consumes user ids and submitted
//! field text, drives the registration store and the console relay, and
//! returns the reply strings the platform layer shows to the user. No state
//! is carried across interactions beyond the registry itself.

use log::{debug, error};
use tokio::sync::Mutex;

use crate::{
    interactions::{
        responses::{
            format_already_submitted, format_invalid_handle, format_not_whitelisted,
            format_relay_failure, format_renamed, format_whitelisted,
        },
        validation::is_valid_handle,
    },
    registry::RegistrationStore,
    relay::{Relay, add_command, remove_command},
};

/// Decision for a button click.
#[derive(Debug, PartialEq)]
pub enum ButtonOutcome {
    /// Show the corresponding modal to the user.
    OpenForm,
    /// Reply with an ephemeral error instead of a form.
    Reject(String),
}

/// Per-interaction router over the registration store and the console relay.
///
/// The store sits behind a mutex that is held across each read-modify-write,
/// so submissions arriving close together serialize instead of racing the
/// full-file rewrite.
pub struct Router<S: RegistrationStore> {
    store: Mutex<S>,
}

impl<S: RegistrationStore> Router<S> {
    /// Creates a router over an already-loaded store.
    pub fn new(store: S) -> Self {
        Router {
            store: Mutex::new(store),
        }
    }

    /// `open_whitelist_modal` button: first-time users get the form,
    /// registered users are pointed at the rename button.
    pub async fn whitelist_button(&self, user_id: &str) -> ButtonOutcome {
        match self.store.lock().await.get(user_id) {
            Some(_) => ButtonOutcome::Reject(format_already_submitted()),
            None => ButtonOutcome::OpenForm,
        }
    }

    /// `rename_whitelist_modal` button: only registered users get the form.
    pub async fn rename_button(&self, user_id: &str) -> ButtonOutcome {
        match self.store.lock().await.get(user_id) {
            Some(_) => ButtonOutcome::OpenForm,
            None => ButtonOutcome::Reject(format_not_whitelisted()),
        }
    }

    /// `submit_whitelist` modal: validate the submitted name, relay the add
    /// command and record the registration.
    ///
    /// Returns the text for the deferred ephemeral reply. The registry is
    /// only written once the relay send succeeded.
    pub async fn submit_whitelist<R: Relay>(
        &self,
        relay: &R,
        user_id: &str,
        submitted_name: &str,
    ) -> String {
        let handle = submitted_name.trim();
        if !is_valid_handle(handle) {
            debug!("rejected whitelist submission from {}: invalid handle", user_id);
            return format_invalid_handle();
        }

        let mut store = self.store.lock().await;

        if let Err(e) = relay.send_line(&add_command(handle)).await {
            error!("failed to relay whitelist command for {}: {}", user_id, e);
            return format_relay_failure();
        }

        store.set(user_id, handle);
        store.persist().await;

        format_whitelisted(handle)
    }

    /// `rename_whitelist` modal: validate the submitted name, relay removal
    /// of the old handle then addition of the new one, and record the new
    /// handle.
    ///
    /// The two relay sends are not transactional. If the add fails after the
    /// remove went through, the registry keeps the old handle and the error
    /// log flags the external whitelist for manual reconciliation.
    pub async fn submit_rename<R: Relay>(
        &self,
        relay: &R,
        user_id: &str,
        submitted_name: &str,
    ) -> String {
        let new_handle = submitted_name.trim();
        if !is_valid_handle(new_handle) {
            debug!("rejected rename submission from {}: invalid handle", user_id);
            return format_invalid_handle();
        }

        let mut store = self.store.lock().await;

        // The button already checked, but the modal can be submitted after
        // the registry changed under it.
        let Some(old_handle) = store.get(user_id) else {
            return format_not_whitelisted();
        };

        if let Err(e) = relay.send_line(&remove_command(&old_handle)).await {
            error!(
                "failed to relay removal of {} for {}: {}",
                old_handle, user_id, e
            );
            return format_relay_failure();
        }

        if let Err(e) = relay.send_line(&add_command(new_handle)).await {
            error!(
                "relay out of sync for {}: removed {} but failed to add {}, manual reconciliation required: {}",
                user_id, old_handle, new_handle, e
            );
            return format_relay_failure();
        }

        store.set(user_id, new_handle);
        store.persist().await;

        format_renamed(&old_handle, new_handle)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::registry::MockRegistrationStore;
    use crate::relay::MockRelay;

    const USER: &str = "111111111111111111";

    #[tokio::test]
    async fn test_whitelist_button_opens_form_for_new_user() {
        let mut store = MockRegistrationStore::new();
        store.expect_get().returning(|_| None);

        let router = Router::new(store);

        assert_eq!(
            router.whitelist_button(USER).await,
            ButtonOutcome::OpenForm
        );
    }

    #[tokio::test]
    async fn test_whitelist_button_rejects_registered_user() {
        let mut store = MockRegistrationStore::new();
        store
            .expect_get()
            .withf(|user_id| user_id == USER)
            .returning(|_| Some("NeonPlayz".to_owned()));

        let router = Router::new(store);

        assert_eq!(
            router.whitelist_button(USER).await,
            ButtonOutcome::Reject(format_already_submitted())
        );
    }

    #[tokio::test]
    async fn test_rename_button_opens_form_for_registered_user() {
        let mut store = MockRegistrationStore::new();
        store
            .expect_get()
            .returning(|_| Some("NeonPlayz".to_owned()));

        let router = Router::new(store);

        assert_eq!(router.rename_button(USER).await, ButtonOutcome::OpenForm);
    }

    #[tokio::test]
    async fn test_rename_button_rejects_unregistered_user() {
        let mut store = MockRegistrationStore::new();
        store.expect_get().returning(|_| None);

        let router = Router::new(store);

        assert_eq!(
            router.rename_button(USER).await,
            ButtonOutcome::Reject(format_not_whitelisted())
        );
    }

    #[tokio::test]
    async fn test_submit_whitelist_relays_and_records() {
        let mut store = MockRegistrationStore::new();
        store
            .expect_set()
            .withf(|user_id, handle| user_id == USER && handle == "Steve123")
            .times(1)
            .returning(|_, _| ());
        store.expect_persist().times(1).returning(|| ());

        let mut relay = MockRelay::new();
        relay
            .expect_send_line()
            .withf(|line| line == "twl add Steve123 permanent")
            .times(1)
            .returning(|_| Ok(()));

        let router = Router::new(store);
        let reply = router.submit_whitelist(&relay, USER, "Steve123").await;

        assert_eq!(reply, format_whitelisted("Steve123"));
    }

    #[tokio::test]
    async fn test_submit_whitelist_trims_surrounding_whitespace() {
        let mut store = MockRegistrationStore::new();
        store
            .expect_set()
            .withf(|_, handle| handle == "Steve123")
            .times(1)
            .returning(|_, _| ());
        store.expect_persist().times(1).returning(|| ());

        let mut relay = MockRelay::new();
        relay
            .expect_send_line()
            .withf(|line| line == "twl add Steve123 permanent")
            .times(1)
            .returning(|_| Ok(()));

        let router = Router::new(store);
        let reply = router.submit_whitelist(&relay, USER, "  Steve123  ").await;

        assert_eq!(reply, format_whitelisted("Steve123"));
    }

    #[tokio::test]
    async fn test_submit_whitelist_invalid_handle_touches_nothing() {
        // No expectations: any store or relay call panics the test.
        let store = MockRegistrationStore::new();
        let relay = MockRelay::new();

        let router = Router::new(store);
        let reply = router.submit_whitelist(&relay, USER, "bad name").await;

        assert_eq!(reply, format_invalid_handle());
    }

    #[tokio::test]
    async fn test_submit_whitelist_relay_failure_skips_the_write() {
        // No set/persist expectations: a write after a failed relay send
        // panics the test.
        let store = MockRegistrationStore::new();

        let mut relay = MockRelay::new();
        relay
            .expect_send_line()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("channel unavailable")));

        let router = Router::new(store);
        let reply = router.submit_whitelist(&relay, USER, "Steve123").await;

        assert_eq!(reply, format_relay_failure());
    }

    #[tokio::test]
    async fn test_submit_rename_relays_remove_then_add_in_order() {
        let mut store = MockRegistrationStore::new();
        store
            .expect_get()
            .withf(|user_id| user_id == USER)
            .returning(|_| Some("Old".to_owned()));
        store
            .expect_set()
            .withf(|user_id, handle| user_id == USER && handle == "New")
            .times(1)
            .returning(|_, _| ());
        store.expect_persist().times(1).returning(|| ());

        let mut seq = Sequence::new();
        let mut relay = MockRelay::new();
        relay
            .expect_send_line()
            .withf(|line| line == "twl remove Old")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        relay
            .expect_send_line()
            .withf(|line| line == "twl add New permanent")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let router = Router::new(store);
        let reply = router.submit_rename(&relay, USER, "New").await;

        assert_eq!(reply, format_renamed("Old", "New"));
    }

    #[tokio::test]
    async fn test_submit_rename_without_registration_touches_nothing() {
        let mut store = MockRegistrationStore::new();
        store.expect_get().returning(|_| None);

        let relay = MockRelay::new();

        let router = Router::new(store);
        let reply = router.submit_rename(&relay, USER, "New").await;

        assert_eq!(reply, format_not_whitelisted());
    }

    #[tokio::test]
    async fn test_submit_rename_invalid_handle_touches_nothing() {
        let store = MockRegistrationStore::new();
        let relay = MockRelay::new();

        let router = Router::new(store);
        let reply = router.submit_rename(&relay, USER, "this_name_is_too_long_1").await;

        assert_eq!(reply, format_invalid_handle());
    }

    #[tokio::test]
    async fn test_submit_rename_remove_failure_skips_add_and_write() {
        let mut store = MockRegistrationStore::new();
        store
            .expect_get()
            .returning(|_| Some("Old".to_owned()));

        let mut relay = MockRelay::new();
        relay
            .expect_send_line()
            .withf(|line| line == "twl remove Old")
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("channel unavailable")));

        let router = Router::new(store);
        let reply = router.submit_rename(&relay, USER, "New").await;

        assert_eq!(reply, format_relay_failure());
    }

    #[tokio::test]
    async fn test_submit_rename_add_failure_keeps_old_registration() {
        // get is expected, set/persist are not: the registry must keep the
        // old handle when the add never reached the console.
        let mut store = MockRegistrationStore::new();
        store
            .expect_get()
            .returning(|_| Some("Old".to_owned()));

        let mut seq = Sequence::new();
        let mut relay = MockRelay::new();
        relay
            .expect_send_line()
            .withf(|line| line == "twl remove Old")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        relay
            .expect_send_line()
            .withf(|line| line == "twl add New permanent")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(anyhow::anyhow!("channel unavailable")));

        let router = Router::new(store);
        let reply = router.submit_rename(&relay, USER, "New").await;

        assert_eq!(reply, format_relay_failure());
    }
}
