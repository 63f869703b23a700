//! The feed as seen by the user interface.
//!
//! This module provides the [`AlertFeed`] which bundles the [`AlertStore`], the
//! [`AutoPostController`] and a [`Notifier`] behind the operations the
//! interface calls.

use log::debug;

use crate::{
    alerts::{
        AlertError, AlertFilter, AlertId, AlertItem, AlertStore, AutoPostController,
        CountdownSession, PostRequest, TickOutcome,
    },
    notifier::{NoticeKind, Notifier},
};

/// Notice shown once an alert is posted.
pub const POSTED_NOTICE: &str = "Post sent! Your post has been published successfully.";
/// Notice shown once a draft post is edited.
pub const UPDATED_NOTICE: &str = "Post updated. Your changes have been saved.";
/// Notice shown once an alert is queued.
pub const SAVED_NOTICE: &str = "Saved for later. Alert added to your queue.";

/// Alert feed with speed mode and notices.
///
/// Every mutation goes through the store; the controller is the only owner
/// of the countdown. Notices are sent only for operations that succeeded.
///
/// # Thread Safety
///
/// The feed is not synchronized. Share it behind a single mutex so that
/// ticks and user actions are applied one at a time.
///
/// # Examples
///
/// ```
/// # use minefeed::alerts::{AlertFeed, AlertLoader};
/// # use minefeed::notifier::ConsoleNotifier;
/// let mut feed = AlertFeed::new(AlertLoader::builtin(), false, ConsoleNotifier);
/// feed.request_post(1).unwrap();
/// assert_eq!(feed.count_pending(), 1);
/// ```
pub struct AlertFeed<N: Notifier> {
    store: AlertStore,
    controller: AutoPostController,
    notifier: N,
}

impl<N: Notifier> AlertFeed<N> {
    /// Creates a feed seeded with `alerts`.
    ///
    /// # Arguments
    ///
    /// * `alerts` - Seed alerts, ids are reassigned in order starting at 1
    /// * `speed_mode` - Initial speed mode
    /// * `notifier` - Receiver of the notices
    pub fn new(alerts: Vec<AlertItem>, speed_mode: bool, notifier: N) -> Self {
        AlertFeed {
            store: AlertStore::new(alerts),
            controller: AutoPostController::new(speed_mode),
            notifier,
        }
    }

    pub fn get(&self, id: AlertId) -> Result<&AlertItem, AlertError> {
        self.store.get(id)
    }

    pub fn list_visible(&self) -> Vec<&AlertItem> {
        self.store.list_visible()
    }

    pub fn list_filtered(&self, filter: &AlertFilter) -> Vec<&AlertItem> {
        self.store.list_filtered(filter)
    }

    pub fn count_pending(&self) -> usize {
        self.store.count_pending()
    }

    pub fn speed_mode(&self) -> bool {
        self.controller.speed_mode()
    }

    pub fn set_speed_mode(&mut self, speed_mode: bool) {
        self.controller.set_speed_mode(speed_mode);
    }

    pub fn countdown(&self) -> Option<CountdownSession> {
        self.controller.countdown()
    }

    /// Posts an alert, or starts its countdown in speed mode.
    ///
    /// See [`AutoPostController::request_post`] for the error cases.
    pub fn request_post(&mut self, id: AlertId) -> Result<PostRequest, AlertError> {
        let request = self.controller.request_post(&mut self.store, id)?;
        if let PostRequest::Posted(_) = request {
            self.notifier.notify(NoticeKind::Success, POSTED_NOTICE);
        }
        Ok(request)
    }

    /// Advances the running countdown by one second.
    pub fn tick(&mut self) -> Result<TickOutcome, AlertError> {
        let outcome = self.controller.tick(&mut self.store)?;
        if let TickOutcome::Posted(_) = outcome {
            self.notifier.notify(NoticeKind::Success, POSTED_NOTICE);
        }
        Ok(outcome)
    }

    /// Cancels the running countdown. Calling it with no countdown is a no-op.
    pub fn cancel_countdown(&mut self) -> Option<CountdownSession> {
        self.controller.cancel()
    }

    /// Replaces the draft post of an alert that was not posted yet.
    pub fn update_text(&mut self, id: AlertId, new_text: &str) -> Result<(), AlertError> {
        self.store.update_text(id, new_text)?;
        self.notifier.notify(NoticeKind::Success, UPDATED_NOTICE);
        Ok(())
    }

    pub fn save_for_later(&mut self, id: AlertId) -> Result<(), AlertError> {
        self.store.mark_saved_for_later(id)?;
        self.notifier.notify(NoticeKind::Info, SAVED_NOTICE);
        Ok(())
    }

    /// Hides an alert from the feed. No notice is sent.
    pub fn dismiss(&mut self, id: AlertId) -> Result<(), AlertError> {
        debug!("dismissing alert {}", id);
        self.store.mark_dismissed(id)
    }
}
