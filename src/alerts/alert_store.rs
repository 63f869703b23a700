//! Authoritative storage of alert items.
//!
//! This module provides the [`AlertStore`], the only mutation surface for
//! [`AlertItem`] flags, and the [`AlertError`] kinds shared by the alert system.

use log::{info, warn};
use thiserror::Error;

use crate::alerts::{
    AlertFilter,
    alert::{AlertId, AlertItem},
};

/// Recoverable failures of alert operations.
///
/// None of them is fatal: callers surface them to the user and carry on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlertError {
    /// No alert with this id was ever stored.
    #[error("alert {0} not found")]
    NotFound(AlertId),
    /// The alert was already posted, its draft can no longer change.
    #[error("alert {0} has already been posted")]
    AlreadyPosted(AlertId),
    /// A countdown is already running for another post.
    #[error("a countdown is already running for alert {active}")]
    SessionBusy { active: AlertId },
}

/// Ordered collection of alerts keyed by their id.
///
/// Alerts are never removed: dismissing an alert only hides it from
/// [`AlertStore::list_visible`]. Insertion order is preserved and ids are
/// assigned by the store, so they stay unique for its whole lifetime.
///
/// # Examples
///
/// ```
/// # use minefeed::alerts::{AlertItem, AlertStore, Priority};
/// let mut store = AlertStore::default();
/// let id = store.insert(AlertItem::new(
///     Priority::Critical,
///     "SEC",
///     "2 min ago",
///     "SEC approves Bitcoin ETF application from BlackRock",
///     vec![],
///     "BREAKING: SEC approves BlackRock Bitcoin ETF",
///     "sec.gov",
/// ));
///
/// store.mark_saved_for_later(id).unwrap();
/// assert_eq!(store.count_pending(), 0);
/// ```
#[derive(Debug, Default)]
pub struct AlertStore {
    /// Alerts in insertion order
    alerts: Vec<AlertItem>,
    /// Next id to hand out
    next_id: AlertId,
}

impl AlertStore {
    /// Creates a store holding the given alerts, in order.
    ///
    /// Ids carried by the alerts are ignored and reassigned.
    pub fn new(alerts: Vec<AlertItem>) -> Self {
        let mut store = AlertStore::default();
        for alert in alerts {
            store.insert(alert);
        }
        store
    }

    /// Appends an alert and returns the id assigned to it.
    pub fn insert(&mut self, mut alert: AlertItem) -> AlertId {
        self.next_id += 1;
        alert.id = self.next_id;
        self.alerts.push(alert);
        self.next_id
    }

    /// Returns the alert with the given id, dismissed or not.
    pub fn get(&self, id: AlertId) -> Result<&AlertItem, AlertError> {
        self.alerts
            .iter()
            .find(|alert| alert.id == id)
            .ok_or(AlertError::NotFound(id))
    }

    fn get_mut(&mut self, id: AlertId) -> Result<&mut AlertItem, AlertError> {
        let alert = self.alerts.iter_mut().find(|alert| alert.id == id);
        if alert.is_none() {
            warn!("refused to update alert {}, not found", id);
        }
        alert.ok_or(AlertError::NotFound(id))
    }

    /// Returns every alert that has not been dismissed, in insertion order.
    pub fn list_visible(&self) -> Vec<&AlertItem> {
        self.alerts.iter().filter(|alert| !alert.dismissed).collect()
    }

    /// Returns the visible alerts accepted by `filter`, in insertion order.
    pub fn list_filtered(&self, filter: &AlertFilter) -> Vec<&AlertItem> {
        self.alerts
            .iter()
            .filter(|alert| !alert.dismissed && filter.matches(alert))
            .collect()
    }

    /// Number of visible alerts that are neither posted nor saved for later.
    ///
    /// This is the "new alerts" badge of the feed.
    pub fn count_pending(&self) -> usize {
        self.alerts
            .iter()
            .filter(|alert| !alert.dismissed && alert.is_pending())
            .count()
    }

    /// Marks an alert as posted.
    ///
    /// Marking an already posted alert again leaves it unchanged.
    pub fn mark_posted(&mut self, id: AlertId) -> Result<(), AlertError> {
        let alert = self.get_mut(id)?;
        alert.posted = true;
        info!("marked alert {} as posted", id);
        Ok(())
    }

    /// Hides an alert from the visible view. Idempotent.
    pub fn mark_dismissed(&mut self, id: AlertId) -> Result<(), AlertError> {
        let alert = self.get_mut(id)?;
        alert.dismissed = true;
        info!("dismissed alert {}", id);
        Ok(())
    }

    /// Queues an alert for later. Idempotent.
    pub fn mark_saved_for_later(&mut self, id: AlertId) -> Result<(), AlertError> {
        let alert = self.get_mut(id)?;
        alert.saved_for_later = true;
        info!("saved alert {} for later", id);
        Ok(())
    }

    /// Replaces the draft post of an alert.
    ///
    /// # Errors
    ///
    /// - [`AlertError::NotFound`] if the id is unknown
    /// - [`AlertError::AlreadyPosted`] if the alert was posted; the draft is left
    ///   untouched so that it keeps matching what was actually sent
    pub fn update_text(&mut self, id: AlertId, new_text: &str) -> Result<(), AlertError> {
        let alert = self.get_mut(id)?;
        if alert.posted {
            warn!("refused to edit alert {}, already posted", id);
            return Err(AlertError::AlreadyPosted(id));
        }

        alert.post_text = new_text.to_owned();
        if alert.is_over_limit() {
            warn!(
                "post of alert {} is {} characters long, over the advisory limit",
                id,
                alert.post_length()
            );
        }
        info!("updated post of alert {}", id);
        Ok(())
    }
}
