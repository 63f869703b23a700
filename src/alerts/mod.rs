//! Alert management for the mining news feed.
//!
//! This module provides the alert lifecycle and the timed auto-post:
//!
//! - [`AlertItem`]: A news item with its draft post and lifecycle flags
//! - [`AlertStore`]: Owns the alerts and is the only mutation surface
//! - [`AutoPostController`]: Speed mode, turns post requests into cancelable countdowns
//! - [`AlertFeed`]: The store, the controller and the notices behind one interface
//! - [`AlertLoader`]: Seed alerts, built-in or read from a JSON file
//! - [`AlertFilter`]: Priority and category filters over the visible alerts
//!
//! # Architecture
//!
//! Alerts are kept in insertion order and never removed; dismissing hides them.
//! The [`AutoPostController`] owns at most one countdown and mutates the store
//! through the same operations as manual actions. Nothing here owns a timer:
//! the caller ticks the countdown once per second.
//!
//! # Example Usage
//!
//! ```
//! use minefeed::alerts::{AlertFeed, AlertLoader, PostRequest};
//! use minefeed::notifier::ConsoleNotifier;
//!
//! let mut feed = AlertFeed::new(AlertLoader::builtin(), true, ConsoleNotifier);
//!
//! // Speed mode: the post waits for a 10 seconds countdown
//! let request = feed.request_post(1).unwrap();
//! assert!(matches!(request, PostRequest::CountdownStarted(_)));
//!
//! // Changed our mind
//! feed.cancel_countdown();
//! assert!(!feed.get(1).unwrap().posted());
//! ```

mod alert;
mod alert_feed;
mod alert_filter;
mod alert_loader;
mod alert_store;
mod auto_post_controller;

pub use crate::alerts::alert::{AlertId, AlertItem, POST_TEXT_LIMIT, Priority};
pub use crate::alerts::alert_feed::AlertFeed;
pub use crate::alerts::alert_filter::AlertFilter;
pub use crate::alerts::alert_loader::AlertLoader;
pub use crate::alerts::alert_store::{AlertError, AlertStore};
pub use crate::alerts::auto_post_controller::{
    AutoPostController, COUNTDOWN_START, CountdownSession, PostRequest, TickOutcome,
};
