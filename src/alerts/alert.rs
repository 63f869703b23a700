//! Alert items surfaced in the mining news feed.
//!
//! This module provides the [`AlertItem`] struct, a single news item paired with
//! a draft social-media post, and the [`Priority`] it is ranked with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an alert, unique for the lifetime of an [`AlertStore`](crate::alerts::AlertStore).
pub type AlertId = u64;

/// Advisory maximum length of a post, in characters.
///
/// The limit is displayed next to the draft but never enforced.
pub const POST_TEXT_LIMIT: usize = 280;

/// Priority of an alert, from the most to the least urgent.
///
/// Variants are declared from lowest to highest so that the derived ordering
/// can be used for threshold filters (`priority >= Priority::High`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Parses a priority from its lowercase name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use minefeed::alerts::Priority;
    /// assert_eq!(Priority::parse("high"), Some(Priority::High));
    /// assert_eq!(Priority::parse("urgent"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

/// A news alert and the post drafted for it.
///
/// The three lifecycle flags (`posted`, `dismissed`, `saved_for_later`) only
/// ever move from `false` to `true`. Their fields are private so that the
/// [`AlertStore`](crate::alerts::AlertStore) is the only mutation surface.
///
/// # Examples
///
/// ```
/// # use minefeed::alerts::{AlertItem, Priority};
/// let alert = AlertItem::new(
///     Priority::High,
///     "Company",
///     "5 min ago",
///     "Marathon Digital increases hashrate by 15% in Q4",
///     vec!["Now at 25.2 EH/s".to_string()],
///     "Marathon Digital reports 15% hashrate increase",
///     "marathondigital.com",
/// );
/// assert!(!alert.posted());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertItem {
    /// Identifier assigned by the store on insertion.
    #[serde(default)]
    pub(crate) id: AlertId,
    /// Urgency of the news item
    pub priority: Priority,
    /// Short free-form label (SEC, Company, Hashrate...)
    pub category: String,
    /// Opaque display string, never parsed
    pub timestamp_label: String,
    /// Headline of the news item
    pub headline: String,
    /// Bullet points summarising the news
    pub key_points: Vec<String>,
    /// Draft post, editable until the alert is posted
    pub(crate) post_text: String,
    /// Provenance of the news (usually a domain)
    pub source_ref: String,
    #[serde(default)]
    pub(crate) posted: bool,
    #[serde(default)]
    pub(crate) dismissed: bool,
    #[serde(default)]
    pub(crate) saved_for_later: bool,
}

impl AlertItem {
    /// Creates a fresh alert with every lifecycle flag cleared.
    ///
    /// The id is left at `0` until the alert is inserted in a store.
    pub fn new(
        priority: Priority,
        category: &str,
        timestamp_label: &str,
        headline: &str,
        key_points: Vec<String>,
        post_text: &str,
        source_ref: &str,
    ) -> Self {
        AlertItem {
            id: 0,
            priority,
            category: category.to_owned(),
            timestamp_label: timestamp_label.to_owned(),
            headline: headline.to_owned(),
            key_points,
            post_text: post_text.to_owned(),
            source_ref: source_ref.to_owned(),
            posted: false,
            dismissed: false,
            saved_for_later: false,
        }
    }

    pub fn id(&self) -> AlertId {
        self.id
    }

    pub fn post_text(&self) -> &str {
        &self.post_text
    }

    pub fn posted(&self) -> bool {
        self.posted
    }

    pub fn dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn saved_for_later(&self) -> bool {
        self.saved_for_later
    }

    /// Whether the alert still waits for a decision (neither posted nor queued).
    pub fn is_pending(&self) -> bool {
        !self.posted && !self.saved_for_later
    }

    /// Length of the draft post in characters, as displayed next to the
    /// [`POST_TEXT_LIMIT`].
    pub fn post_length(&self) -> usize {
        self.post_text.chars().count()
    }

    /// Whether the draft post exceeds the advisory [`POST_TEXT_LIMIT`].
    pub fn is_over_limit(&self) -> bool {
        self.post_length() > POST_TEXT_LIMIT
    }
}
