//! User-facing notices emitted by the feed.
//!
//! The feed reports completed actions through the [`Notifier`] trait, a
//! fire-and-forget seam that never blocks nor fails.

use std::fmt;

use log::info;
use mockall::automock;

/// Kind of notice, used to style it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::Success => write!(f, "✓"),
            NoticeKind::Info => write!(f, "i"),
        }
    }
}

/// Receives notices about completed feed actions.
///
/// This trait abstracts the notice display for easier testing with mocks.
#[automock]
pub trait Notifier: Send {
    /// Shows a notice to the user.
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Notifier printing notices on the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        info!("notice: {}", message);
        println!("[{}] {}", kind, message);
    }
}
