//! Terminal command parsing and response formatting.
//!
//! This module provides the command processing pipeline of the dashboard,
//! turning the lines typed in the terminal into feed operations.
//!
//! # Overview
//!
//! 1. **Parsing** - Converting a line into a structured [`command::Command`]
//! 2. **Validation** - Ensuring ids and values are well formed
//! 3. **Execution** - Routing commands to their handlers
//! 4. **Response** - Formatting results as plain text
//!
//! # Architecture
//!
//! ```text
//! Terminal line
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + execute()
//! └─────────────┘
//!      │
//!      ├── parse() ──────────► command::Command
//!      │
//!      └── execute() ────────► Action Handlers
//!                               - handle_help
//!                               - handle_list / handle_status
//!                               - handle_post / handle_cancel
//!                               - handle_edit / handle_save / handle_dismiss
//!                               - handle_speed
//!                               - handle_stats
//!                                     │
//!                                     ▼
//!                               CommandResult
//!                               - response (text)
//!                               - countdown change
//! ```
//!
//! # Command Structure
//!
//! All commands follow the format: `!feed <subcommand> [args...]`
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `help` | None | Display help information |
//! | `list` | `[priority] [category...]` | List the visible alerts |
//! | `post` | `<id>` | Post an alert, or start its countdown in speed mode |
//! | `cancel` | None | Cancel the running countdown |
//! | `edit` | `<id> <text>` | Replace the draft post of an alert |
//! | `save` | `<id>` | Queue an alert for later |
//! | `dismiss` | `<id>` | Hide an alert |
//! | `speed` | `on\|off` | Turn speed mode on or off |
//! | `status` | None | Show speed mode and the countdown |
//! | `stats` | None | Show the performance figures |
//!
//! # Error Handling
//!
//! - **Silent Errors** ([`CommandParseError::NotForFeed`]): Lines that aren't
//!   feed commands. These produce no response.
//! - **User Errors** ([`CommandParseError::InvalidCommand`]): Invalid syntax or
//!   arguments, with a message for the user.
//!
//! Rejected feed operations (unknown id, posted alert, busy countdown) are not
//! parse errors: they are reported in the [`CommandResult`] response.

pub mod actions;
pub mod command;
mod commander;
pub mod text_response;

pub use crate::commands::commander::Commander;
use crate::{alerts::AlertFeed, metrics::PerformanceTracker, notifier::Notifier};

/// Runtime context for command execution.
///
/// Handlers mutate the feed and the tracker directly; the caller is expected
/// to hold their locks for the whole execution.
///
/// # Fields
///
/// * `feed` - The alert feed with its countdown
/// * `tracker` - Performance figures, updated when a post goes out
pub struct CommandContext<'a, N: Notifier> {
    pub feed: &'a mut AlertFeed<N>,
    pub tracker: &'a mut PerformanceTracker,
}

/// Change of the countdown requested by a command.
///
/// The caller owns the one second ticker and starts or stops it accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownChange {
    /// A countdown started, the ticker must run
    Started,
    /// The countdown was cancelled, the ticker must stop
    Cancelled,
}

/// Result of command execution.
///
/// # Examples
///
/// ```
/// # use minefeed::commands::CommandResult;
/// let result = CommandResult {
///     response: "No countdown to cancel.".to_string(),
///     countdown_change: None,
/// };
/// ```
#[derive(Debug)]
pub struct CommandResult {
    /// Text response for the terminal
    pub response: String,
    /// Optional change of the countdown ticker
    pub countdown_change: Option<CountdownChange>,
}

impl CommandResult {
    /// A result with a response only.
    pub fn text(response: String) -> Self {
        CommandResult {
            response,
            countdown_change: None,
        }
    }
}

/// Errors that can occur during command parsing.
///
/// # Variants
///
/// * `NotForFeed` - The line is not a feed command, it is ignored.
/// * `InvalidCommand` - Syntax or arguments are invalid, with a message for the user.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    /// Line is not a feed command (silent error)
    NotForFeed,
    /// Invalid command syntax with error message
    InvalidCommand(String),
}
