//! Command action handlers.
//!
//! Individual handler functions for each feed command. Each handler receives a
//! [`CommandContext`](crate::commands::CommandContext), runs the operation on
//! the feed and returns a [`CommandResult`](crate::commands::CommandResult).
//!
//! # Handler Pattern
//!
//! 1. Receive the context with the feed and the performance tracker
//! 2. Run the feed operation
//! 3. Return a text response and the countdown change, if any
//!
//! Rejected operations are not errors at this level: the reason is reported in
//! the response and the feed is left unchanged.
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Display help information
//! - [`handle_list`] - List the visible alerts
//! - [`handle_status`] - Show speed mode and the countdown
//! - [`handle_post`] - Post an alert or start its countdown
//! - [`handle_cancel`] - Cancel the countdown
//! - [`handle_edit`] - Replace a draft post
//! - [`handle_save`] - Queue an alert for later
//! - [`handle_dismiss`] - Hide an alert
//! - [`handle_speed`] - Toggle speed mode
//! - [`handle_stats`] - Show the performance figures

mod help;
mod list;
mod manage;
mod post;
mod speed;
mod stats;

pub use crate::commands::actions::{
    help::handle_help,
    list::{handle_list, handle_status},
    manage::{handle_dismiss, handle_edit, handle_save},
    post::{handle_cancel, handle_post},
    speed::handle_speed,
    stats::handle_stats,
};
