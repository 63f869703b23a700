//! Feed listing command handlers.
//!
//! Read-only views over the feed: the alert cards and the countdown status.

use log::debug;

use crate::{
    alerts::{AlertFilter, Priority},
    commands::{
        CommandContext, CommandResult,
        text_response::{format_feed, format_status},
    },
    notifier::Notifier,
};

/// Lists the visible alerts, newest first as seeded.
///
/// # Arguments
///
/// * `min_priority` - Lowest priority to show, all when `None`
/// * `categories` - Categories to show, all when empty
pub fn handle_list<N: Notifier>(
    context: &CommandContext<'_, N>,
    min_priority: Option<Priority>,
    categories: &[String],
) -> CommandResult {
    debug!(
        "handling list command, min priority {:?}, categories {:?}",
        min_priority, categories
    );

    let mut filter = AlertFilter::default();
    if let Some(min_priority) = min_priority {
        filter = filter.with_min_priority(min_priority);
    }
    if !categories.is_empty() {
        filter = filter.with_categories(categories);
    }

    let feed = &context.feed;
    let alerts = feed.list_filtered(&filter);

    CommandResult::text(format_feed(
        &alerts,
        feed.count_pending(),
        feed.speed_mode(),
    ))
}

pub fn handle_status<N: Notifier>(context: &CommandContext<'_, N>) -> CommandResult {
    debug!("handling status command");

    CommandResult::text(format_status(
        context.feed.speed_mode(),
        context.feed.countdown(),
    ))
}
