//! Alert management command handlers: edit, save for later and dismiss.

use log::debug;

use crate::{
    alerts::{AlertId, POST_TEXT_LIMIT},
    commands::{
        CommandContext, CommandResult,
        text_response::{format_alert_error, format_dismissed, format_saved, format_updated},
    },
    notifier::Notifier,
};

/// Replaces the draft post of an alert.
///
/// Texts over [`POST_TEXT_LIMIT`] characters are accepted, the response
/// tells the user about it.
pub fn handle_edit<N: Notifier>(
    context: &mut CommandContext<'_, N>,
    id: AlertId,
    text: &str,
) -> CommandResult {
    debug!("handling edit command for alert {}", id);

    if let Err(e) = context.feed.update_text(id, text) {
        return CommandResult::text(format_alert_error(&e));
    }

    let mut response = format_updated(id);
    if let Ok(alert) = context.feed.get(id)
        && alert.is_over_limit()
    {
        response.push_str(&format!(
            " It is {} characters long, over the {} characters limit.",
            alert.post_length(),
            POST_TEXT_LIMIT
        ));
    }

    CommandResult::text(response)
}

pub fn handle_save<N: Notifier>(context: &mut CommandContext<'_, N>, id: AlertId) -> CommandResult {
    debug!("handling save command for alert {}", id);

    match context.feed.save_for_later(id) {
        Ok(()) => CommandResult::text(format_saved(id)),
        Err(e) => CommandResult::text(format_alert_error(&e)),
    }
}

/// Hides an alert. Dismissing the countdown's target does not stop it.
pub fn handle_dismiss<N: Notifier>(
    context: &mut CommandContext<'_, N>,
    id: AlertId,
) -> CommandResult {
    debug!("handling dismiss command for alert {}", id);

    match context.feed.dismiss(id) {
        Ok(()) => CommandResult::text(format_dismissed(id)),
        Err(e) => CommandResult::text(format_alert_error(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alerts::{AlertFeed, AlertLoader},
        metrics::PerformanceTracker,
        notifier::{MockNotifier, NoticeKind},
    };

    fn create_test_feed(notifier: MockNotifier) -> AlertFeed<MockNotifier> {
        AlertFeed::new(AlertLoader::builtin(), false, notifier)
    }

    #[test]
    fn test_handle_edit() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|kind, message| {
                *kind == NoticeKind::Success && message.starts_with("Post updated")
            })
            .times(1)
            .return_const(());
        let mut feed = create_test_feed(notifier);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_edit(&mut context, 1, "IBIT approved");

        assert_eq!(result.response, format_updated(1));
        assert_eq!(feed.get(1).unwrap().post_text(), "IBIT approved");
    }

    #[test]
    fn test_handle_edit_over_limit() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(1).return_const(());
        let mut feed = create_test_feed(notifier);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_edit(&mut context, 2, &"x".repeat(281));

        assert!(result.response.contains("281 characters long"));
        assert_eq!(feed.get(2).unwrap().post_length(), 281);
    }

    #[test]
    fn test_handle_edit_posted_alert() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);
        let mut feed = create_test_feed(notifier);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_edit(&mut context, 3, "too late");

        assert!(result.response.contains("already been posted"));
        assert_ne!(feed.get(3).unwrap().post_text(), "too late");
    }

    #[test]
    fn test_handle_save() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|kind, message| {
                *kind == NoticeKind::Info && message.starts_with("Saved for later")
            })
            .times(1)
            .return_const(());
        let mut feed = create_test_feed(notifier);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_save(&mut context, 2);

        assert_eq!(result.response, format_saved(2));
        assert!(feed.get(2).unwrap().saved_for_later());
        // Queued alerts no longer count as new, only #1 is left
        assert_eq!(feed.count_pending(), 1);
    }

    #[test]
    fn test_handle_dismiss_is_silent() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);
        let mut feed = create_test_feed(notifier);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_dismiss(&mut context, 1);

        assert_eq!(result.response, format_dismissed(1));
        assert_eq!(feed.list_visible().len(), 2);
        assert_eq!(feed.count_pending(), 1);
    }

    #[test]
    fn test_handle_dismiss_unknown_alert() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);
        let mut feed = create_test_feed(notifier);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_dismiss(&mut context, 9);

        assert!(result.response.contains("alert 9 not found"));
    }
}
