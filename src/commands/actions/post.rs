//! Post and cancel command handlers.
//!
//! Posting goes through the auto-post controller: with speed mode off the
//! alert is posted right away and tracked, otherwise a countdown starts and
//! the caller ticks it until it posts or is cancelled.

use log::{debug, info};

use crate::{
    alerts::{AlertId, PostRequest},
    commands::{
        CommandContext, CommandResult, CountdownChange,
        text_response::{
            format_alert_error, format_countdown_cancelled, format_countdown_started,
            format_posted,
        },
    },
    notifier::Notifier,
};

/// Posts an alert, or starts its countdown in speed mode.
///
/// # Returns
///
/// - Posted right away: a confirmation, the post is added to the tracker
/// - Countdown started: [`CountdownChange::Started`] so the ticker runs
/// - Rejected: the reason, nothing changes
pub fn handle_post<N: Notifier>(context: &mut CommandContext<'_, N>, id: AlertId) -> CommandResult {
    debug!("handling post command for alert {}", id);

    match context.feed.request_post(id) {
        Ok(PostRequest::Posted(id)) => {
            if let Ok(alert) = context.feed.get(id) {
                context.tracker.track_post(alert.post_text());
            }
            CommandResult::text(format_posted(id))
        }
        Ok(PostRequest::CountdownStarted(session)) => {
            info!("countdown started for alert {}", session.target_alert_id);
            CommandResult {
                response: format_countdown_started(&session),
                countdown_change: Some(CountdownChange::Started),
            }
        }
        Err(e) => CommandResult::text(format_alert_error(&e)),
    }
}

/// Cancels the running countdown. Nothing is posted.
pub fn handle_cancel<N: Notifier>(context: &mut CommandContext<'_, N>) -> CommandResult {
    debug!("handling cancel command");

    let cancelled = context.feed.cancel_countdown();
    CommandResult {
        response: format_countdown_cancelled(cancelled),
        countdown_change: cancelled.map(|_| CountdownChange::Cancelled),
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

    fn create_test_feed(speed_mode: bool, posted_notices: usize) -> AlertFeed<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|kind, _| *kind == NoticeKind::Success)
            .times(posted_notices)
            .return_const(());
        AlertFeed::new(AlertLoader::builtin(), speed_mode, notifier)
    }

    #[test]
    fn test_handle_post_immediately() {
        let mut feed = create_test_feed(false, 1);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_post(&mut context, 1);

        assert_eq!(result.response, format_posted(1));
        assert!(result.countdown_change.is_none());
        assert!(feed.get(1).unwrap().posted());
        assert_eq!(tracker.data().recent_posts.len(), 4);
        assert!(tracker.data().recent_posts[0].content.starts_with("BREAKING"));
    }

    #[test]
    fn test_handle_post_speed_mode() {
        let mut feed = create_test_feed(true, 0);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_post(&mut context, 2);

        assert_eq!(result.countdown_change, Some(CountdownChange::Started));
        assert!(result.response.contains("alert #2 in 10"));
        assert!(!feed.get(2).unwrap().posted());
        assert_eq!(tracker.data().recent_posts.len(), 3);
    }

    #[test]
    fn test_handle_post_rejected() {
        let mut feed = create_test_feed(false, 0);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let unknown = handle_post(&mut context, 42);
        let posted = handle_post(&mut context, 3);

        assert!(unknown.response.contains("alert 42 not found"));
        assert!(posted.response.contains("alert 3 has already been posted"));
        assert!(unknown.countdown_change.is_none());
        assert_eq!(tracker.data().recent_posts.len(), 3);
    }

    #[test]
    fn test_handle_post_while_counting_is_busy() {
        let mut feed = create_test_feed(true, 0);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        handle_post(&mut context, 1);
        let result = handle_post(&mut context, 2);

        assert!(result.response.contains("already running for alert 1"));
        assert!(result.countdown_change.is_none());
        assert_eq!(feed.countdown().unwrap().target_alert_id, 1);
    }

    #[test]
    fn test_handle_cancel() {
        let mut feed = create_test_feed(true, 0);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        handle_post(&mut context, 1);
        let result = handle_cancel(&mut context);

        assert_eq!(result.countdown_change, Some(CountdownChange::Cancelled));
        assert!(feed.countdown().is_none());
        assert!(!feed.get(1).unwrap().posted());
    }

    #[test]
    fn test_handle_cancel_without_countdown() {
        let mut feed = create_test_feed(true, 0);
        let mut tracker = PerformanceTracker::new(Some(1));
        let mut context = CommandContext {
            feed: &mut feed,
            tracker: &mut tracker,
        };

        let result = handle_cancel(&mut context);

        assert_eq!(result.response, "No countdown to cancel.");
        assert!(result.countdown_change.is_none());
    }
}
