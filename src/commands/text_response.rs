//! Text response formatters for feed commands.
//!
//! This module provides the functions rendering feed state and command
//! outcomes as plain text for the terminal.

use crate::{
    alerts::{AlertError, AlertId, AlertItem, COUNTDOWN_START, CountdownSession, POST_TEXT_LIMIT},
    metrics::{MetricsSnapshot, OptimalTime, PerformanceTracker},
};

/// Formats the help message showing available commands.
///
/// # Examples
///
/// ```
/// # use minefeed::commands::text_response::format_help;
/// let help = format_help();
/// assert!(help.contains("Commands:"));
/// ```
pub fn format_help() -> String {
    format!(
        "Commands:\n\
        - `!feed list [priority] [category...]`: list the alerts, priority keeps that level and above\n\
        - `!feed post <id>`: post an alert, or start a {} seconds countdown in speed mode\n\
        - `!feed cancel`: cancel the running countdown\n\
        - `!feed edit <id> <text>`: replace the post drafted for an alert\n\
        - `!feed save <id>`: queue an alert for later\n\
        - `!feed dismiss <id>`: hide an alert\n\
        - `!feed speed on|off`: turn speed mode on or off\n\
        - `!feed status`: show speed mode and the running countdown\n\
        - `!feed stats`: show the performance of your posts\n\
        - `!feed help`: show this help message",
        COUNTDOWN_START
    )
}

pub fn format_unknown_command() -> String {
    "Unknown command. Type `!feed help` for more information.".to_owned()
}

pub fn format_invalid_alert_id(subcommand: &str) -> String {
    format!(
        "Invalid {} command. Usage: `!feed {} <id>`, where id is the number shown in the feed.",
        subcommand, subcommand
    )
}

pub fn format_invalid_edit() -> String {
    "Invalid edit command. Usage: `!feed edit <id> <text>`.".to_owned()
}

pub fn format_invalid_speed() -> String {
    "Invalid speed command. Usage: `!feed speed on` or `!feed speed off`.".to_owned()
}

/// Formats a rejected alert operation.
pub fn format_alert_error(error: &AlertError) -> String {
    let hint = match error {
        AlertError::NotFound(_) => "Type `!feed list` to see the alerts.",
        AlertError::AlreadyPosted(_) => "Posted alerts can no longer change.",
        AlertError::SessionBusy { .. } => "Wait for it or type `!feed cancel`.",
    };
    format!("Unable to proceed: {}. {}", error, hint)
}

/// Formats a single alert card.
///
/// The card shows the id used by the other commands, the badges, the
/// key points and the draft post with its length.
pub fn format_alert(alert: &AlertItem) -> String {
    let mut badges = format!("[{}] {}", alert.priority, alert.category);
    if alert.saved_for_later() {
        badges.push_str(" [Queued]");
    }
    if alert.posted() {
        badges.push_str(" [Posted]");
    }

    let mut card = format!(
        "#{} {} · {}\n  {}\n",
        alert.id(),
        badges,
        alert.timestamp_label,
        alert.headline
    );
    for point in &alert.key_points {
        card.push_str(&format!("  • {}\n", point));
    }

    let over_limit = if alert.is_over_limit() {
        " (too long)"
    } else {
        ""
    };
    card.push_str(&format!(
        "  > {}\n  {}/{} characters{} · {}",
        alert.post_text(),
        alert.post_length(),
        POST_TEXT_LIMIT,
        over_limit,
        alert.source_ref
    ));

    card
}

/// Formats the feed: pending badge, speed mode and every alert card.
pub fn format_feed(alerts: &[&AlertItem], pending: usize, speed_mode: bool) -> String {
    let speed = if speed_mode { "ON" } else { "OFF" };
    let header = format!(
        "Live Alert Feed · {} new alerts · Speed Mode {}",
        pending, speed
    );

    if alerts.is_empty() {
        return format!("{}\n\nNo alerts found.", header);
    }

    let cards: Vec<String> = alerts.iter().map(|alert| format_alert(alert)).collect();
    format!("{}\n\n{}", header, cards.join("\n\n"))
}

/// Formats speed mode and the running countdown.
pub fn format_status(speed_mode: bool, countdown: Option<CountdownSession>) -> String {
    let speed = if speed_mode { "ON" } else { "OFF" };
    match countdown {
        Some(session) => format!(
            "Speed Mode {} · auto-posting alert #{} in {}...",
            speed, session.target_alert_id, session.remaining_seconds
        ),
        None => format!("Speed Mode {} · no countdown running", speed),
    }
}

pub fn format_speed_mode(speed_mode: bool) -> String {
    if speed_mode {
        "Speed Mode ON: posts now wait for a countdown you can cancel.".to_owned()
    } else {
        "Speed Mode OFF: posts are sent right away.".to_owned()
    }
}

pub fn format_countdown_started(session: &CountdownSession) -> String {
    format!(
        "Auto-posting alert #{} in {}... Type `!feed cancel` to stop.",
        session.target_alert_id, session.remaining_seconds
    )
}

pub fn format_countdown_tick(session: &CountdownSession) -> String {
    format!(
        "Auto-posting alert #{} in {}...",
        session.target_alert_id, session.remaining_seconds
    )
}

pub fn format_countdown_cancelled(session: Option<CountdownSession>) -> String {
    match session {
        Some(session) => format!(
            "Countdown cancelled, alert #{} was not posted.",
            session.target_alert_id
        ),
        None => "No countdown to cancel.".to_owned(),
    }
}

pub fn format_posted(id: AlertId) -> String {
    format!("Alert #{} posted.", id)
}

pub fn format_updated(id: AlertId) -> String {
    format!("Post of alert #{} updated.", id)
}

pub fn format_saved(id: AlertId) -> String {
    format!("Alert #{} queued for later.", id)
}

pub fn format_dismissed(id: AlertId) -> String {
    format!("Alert #{} dismissed.", id)
}

/// Formats the performance figures of the account.
pub fn format_stats(tracker: &PerformanceTracker) -> String {
    let data = tracker.data();
    let snapshot: MetricsSnapshot = tracker.snapshot();
    let trend = tracker.engagement_trend();

    let mut body = format!(
        "Performance\n\
        - Followers: {} (+{} today, +{} this week, +{} this month)\n\
        - Today: {} posts, {} alerts, {:.1}% average engagement\n\
        - Engagement trend: {:+.1}% over the last {} posts",
        data.current_followers,
        snapshot.follower_growth_today,
        data.follower_growth.week,
        data.follower_growth.month,
        data.today_stats.posts,
        data.today_stats.alerts,
        data.today_stats.avg_engagement,
        trend,
        snapshot.recent_engagement_rates.len()
    );

    if let Some(best_post) = &data.best_post_24h {
        body.push_str(&format!(
            "\n- Best post (24h): {} · {} likes, {} reposts, {:.1}% engagement",
            best_post.content, best_post.likes, best_post.reposts, best_post.engagement_rate
        ));
    }

    body.push_str("\n\nOptimal posting times:");
    body.push_str(&format_optimal_times(&tracker.optimal_posting_times()));

    body
}

fn format_optimal_times(times: &[OptimalTime]) -> String {
    times
        .iter()
        .map(|time| format!("\n- {} {} ({:.1})", time.time, time.label, time.score))
        .collect()
}
