//! Terminal dashboard running the alert feed.
//!
//! This module provides the [`Dashboard`], which wires the alert feed, the
//! performance tracker and the command pipeline to the terminal.
//!
//! # Architecture
//!
//! The dashboard runs up to three concurrent tasks:
//!
//! 1. **Metrics Refresh Task**: Drifts the mock performance figures every
//!    `refresh_interval` seconds.
//! 2. **Command Loop** (main): Reads lines from stdin, runs the feed commands
//!    and prints the responses.
//! 3. **Countdown Ticker**: Spawned when a speed mode countdown starts, ticks
//!    it once per second until the alert is posted. Aborted on cancel.
//!
//! # Thread Safety
//!
//! The feed and the tracker each live behind a single [`Mutex`]. Commands and
//! ticks lock the feed first and the tracker second, so they are applied one
//! at a time and a cancel can never race with the final tick.
//!
//! # Example
//!
//! ```no_run
//! # use minefeed::dashboard::Dashboard;
//! # use minefeed::config::Config;
//! # async fn run() -> Result<(), anyhow::Error> {
//! let dashboard = Dashboard::new(Config::default()).await;
//! dashboard.start().await?; // Runs until stdin is closed
//! # Ok(())
//! # }
//! ```

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use log::{debug, error, info};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant},
};

use crate::{
    alerts::{AlertFeed, AlertLoader, TickOutcome},
    commands::{
        CommandContext, CommandParseError, Commander, CountdownChange,
        text_response::{format_alert_error, format_countdown_tick, format_feed, format_posted},
    },
    config::Config,
    metrics::PerformanceTracker,
    notifier::{ConsoleNotifier, Notifier},
};

/// Seconds between two ticks of the countdown.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Alert desk reading commands from the terminal.
pub struct Dashboard<N: Notifier + 'static> {
    /// The alert feed, shared with the countdown ticker.
    feed: Arc<Mutex<AlertFeed<N>>>,

    /// Performance figures, shared with the refresh task and the ticker.
    tracker: Arc<Mutex<PerformanceTracker>>,

    /// Seconds between two refreshes of the performance figures.
    refresh_interval: u64,

    /// Command parser and executor.
    commander: Commander,

    /// Ticker of the running countdown, if any.
    ticker: Option<JoinHandle<()>>,
}

impl Dashboard<ConsoleNotifier> {
    /// Creates a dashboard from the configuration.
    ///
    /// Seed alerts are read from `feed.seed_path` when set, the built-in
    /// alerts are used otherwise. Notices are printed on the terminal.
    pub async fn new(config: Config) -> Self {
        let alerts = AlertLoader::new(config.feed.seed_path).load().await;

        Dashboard::with_parts(
            AlertFeed::new(alerts, config.feed.speed_mode, ConsoleNotifier),
            PerformanceTracker::new(config.metrics.rng_seed),
            config.metrics.refresh_interval,
        )
    }
}

impl<N: Notifier + 'static> Dashboard<N> {
    /// Creates a dashboard around an existing feed and tracker.
    ///
    /// # Arguments
    ///
    /// * `feed` - The alert feed
    /// * `tracker` - The performance tracker
    /// * `refresh_interval` - Seconds between two refreshes, at least 1
    pub fn with_parts(
        feed: AlertFeed<N>,
        tracker: PerformanceTracker,
        refresh_interval: u64,
    ) -> Self {
        Dashboard {
            feed: Arc::new(Mutex::new(feed)),
            tracker: Arc::new(Mutex::new(tracker)),
            refresh_interval: refresh_interval.max(1),
            commander: Commander::new(),
            ticker: None,
        }
    }

    /// Starts the dashboard and processes commands until stdin is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read.
    pub async fn start(mut self) -> Result<(), anyhow::Error> {
        let refresh_task = self.start_metrics_refresh_task();

        {
            let feed = self.feed.lock().await;
            println!(
                "{}",
                format_feed(&feed.list_visible(), feed.count_pending(), feed.speed_mode())
            );
        }
        println!("Type `!feed help` to list the commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
            if let Some(response) = self.handle_line(&line).await {
                println!("{}", response);
            }
        }

        info!("stdin closed, stopping the dashboard");
        self.stop_countdown_ticker();
        refresh_task.abort();

        Ok(())
    }

    /// Runs a terminal line and returns the response to print.
    ///
    /// Lines that are not feed commands return `None`. Starts or stops the
    /// countdown ticker as requested by the command.
    pub async fn handle_line(&mut self, line: &str) -> Option<String> {
        let command = match self.commander.parse(line) {
            Ok(command) => command,
            Err(CommandParseError::NotForFeed) => {
                debug!("ignoring line: {}", line);
                return None;
            }
            Err(CommandParseError::InvalidCommand(message)) => return Some(message),
        };

        let result = {
            let mut feed = self.feed.lock().await;
            let mut tracker = self.tracker.lock().await;
            let mut context = CommandContext {
                feed: &mut feed,
                tracker: &mut tracker,
            };
            self.commander.execute(&command, &mut context)
        };

        match result.countdown_change {
            Some(CountdownChange::Started) => self.start_countdown_ticker(),
            Some(CountdownChange::Cancelled) => self.stop_countdown_ticker(),
            None => {}
        }

        Some(result.response)
    }

    /// Spawns the task refreshing the performance figures.
    fn start_metrics_refresh_task(&self) -> JoinHandle<()> {
        let tracker = Arc::clone(&self.tracker);
        let refresh_interval = self.refresh_interval;

        tokio::spawn(async move {
            info!(
                "Starting metrics refresh task with interval of {} seconds",
                refresh_interval
            );
            let mut interval = time::interval(Duration::from_secs(refresh_interval));

            loop {
                interval.tick().await;
                tracker.lock().await.refresh();
            }
        })
    }

    /// Spawns the ticker of a freshly started countdown.
    ///
    /// A previous ticker is aborted first, only one countdown runs at a time.
    fn start_countdown_ticker(&mut self) {
        self.stop_countdown_ticker();

        let feed = Arc::clone(&self.feed);
        let tracker = Arc::clone(&self.tracker);
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

            loop {
                interval.tick().await;

                let mut feed = feed.lock().await;
                match feed.tick() {
                    Ok(TickOutcome::Counting(session)) => {
                        println!("{}", format_countdown_tick(&session));
                    }
                    Ok(TickOutcome::Posted(id)) => {
                        let post_text = feed.get(id).map(|alert| alert.post_text().to_owned());
                        if let Ok(post_text) = post_text {
                            tracker.lock().await.track_post(&post_text);
                        }
                        println!("{}", format_posted(id));
                        break;
                    }
                    Ok(TickOutcome::Idle) => break,
                    Err(e) => {
                        error!("countdown failed to post: {}", e);
                        println!("{}", format_alert_error(&e));
                        break;
                    }
                }
            }

            debug!("countdown ticker stopped");
        }));
    }

    fn stop_countdown_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::MockNotifier;

    fn create_test_dashboard(speed_mode: bool) -> Dashboard<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().return_const(());

        Dashboard::with_parts(
            AlertFeed::new(AlertLoader::builtin(), speed_mode, notifier),
            PerformanceTracker::new(Some(1)),
            30,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_every_second() {
        let mut dashboard = create_test_dashboard(true);

        let response = dashboard.handle_line("!feed post 1").await;
        assert!(response.unwrap().contains("alert #1 in 10"));

        time::sleep(Duration::from_millis(3500)).await;

        let countdown = dashboard.feed.lock().await.countdown().unwrap();
        assert_eq!(countdown.target_alert_id, 1);
        assert_eq!(countdown.remaining_seconds, 7);
        assert!(!dashboard.feed.lock().await.get(1).unwrap().posted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_posts_after_ten_seconds() {
        let mut dashboard = create_test_dashboard(true);

        dashboard.handle_line("!feed post 2").await;
        time::sleep(Duration::from_millis(10_500)).await;

        let feed = dashboard.feed.lock().await;
        assert!(feed.get(2).unwrap().posted());
        assert!(feed.countdown().is_none());
        assert_eq!(feed.count_pending(), 1);
        drop(feed);

        let tracker = dashboard.tracker.lock().await;
        assert!(tracker.data().recent_posts[0].content.starts_with("Marathon"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_the_post() {
        let mut dashboard = create_test_dashboard(true);

        dashboard.handle_line("!feed post 1").await;
        time::sleep(Duration::from_millis(4500)).await;

        let response = dashboard.handle_line("!feed cancel").await;
        assert!(response.unwrap().contains("#1 was not posted"));

        time::sleep(Duration::from_secs(15)).await;

        let feed = dashboard.feed.lock().await;
        assert!(!feed.get(1).unwrap().posted());
        assert!(feed.countdown().is_none());
        assert_eq!(dashboard.tracker.lock().await.data().recent_posts.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_countdown_after_cancel() {
        let mut dashboard = create_test_dashboard(true);

        dashboard.handle_line("!feed post 1").await;
        time::sleep(Duration::from_millis(2500)).await;
        dashboard.handle_line("!feed cancel").await;
        dashboard.handle_line("!feed post 2").await;
        time::sleep(Duration::from_millis(3500)).await;

        let countdown = dashboard.feed.lock().await.countdown().unwrap();
        assert_eq!(countdown.target_alert_id, 2);
        assert_eq!(countdown.remaining_seconds, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_without_speed_mode() {
        let mut dashboard = create_test_dashboard(false);

        let response = dashboard.handle_line("!feed post 1").await;

        assert_eq!(response.as_deref(), Some("Alert #1 posted."));
        assert!(dashboard.ticker.is_none());
        assert!(dashboard.feed.lock().await.get(1).unwrap().posted());
    }

    #[tokio::test]
    async fn test_handle_line_ignores_other_lines() {
        let mut dashboard = create_test_dashboard(false);

        assert!(dashboard.handle_line("hello").await.is_none());
        assert!(dashboard.handle_line("!other help").await.is_none());

        let response = dashboard.handle_line("!feed speed fast").await;
        assert!(response.unwrap().contains("Invalid speed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_metrics_refresh_on_interval() {
        let dashboard = create_test_dashboard(false);
        let before = dashboard.tracker.lock().await.data().clone();

        let refresh_task = dashboard.start_metrics_refresh_task();
        // First refresh at start, then one every 30 seconds: 21 refreshes
        time::sleep(Duration::from_secs(601)).await;

        let after = dashboard.tracker.lock().await.data().clone();
        assert!(!refresh_task.is_finished());
        refresh_task.abort();

        assert!(after.current_followers > before.current_followers);
        assert!(after.current_followers <= before.current_followers + 2 * 21);
        assert!(after.follower_growth.today >= before.follower_growth.today);
        assert!(after.follower_growth.today <= before.follower_growth.today + 21);
        assert_eq!(after.follower_growth.week, before.follower_growth.week);
    }

    #[tokio::test(start_paused = true)]
    async fn test_metrics_refresh_waits_for_interval() {
        let dashboard = create_test_dashboard(false);

        let refresh_task = dashboard.start_metrics_refresh_task();
        time::sleep(Duration::from_secs(1)).await;
        let after_first = dashboard.tracker.lock().await.data().clone();

        // Still inside the first 30 seconds, no other refresh yet
        time::sleep(Duration::from_secs(28)).await;
        let later = dashboard.tracker.lock().await.data().clone();
        refresh_task.abort();

        assert_eq!(after_first.current_followers, later.current_followers);
        assert_eq!(
            after_first.follower_growth.today,
            later.follower_growth.today
        );
    }

    #[tokio::test]
    async fn test_new_uses_configuration() {
        let mut config = Config::default();
        config.feed.speed_mode = true;
        config.metrics.rng_seed = Some(5);
        config.metrics.refresh_interval = 0;

        let dashboard = Dashboard::new(config).await;

        assert!(dashboard.feed.lock().await.speed_mode());
        assert_eq!(dashboard.feed.lock().await.list_visible().len(), 3);
        assert_eq!(dashboard.refresh_interval, 1);
    }
}
