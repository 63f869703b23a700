//! Mock performance tracking of published posts.
//!
//! This module provides the [`PerformanceTracker`], a stand-in for a real
//! analytics source. It starts from generated figures and drifts them on
//! every [`refresh`](PerformanceTracker::refresh).

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::metrics::engagement_trend;

/// Maximum number of posts kept in [`PerformanceData::recent_posts`].
pub const RECENT_POSTS_LIMIT: usize = 10;

/// Number of days covered by [`PerformanceData::follower_history`].
const FOLLOWER_HISTORY_DAYS: i64 = 30;

/// Follower count the mock figures are built around.
const BASE_FOLLOWERS: u64 = 12_437;

/// Audience figures of a single post.
#[derive(Clone, Debug, PartialEq)]
pub struct PostPerformance {
    pub id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u64,
    pub reposts: u64,
    pub replies: u64,
    pub impressions: u64,
    /// Engagement rate, in percent
    pub engagement_rate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowerGrowth {
    pub today: u64,
    pub week: u64,
    pub month: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TodayStats {
    pub posts: u64,
    pub alerts: u64,
    pub avg_engagement: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowerCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Everything the tracker knows about the account.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceData {
    pub current_followers: u64,
    pub follower_growth: FollowerGrowth,
    pub today_stats: TodayStats,
    pub best_post_24h: Option<PostPerformance>,
    /// Latest posts, most recent first
    pub recent_posts: Vec<PostPerformance>,
    /// Daily follower counts, oldest first
    pub follower_history: Vec<FollowerCount>,
}

/// Read-only view handed to the rest of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsSnapshot {
    pub follower_growth_today: u64,
    /// Engagement rates of the recent posts, most recent first
    pub recent_engagement_rates: Vec<f64>,
}

/// A suggested time slot for posting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimalTime {
    pub time: &'static str,
    pub score: f64,
    pub label: &'static str,
}

/// Generates and updates mock performance figures.
///
/// # Examples
///
/// ```
/// # use minefeed::metrics::PerformanceTracker;
/// let mut tracker = PerformanceTracker::new(Some(42));
/// tracker.track_post("BREAKING: SEC approves BlackRock Bitcoin ETF");
/// assert_eq!(tracker.data().recent_posts.len(), 4);
/// ```
pub struct PerformanceTracker {
    data: PerformanceData,
    rng: StdRng,
}

impl PerformanceTracker {
    /// Creates a tracker with freshly generated figures.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed of the random generator, `None` seeds it from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let data = generate_mock_performance(Utc::now(), &mut rng);

        PerformanceTracker { data, rng }
    }

    pub fn data(&self) -> &PerformanceData {
        &self.data
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            follower_growth_today: self.data.follower_growth.today,
            recent_engagement_rates: self
                .data
                .recent_posts
                .iter()
                .map(|post| post.engagement_rate)
                .collect(),
        }
    }

    /// Simulates the audience moving since the last refresh.
    ///
    /// Adds 0 to 2 followers and 0 to 1 to today's growth.
    pub fn refresh(&mut self) {
        let new_followers = self.rng.gen_range(0..3);
        self.data.current_followers += new_followers;
        self.data.follower_growth.today += self.rng.gen_range(0..2);

        debug!(
            "refreshed metrics, {} followers (+{})",
            self.data.current_followers, new_followers
        );
    }

    /// Records a freshly published post.
    ///
    /// The post is put first in the recent posts with no engagement yet, the
    /// oldest post is dropped past [`RECENT_POSTS_LIMIT`].
    pub fn track_post(&mut self, content: &str) {
        let now = Utc::now();
        let post = PostPerformance {
            id: now.timestamp_millis().to_string(),
            content: content.to_owned(),
            timestamp: now,
            likes: 0,
            reposts: 0,
            replies: 0,
            impressions: 0,
            engagement_rate: 0.0,
        };

        self.data.recent_posts.insert(0, post);
        self.data.recent_posts.truncate(RECENT_POSTS_LIMIT);
        self.data.today_stats.posts += 1;

        debug!("tracking post, {} posts today", self.data.today_stats.posts);
    }

    /// Engagement trend of the recent posts, in percent.
    pub fn engagement_trend(&self) -> f64 {
        engagement_trend(&self.snapshot().recent_engagement_rates)
    }

    /// Time slots that historically perform best.
    pub fn optimal_posting_times(&self) -> Vec<OptimalTime> {
        vec![
            OptimalTime {
                time: "09:00",
                score: 8.5,
                label: "Market Open",
            },
            OptimalTime {
                time: "13:30",
                score: 7.2,
                label: "Lunch Break",
            },
            OptimalTime {
                time: "16:00",
                score: 9.1,
                label: "Market Close",
            },
            OptimalTime {
                time: "20:00",
                score: 6.8,
                label: "Evening",
            },
        ]
    }
}

fn mock_post(
    id: &str,
    content: &str,
    timestamp: DateTime<Utc>,
    figures: (u64, u64, u64, u64),
    engagement_rate: f64,
) -> PostPerformance {
    let (likes, reposts, replies, impressions) = figures;
    PostPerformance {
        id: id.to_owned(),
        content: content.to_owned(),
        timestamp,
        likes,
        reposts,
        replies,
        impressions,
        engagement_rate,
    }
}

/// Builds the initial mock figures around `now`.
fn generate_mock_performance(now: DateTime<Utc>, rng: &mut impl Rng) -> PerformanceData {
    let recent_posts = vec![
        mock_post(
            "1",
            "BREAKING: SEC approves BlackRock Bitcoin ETF...",
            now - TimeDelta::hours(2),
            (2134, 456, 89, 45_600),
            5.9,
        ),
        mock_post(
            "2",
            "Marathon Digital reports 15% hashrate increase...",
            now - TimeDelta::hours(5),
            (892, 234, 45, 23_400),
            5.0,
        ),
        mock_post(
            "3",
            "Bitcoin network hashrate hits new ATH...",
            now - TimeDelta::hours(12),
            (1456, 312, 67, 34_200),
            5.4,
        ),
    ];

    let mut follower_history: Vec<FollowerCount> = (0..FOLLOWER_HISTORY_DAYS)
        .map(|days_ago| {
            let decline = days_ago as u64 * rng.gen_range(0..10);
            let noise = rng.gen_range(0..25);
            FollowerCount {
                date: (now - TimeDelta::days(days_ago)).date_naive(),
                count: BASE_FOLLOWERS.saturating_sub(decline) + noise,
            }
        })
        .collect();
    follower_history.reverse();

    PerformanceData {
        current_followers: BASE_FOLLOWERS,
        follower_growth: FollowerGrowth {
            today: 23,
            week: 156,
            month: 634,
        },
        today_stats: TodayStats {
            posts: 23,
            alerts: 47,
            avg_engagement: 4.2,
        },
        best_post_24h: recent_posts.first().cloned(),
        recent_posts,
        follower_history,
    }
}
