//! Seed data for the alert feed.
//!
//! This module provides the [`AlertLoader`] which fills the feed at start up,
//! either from a JSON file or from the built-in list of mining news.

use log::{error, info, warn};
use tokio::fs;

use crate::alerts::alert::{AlertItem, Priority};

/// Loads the alerts the feed starts with.
///
/// The loader never fails: if the seed file is missing or cannot be
/// deserialized, it falls back to [`AlertLoader::builtin`] so the feed always
/// has something to show.
///
/// # Examples
///
/// ```no_run
/// use minefeed::alerts::AlertLoader;
///
/// # async fn example() {
/// let loader = AlertLoader::new(Some("seed.json".to_string()));
/// let alerts = loader.load().await;
/// println!("Loaded {} alerts", alerts.len());
/// # }
/// ```
#[derive(Clone)]
pub struct AlertLoader {
    /// Path to an optional JSON array of alerts.
    path: Option<String>,
}

impl AlertLoader {
    pub fn new(path: Option<String>) -> Self {
        AlertLoader { path }
    }

    /// Loads the seed alerts.
    ///
    /// # Error Handling
    ///
    /// - No path configured: returns the built-in alerts
    /// - File unreadable: logs a warning and returns the built-in alerts
    /// - Invalid JSON: logs an error and returns the built-in alerts
    pub async fn load(&self) -> Vec<AlertItem> {
        let Some(path) = &self.path else {
            info!("no seed file configured, using built-in alerts");
            return Self::builtin();
        };

        let Ok(serialized_alerts) = fs::read_to_string(path).await else {
            warn!("seed file {} not found, using built-in alerts", path);
            return Self::builtin();
        };

        let alerts: Vec<AlertItem> = match serde_json::from_str(&serialized_alerts) {
            Ok(alerts) => alerts,
            Err(e) => {
                error!("failed to deserialize seed file {}: {}", path, e);
                return Self::builtin();
            }
        };

        info!("loaded {} alerts from {}", alerts.len(), path);

        alerts
    }

    /// The built-in mining news alerts.
    ///
    /// The last one has already been posted.
    pub fn builtin() -> Vec<AlertItem> {
        let etf = AlertItem::new(
            Priority::Critical,
            "SEC",
            "2 min ago",
            "SEC approves Bitcoin ETF application from BlackRock",
            vec![
                "$2.5B initial filing".to_string(),
                "Trading starts Monday".to_string(),
                "Ticker: IBIT".to_string(),
            ],
            "BREAKING: SEC approves BlackRock Bitcoin ETF (IBIT) - $2.5B initial filing, trading starts Monday. This changes everything. #Bitcoin #ETF",
            "sec.gov",
        );

        let marathon = AlertItem::new(
            Priority::High,
            "Company",
            "5 min ago",
            "Marathon Digital increases hashrate by 15% in Q4",
            vec![
                "Now at 25.2 EH/s".to_string(),
                "Added 5,000 miners".to_string(),
                "Efficiency up 8%".to_string(),
            ],
            "Marathon Digital ($MARA) reports 15% hashrate increase to 25.2 EH/s in Q4. Added 5,000 miners with 8% efficiency gains. Strong operational execution. #Bitcoin #Mining",
            "marathondigital.com",
        );

        let mut hashrate = AlertItem::new(
            Priority::Medium,
            "Hashrate",
            "12 min ago",
            "Network hashrate hits new all-time high",
            vec![
                "550 EH/s peak".to_string(),
                "Difficulty +3.2%".to_string(),
                "Next adjustment in 5 days".to_string(),
            ],
            "Bitcoin network hashrate hits new ATH of 550 EH/s 🚀 Difficulty up 3.2%, next adjustment in 5 days. Network security stronger than ever. #Bitcoin",
            "blockchain.info",
        );
        hashrate.posted = true;

        vec![etf, marathon, hashrate]
    }
}
