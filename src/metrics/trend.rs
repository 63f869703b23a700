//! Engagement trend between the two most recent windows of posts.

/// Number of posts in each window.
pub const TREND_WINDOW: usize = 5;

/// Percentage change of the average engagement rate between the latest
/// [`TREND_WINDOW`] posts and the [`TREND_WINDOW`] posts before them.
///
/// `rates` are engagement rates ordered from the most recent post to the
/// oldest. Rates beyond the two windows are ignored.
///
/// The trend is `0.0` when either window is not full or when the older
/// average is zero.
///
/// # Examples
///
/// ```
/// # use minefeed::metrics::engagement_trend;
/// let rates = [5.0, 6.0, 7.0, 8.0, 9.0, 4.0, 4.0, 4.0, 4.0, 4.0];
/// assert_eq!(engagement_trend(&rates), 75.0);
/// ```
pub fn engagement_trend(rates: &[f64]) -> f64 {
    if rates.len() < 2 * TREND_WINDOW {
        return 0.0;
    }

    let recent = average(&rates[..TREND_WINDOW]);
    let older = average(&rates[TREND_WINDOW..2 * TREND_WINDOW]);

    if older == 0.0 {
        return 0.0;
    }

    ((recent - older) / older) * 100.0
}

fn average(rates: &[f64]) -> f64 {
    rates.iter().sum::<f64>() / rates.len() as f64
}
