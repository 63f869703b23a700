//! Filters applied on top of the visible alert view.

use std::collections::HashSet;

use crate::alerts::{AlertItem, Priority};

/// Criteria narrowing down the visible alerts.
///
/// The default filter accepts every alert. Categories are compared
/// case-insensitively.
///
/// # Examples
///
/// ```
/// # use minefeed::alerts::{AlertFilter, Priority};
/// // "High & Above"
/// let filter = AlertFilter::default().with_min_priority(Priority::High);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlertFilter {
    /// Lowest priority to keep, `None` keeps every priority
    min_priority: Option<Priority>,
    /// Lowercased categories to keep, `None` keeps every category
    categories: Option<HashSet<String>>,
}

impl AlertFilter {
    pub fn with_min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = Some(priority);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = Some(
            categories
                .into_iter()
                .map(|category| category.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Whether the alert passes every criterion of the filter.
    pub fn matches(&self, alert: &AlertItem) -> bool {
        let priority_ok = self
            .min_priority
            .is_none_or(|min_priority| alert.priority >= min_priority);
        let category_ok = self
            .categories
            .as_ref()
            .is_none_or(|categories| categories.contains(&alert.category.to_lowercase()));

        priority_ok && category_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_alert(priority: Priority, category: &str) -> AlertItem {
        AlertItem::new(
            priority,
            category,
            "now",
            "headline",
            vec![],
            "post",
            "example.com",
        )
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = AlertFilter::default();

        assert!(filter.matches(&create_test_alert(Priority::Low, "Market")));
        assert!(filter.matches(&create_test_alert(Priority::Critical, "SEC")));
    }

    #[test]
    fn test_min_priority_keeps_higher_priorities() {
        let filter = AlertFilter::default().with_min_priority(Priority::High);

        assert!(filter.matches(&create_test_alert(Priority::Critical, "SEC")));
        assert!(filter.matches(&create_test_alert(Priority::High, "SEC")));
        assert!(!filter.matches(&create_test_alert(Priority::Medium, "SEC")));
        assert!(!filter.matches(&create_test_alert(Priority::Low, "SEC")));
    }

    #[test]
    fn test_categories_are_case_insensitive() {
        let filter = AlertFilter::default().with_categories(["sec", "HASHRATE"]);

        assert!(filter.matches(&create_test_alert(Priority::Low, "SEC")));
        assert!(filter.matches(&create_test_alert(Priority::Low, "Hashrate")));
        assert!(!filter.matches(&create_test_alert(Priority::Low, "Company")));
    }

    #[test]
    fn test_criteria_are_combined() {
        let filter = AlertFilter::default()
            .with_min_priority(Priority::Critical)
            .with_categories(["SEC"]);

        assert!(filter.matches(&create_test_alert(Priority::Critical, "SEC")));
        assert!(!filter.matches(&create_test_alert(Priority::High, "SEC")));
        assert!(!filter.matches(&create_test_alert(Priority::Critical, "Company")));
    }
}
