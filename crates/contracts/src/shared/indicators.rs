//! Stat-card indicator values and their display formats.
//!
//! The dashboard's counters animate from zero toward a target; formatting has
//! to be applied every animation frame, so it lives here next to the values
//! rather than in the view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// A stat value together with how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatValue {
    /// Plain count, thousands-separated: `3,781`.
    Count(f64),
    /// Dollar amount, thousands-separated: `$695`.
    Money(f64),
    /// Percentage with one decimal: `30.1%`.
    Percent(f64),
}

impl StatValue {
    /// Final value the animated counter converges to.
    pub fn target(&self) -> f64 {
        match self {
            StatValue::Count(v) | StatValue::Money(v) | StatValue::Percent(v) => *v,
        }
    }

    /// Render an intermediate (or final) counter value in this format.
    pub fn format(&self, current: f64) -> String {
        match self {
            StatValue::Count(_) => format_thousands(current.round() as i64),
            StatValue::Money(_) => format!("${}", format_thousands(current.round() as i64)),
            StatValue::Percent(_) => format!("{:.1}%", current),
        }
    }
}

/// Comma thousands separator: `3781` -> `"3,781"`.
fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

/// One card of the dashboard stats grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: StatValue,
    pub trend: Trend,
    /// Change vs. the previous period, pre-formatted ("+11.01%").
    pub change: String,
}

impl StatCard {
    fn new(title: &str, value: StatValue, trend: Trend, change: &str) -> Self {
        Self {
            title: title.into(),
            value,
            trend,
            change: change.into(),
        }
    }
}

/// The four fixed dashboard indicators.
pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Customers", StatValue::Count(3781.0), Trend::Up, "+11.01%"),
        StatCard::new("Orders", StatValue::Count(1209.0), Trend::Down, "-0.03%"),
        StatCard::new("Revenue", StatValue::Money(695.0), Trend::Up, "+15.03%"),
        StatCard::new("Growth", StatValue::Percent(30.1), Trend::Up, "+6.08%"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_format() {
        assert_eq!(StatValue::Count(3781.0).format(3781.0), "3,781");
        assert_eq!(StatValue::Count(1209.0).format(64.2), "64");
        assert_eq!(StatValue::Count(0.0).format(0.0), "0");
        assert_eq!(StatValue::Count(1234567.0).format(1234567.0), "1,234,567");
    }

    #[test]
    fn test_money_format() {
        assert_eq!(StatValue::Money(695.0).format(695.0), "$695");
        assert_eq!(StatValue::Money(6518.0).format(6518.0), "$6,518");
    }

    #[test]
    fn test_percent_format_keeps_one_decimal() {
        assert_eq!(StatValue::Percent(30.1).format(30.1), "30.1%");
        assert_eq!(StatValue::Percent(30.1).format(12.04), "12.0%");
    }

    #[test]
    fn test_dashboard_stats_targets() {
        let stats = dashboard_stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].value.target(), 3781.0);
        assert_eq!(stats[1].trend, Trend::Down);
        assert_eq!(stats[2].value.format(stats[2].value.target()), "$695");
        assert_eq!(stats[3].value.format(stats[3].value.target()), "30.1%");
    }
}
