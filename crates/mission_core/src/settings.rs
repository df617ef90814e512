use std::time::Duration;

pub const DEFAULT_COUNTER_TARGET: u64 = 12_450;
pub const DEFAULT_COUNTER_DURATION: Duration = Duration::from_millis(2_500);
pub const DEFAULT_FEED_INTERVAL: Duration = Duration::from_millis(1_200);
pub const DEFAULT_FEED_CAPACITY: usize = 15;
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(2_000);

/// Everything the dashboard needs to know up front. Built by the app from its
/// config file; tests use `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub counter: CounterSettings,
    pub feed: FeedSettings,
    pub analyzer: AnalyzerSettings,
    pub stats: Vec<StatCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSettings {
    pub target: u64,
    pub label: String,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    pub interval: Duration,
    pub capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerSettings {
    pub delay: Duration,
}

/// Static figure shown under the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub value: String,
    pub label: String,
}

impl StatCard {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            counter: CounterSettings::default(),
            feed: FeedSettings::default(),
            analyzer: AnalyzerSettings::default(),
            stats: default_stats(),
        }
    }
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            target: DEFAULT_COUNTER_TARGET,
            label: "Leads Scraped".to_string(),
            duration: DEFAULT_COUNTER_DURATION,
        }
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_FEED_INTERVAL,
            capacity: DEFAULT_FEED_CAPACITY,
        }
    }
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_ANALYSIS_DELAY,
        }
    }
}

pub fn default_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("847", "Emails Sent"),
        StatCard::new("64%", "Open Rate"),
        StatCard::new("$2.4M", "Pipeline"),
    ]
}
