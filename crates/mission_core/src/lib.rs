//! Mission control core: pure dashboard state machine and view-model helpers.
//!
//! Nothing in here reads a clock or touches I/O. Time arrives as messages
//! (`CounterFrame`, `FeedTick`, `AnalysisReady`) and timers are requested
//! through [`Effect`]s.
mod analyzer;
mod counter;
mod effect;
mod feed;
mod msg;
mod settings;
mod state;
mod update;
mod view_model;

pub use analyzer::{
    analyze, company_name_from_url, email_draft, AnalysisResult, Analyzer, AnalyzerPhase,
    RequestId, FALLBACK_COMPANY,
};
pub use counter::{ease_out_cubic, eased_value, CounterAnimation};
pub use effect::Effect;
pub use feed::{LogCategory, LogEntry, LogEntryId, LogFeed, SCRIPT};
pub use msg::Msg;
pub use settings::{
    default_stats, AnalyzerSettings, CounterSettings, DashboardSettings, FeedSettings, StatCard,
    DEFAULT_ANALYSIS_DELAY, DEFAULT_COUNTER_DURATION, DEFAULT_COUNTER_TARGET,
    DEFAULT_FEED_CAPACITY, DEFAULT_FEED_INTERVAL,
};
pub use state::{AppState, Lifecycle};
pub use update::update;
pub use view_model::{
    AnalyzerView, AppViewModel, CounterView, LogRowView, ALERT_BODY, ALERT_TITLE,
};
