use crate::{AnalysisResult, Lifecycle, LogCategory, LogEntryId, StatCard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub lifecycle: Lifecycle,
    pub counter: CounterView,
    pub stats: Vec<StatCard>,
    pub log_rows: Vec<LogRowView>,
    pub analyzer: AnalyzerView,
    pub alert_open: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub value: u64,
    pub target: u64,
    pub label: String,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRowView {
    pub id: LogEntryId,
    pub clock: String,
    pub category: LogCategory,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerView {
    pub input: String,
    pub busy: bool,
    pub can_submit: bool,
    pub spinner_frame: usize,
    pub result: Option<AnalysisResult>,
}

pub const ALERT_TITLE: &str = "Telegram Alert Sent!";
pub const ALERT_BODY: &str = "New lead notification dispatched to your Telegram channel.";
