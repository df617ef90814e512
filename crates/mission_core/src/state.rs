use crate::analyzer::Analyzer;
use crate::counter::CounterAnimation;
use crate::feed::LogFeed;
use crate::settings::DashboardSettings;
use crate::view_model::{AnalyzerView, AppViewModel, CounterView, LogRowView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: DashboardSettings,
    lifecycle: Lifecycle,
    counter: CounterAnimation,
    feed: LogFeed,
    analyzer: Analyzer,
    alert_open: bool,
    spinner: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(DashboardSettings::default())
    }

    pub fn with_settings(settings: DashboardSettings) -> Self {
        Self {
            counter: CounterAnimation::new(settings.counter.target, settings.counter.duration),
            feed: LogFeed::new(settings.feed.capacity),
            analyzer: Analyzer::default(),
            settings,
            lifecycle: Lifecycle::Created,
            alert_open: false,
            spinner: 0,
            dirty: false,
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn counter(&self) -> &CounterAnimation {
        &self.counter
    }

    pub fn feed(&self) -> &LogFeed {
        &self.feed
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            lifecycle: self.lifecycle,
            counter: CounterView {
                value: self.counter.value(),
                target: self.counter.target(),
                label: self.settings.counter.label.clone(),
                finished: self.counter.is_finished(),
            },
            stats: self.settings.stats.clone(),
            log_rows: self
                .feed
                .entries()
                .map(|entry| LogRowView {
                    id: entry.id,
                    clock: entry.clock_label(),
                    category: entry.category,
                    text: entry.text,
                })
                .collect(),
            analyzer: AnalyzerView {
                input: self.analyzer.input().to_string(),
                busy: self.analyzer.is_busy(),
                can_submit: self.analyzer.can_submit(),
                spinner_frame: self.spinner,
                result: self.analyzer.result().cloned(),
            },
            alert_open: self.alert_open,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        self.lifecycle = lifecycle;
    }

    pub(crate) fn counter_mut(&mut self) -> &mut CounterAnimation {
        &mut self.counter
    }

    pub(crate) fn feed_mut(&mut self) -> &mut LogFeed {
        &mut self.feed
    }

    pub(crate) fn analyzer_mut(&mut self) -> &mut Analyzer {
        &mut self.analyzer
    }

    pub(crate) fn set_alert_open(&mut self, open: bool) -> bool {
        let changed = self.alert_open != open;
        self.alert_open = open;
        changed
    }

    pub(crate) fn advance_spinner(&mut self) {
        self.spinner = self.spinner.wrapping_add(1);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
