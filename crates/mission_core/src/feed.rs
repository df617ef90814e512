use std::collections::VecDeque;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogEntryId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub category: LogCategory,
    pub text: &'static str,
    pub timestamp: NaiveDateTime,
}

impl LogEntry {
    /// Wall-clock stamp as shown in the terminal panel.
    pub fn clock_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// The canned messages the feed cycles through, in order.
pub const SCRIPT: [(LogCategory, &str); 24] = [
    (LogCategory::Info, "[SCAN] Initializing LinkedIn scraper..."),
    (LogCategory::Success, "[OK] Connected to proxy server: 45.33.xx.xx:8080"),
    (LogCategory::Info, "[SCRAPE] Scraping LinkedIn profile: John_Smith_CEO"),
    (LogCategory::Success, "[DATA] Found email: j.smith@techcorp.io"),
    (LogCategory::Warning, "[RATE] Cooling down for 2.3s..."),
    (LogCategory::Info, "[SCRAPE] Scraping LinkedIn profile: Sarah_Johnson_VP"),
    (LogCategory::Success, "[DATA] Found email: sarah.j@innovate.co"),
    (LogCategory::Info, "[AI] Generating personalized email template..."),
    (LogCategory::Success, "[SENT] Email dispatched to j.smith@techcorp.io"),
    (LogCategory::Info, "[VERIFY] Checking bounce status..."),
    (LogCategory::Success, "[VALID] Email delivered successfully"),
    (LogCategory::Info, "[SCAN] Scanning company: TechVentures Inc."),
    (LogCategory::Success, "[DATA] Found 47 decision makers"),
    (LogCategory::Warning, "[CAPTCHA] Solving challenge..."),
    (LogCategory::Success, "[OK] Challenge bypassed successfully"),
    (LogCategory::Info, "[ENRICH] Enriching lead data from Clearbit..."),
    (LogCategory::Success, "[DATA] Company revenue: $50M-100M"),
    (LogCategory::Info, "[AI] Training outreach model on new patterns..."),
    (LogCategory::Success, "[PIPELINE] Lead added to Salesforce CRM"),
    (LogCategory::Info, "[MONITOR] Tracking email open rates..."),
    (LogCategory::Success, "[ALERT] j.smith@techcorp.io opened email!"),
    (LogCategory::Warning, "[RETRY] Retrying failed request..."),
    (LogCategory::Success, "[OK] Request completed successfully"),
    (LogCategory::Info, "[SCRAPE] Batch processing 150 profiles..."),
];

/// Bounded, append-only window over the scripted feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFeed {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    cursor: usize,
    next_id: u64,
    torn_down: bool,
}

impl LogFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
            cursor: 0,
            next_id: 1,
            torn_down: false,
        }
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of ticks applied so far.
    pub fn ticks(&self) -> usize {
        self.cursor
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Appends the next scripted message. Returns `None` once torn down.
    pub fn tick(&mut self, at: NaiveDateTime) -> Option<&LogEntry> {
        if self.torn_down {
            return None;
        }
        let (category, text) = SCRIPT[self.cursor % SCRIPT.len()];
        self.cursor += 1;

        let timestamp = match self.entries.back() {
            Some(last) if last.timestamp > at => last.timestamp,
            _ => at,
        };
        let id = LogEntryId(self.next_id);
        self.next_id += 1;

        self.entries.push_back(LogEntry {
            id,
            category,
            text,
            timestamp,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.entries.back()
    }

    pub(crate) fn tear_down(&mut self) {
        self.torn_down = true;
    }

    pub(crate) fn resume(&mut self) {
        self.torn_down = false;
    }
}

impl Default for LogFeed {
    fn default() -> Self {
        Self::new(crate::settings::DEFAULT_FEED_CAPACITY)
    }
}
