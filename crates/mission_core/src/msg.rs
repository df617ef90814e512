use std::time::Duration;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Dashboard became visible; starts the counter and the feed.
    Mounted,
    /// Dashboard is being torn down; stops every timer it owns.
    Unmounted,
    /// One redraw frame of the counter animation.
    CounterFrame { elapsed: Duration },
    /// Frame scheduler reached the end of the counter animation.
    CounterCompleted,
    /// One firing of the feed interval, stamped with wall-clock time.
    FeedTick { at: NaiveDateTime },
    /// User edited the URL input box.
    InputChanged(String),
    /// User asked for the current URL to be analyzed.
    AnalyzeSubmitted,
    /// The analysis delay for `request_id` elapsed.
    AnalysisReady { request_id: crate::RequestId },
    /// User cleared the form.
    ResetClicked,
    /// User pressed the Telegram alert button.
    AlertClicked,
    /// User closed the alert notice.
    AlertDismissed,
    /// UI tick; advances the busy spinner.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}
