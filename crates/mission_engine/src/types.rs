use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::scheduler::{MonotonicClock, TokioClock};

pub type RequestId = u64;

/// Everything the engine reports back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FeedTick { at: NaiveDateTime },
    CounterFrame { elapsed: Duration },
    CounterCompleted,
    AnalysisReady { request_id: RequestId },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build timer runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
}

pub type WallClock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

#[derive(Clone)]
pub struct EngineConfig {
    /// Cadence of counter animation frames.
    pub frame_interval: Duration,
    /// Time source for feed timestamps.
    pub wall_clock: WallClock,
    /// Time source for animation progress.
    pub monotonic_clock: Arc<dyn MonotonicClock>,
}

impl EngineConfig {
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            wall_clock: Arc::new(|| chrono::Local::now().naive_local()),
            monotonic_clock: Arc::new(TokioClock),
        }
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("frame_interval", &self.frame_interval)
            .finish_non_exhaustive()
    }
}
