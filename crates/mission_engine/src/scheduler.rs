use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::timer::TimerHandle;

/// Source of monotonic time for animations.
pub trait MonotonicClock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Reads tokio's clock, so paused-time tests drive it too.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl MonotonicClock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Drives a fixed-length animation one frame at a time.
///
/// Frames fire every `frame_interval`; each receives the elapsed time since
/// the run started, clamped to the run's duration and never smaller than
/// the previous frame's. The final frame carries exactly `duration` and is
/// followed by a single completion call.
#[derive(Clone)]
pub struct FrameScheduler {
    clock: Arc<dyn MonotonicClock>,
    frame_interval: Duration,
}

impl FrameScheduler {
    pub fn new(clock: Arc<dyn MonotonicClock>, frame_interval: Duration) -> Self {
        Self {
            clock,
            // A zero period would make tokio's interval panic.
            frame_interval: frame_interval.max(Duration::from_millis(1)),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn run<F, C>(&self, duration: Duration, mut on_frame: F, on_complete: C) -> TimerHandle
    where
        F: FnMut(Duration) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        let clock = self.clock.clone();
        let frame_interval = self.frame_interval;
        TimerHandle::spawn(move |cancel| async move {
            let start = clock.now();
            let mut frames = interval(frame_interval);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last = Duration::ZERO;
            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return,
                    _ = frames.tick() => {}
                }
                if cancel.is_cancelled() {
                    return;
                }
                let elapsed = clock.now().saturating_duration_since(start).max(last);
                if elapsed >= duration {
                    on_frame(duration);
                    on_complete();
                    return;
                }
                on_frame(elapsed);
                last = elapsed;
            }
        })
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("frame_interval", &self.frame_interval)
            .finish_non_exhaustive()
    }
}
