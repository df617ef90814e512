use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Owned handle to one running timer task.
///
/// The timer lives exactly as long as the handle: `stop()` or dropping the
/// handle cancels it, and the callback is never invoked afterwards. Must be
/// created from within a tokio runtime.
#[derive(Debug)]
pub struct TimerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Spawns `body` with a token that is cancelled when the handle stops.
    pub fn spawn<F, Fut>(body: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(body(cancel.clone()));
        Self { cancel, task }
    }

    /// Repeating timer. First tick fires one `period` after start; the
    /// callback receives the 1-based tick count.
    pub fn interval<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) + Send + 'static,
    {
        Self::spawn(move |cancel| async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut count = 0u64;
            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return,
                    _ = ticker.tick() => {}
                }
                if cancel.is_cancelled() {
                    return;
                }
                count += 1;
                on_tick(count);
            }
        })
    }

    /// One-shot timer that fires after `delay` unless stopped first.
    pub fn once<F>(delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn(move |cancel| async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                _ = sleep(delay) => {}
            }
            if !cancel.is_cancelled() {
                on_fire();
            }
        })
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True once the task has returned, either on its own or after `stop()`.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
