use std::time::Duration;

/// Ease-out cubic: fast start, gentle landing. `progress` is clamped to `[0, 1]`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value shown after `elapsed` of a `duration`-long run towards `target`.
pub fn eased_value(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    let value = (ease_out_cubic(progress) * target as f64).floor() as u64;
    value.min(target)
}

/// One run of the counter animation, from 0 up to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
    value: u64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            value: 0,
            finished: false,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Applies one frame. Returns true when the displayed value changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.finished {
            return false;
        }
        if elapsed >= self.duration {
            return self.complete();
        }
        // Frames can arrive out of order through the channel; never step back.
        let next = eased_value(self.target, elapsed, self.duration).max(self.value);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Snaps to the target. Returns true when the displayed value changed.
    pub fn complete(&mut self) -> bool {
        let changed = self.value != self.target || !self.finished;
        self.value = self.target;
        self.finished = true;
        changed
    }

    pub(crate) fn restart(&mut self) {
        self.value = 0;
        self.finished = false;
    }
}
