use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mission_engine::{FrameScheduler, MonotonicClock, TimerHandle, TokioClock};
use pretty_assertions::assert_eq;
use tokio::time::{sleep, Instant};

fn counter() -> (Arc<AtomicU64>, impl FnMut(u64) + Send + 'static) {
    let count = Arc::new(AtomicU64::new(0));
    let sink = count.clone();
    (count, move |_tick| {
        sink.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test(start_paused = true)]
async fn interval_ticks_once_per_period() {
    let (count, on_tick) = counter();
    let _timer = TimerHandle::interval(Duration::from_millis(1_200), on_tick);

    sleep(Duration::from_millis(1_100)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(3_000)).await;
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn interval_passes_increasing_tick_numbers() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let timer = TimerHandle::interval(Duration::from_millis(10), move |tick| {
        sink.lock().unwrap().push(tick);
    });

    sleep(Duration::from_millis(45)).await;
    timer.stop();
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn no_tick_after_stop() {
    let (count, on_tick) = counter();
    let timer = TimerHandle::interval(Duration::from_millis(100), on_tick);

    sleep(Duration::from_millis(350)).await;
    timer.stop();
    let at_stop = count.load(Ordering::SeqCst);
    assert_eq!(at_stop, 3);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), at_stop);
    assert!(timer.is_finished());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_timer() {
    let (count, on_tick) = counter();
    let timer = TimerHandle::interval(Duration::from_millis(100), on_tick);

    sleep(Duration::from_millis(250)).await;
    drop(timer);
    sleep(Duration::from_secs(5)).await;

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn one_shot_fires_once_after_delay() {
    let (count, mut on_tick) = counter();
    let _timer = TimerHandle::once(Duration::from_millis(2_000), move || on_tick(1));

    sleep(Duration::from_millis(1_999)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn stopped_one_shot_never_fires() {
    let (count, mut on_tick) = counter();
    let timer = TimerHandle::once(Duration::from_millis(2_000), move || on_tick(1));

    sleep(Duration::from_millis(500)).await;
    timer.stop();
    sleep(Duration::from_secs(10)).await;

    assert_eq!(count.load(Ordering::SeqCst), 0);
}

struct Recorder {
    frames: Mutex<Vec<Duration>>,
    completions: AtomicU64,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            frames: Mutex::new(Vec::new()),
            completions: AtomicU64::new(0),
        })
    }

    fn run(self: &Arc<Self>, scheduler: &FrameScheduler, duration: Duration) -> TimerHandle {
        let frames = self.clone();
        let done = self.clone();
        scheduler.run(
            duration,
            move |elapsed| frames.frames.lock().unwrap().push(elapsed),
            move || {
                done.completions.fetch_add(1, Ordering::SeqCst);
            },
        )
    }
}

#[tokio::test(start_paused = true)]
async fn animation_frames_are_monotonic_and_end_at_duration() {
    let scheduler = FrameScheduler::new(Arc::new(TokioClock), Duration::from_millis(16));
    let recorder = Recorder::new();
    let duration = Duration::from_millis(2_500);
    let _timer = recorder.run(&scheduler, duration);

    sleep(Duration::from_secs(5)).await;

    let frames = recorder.frames.lock().unwrap().clone();
    assert!(frames.len() > 100);
    assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(frames.first(), Some(&Duration::ZERO));
    assert_eq!(frames.last(), Some(&duration));
    assert_eq!(recorder.completions.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn cancelled_animation_never_completes() {
    let scheduler = FrameScheduler::new(Arc::new(TokioClock), Duration::from_millis(16));
    let recorder = Recorder::new();
    let timer = recorder.run(&scheduler, Duration::from_millis(1_000));

    sleep(Duration::from_millis(300)).await;
    drop(timer);
    let frames_at_cancel = recorder.frames.lock().unwrap().len();
    sleep(Duration::from_secs(5)).await;

    assert_eq!(recorder.frames.lock().unwrap().len(), frames_at_cancel);
    assert_eq!(recorder.completions.load(Ordering::SeqCst), 0);
}

/// Advances a fixed step on every read, independent of the runtime clock.
struct SteppingClock {
    now: Mutex<Instant>,
    step: Duration,
}

impl MonotonicClock for SteppingClock {
    fn now(&self) -> Instant {
        let mut now = self.now.lock().unwrap();
        let current = *now;
        *now += self.step;
        current
    }
}

#[tokio::test(start_paused = true)]
async fn animation_reads_injected_clock() {
    let clock = SteppingClock {
        now: Mutex::new(Instant::now()),
        step: Duration::from_millis(400),
    };
    let scheduler = FrameScheduler::new(Arc::new(clock), Duration::from_millis(1));
    let recorder = Recorder::new();
    let _timer = recorder.run(&scheduler, Duration::from_millis(1_000));

    sleep(Duration::from_millis(50)).await;

    // Start reads t=0, then frames read 400, 800, 1200 (clamped to 1000).
    let frames = recorder.frames.lock().unwrap().clone();
    assert_eq!(
        frames,
        vec![
            Duration::from_millis(400),
            Duration::from_millis(800),
            Duration::from_millis(1_000),
        ]
    );
    assert_eq!(recorder.completions.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn zero_length_animation_completes_on_first_frame() {
    let scheduler = FrameScheduler::new(Arc::new(TokioClock), Duration::from_millis(16));
    let recorder = Recorder::new();
    let _timer = recorder.run(&scheduler, Duration::ZERO);

    sleep(Duration::from_millis(100)).await;

    assert_eq!(*recorder.frames.lock().unwrap(), vec![Duration::ZERO]);
    assert_eq!(recorder.completions.load(Ordering::SeqCst), 1);
}
