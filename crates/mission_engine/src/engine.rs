use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use mission_logging::{mission_debug, mission_info, mission_warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::scheduler::FrameScheduler;
use crate::timer::TimerHandle;
use crate::types::{EngineConfig, EngineError, EngineEvent, RequestId, WallClock};

#[derive(Debug)]
enum EngineCommand {
    StartFeed { interval: Duration },
    StopFeed,
    StartCounter { duration: Duration },
    StopCounter,
    ScheduleAnalysis { request_id: RequestId, delay: Duration },
    CancelAnalysis { request_id: RequestId },
    Shutdown,
}

/// Owns the timer worker thread.
///
/// Commands are queued to a single-threaded tokio runtime; events come back
/// on a channel the UI loop drains with [`EngineHandle::try_recv`]. Dropping
/// the handle stops every timer and joins the worker.
pub struct EngineHandle {
    cmd_tx: UnboundedSender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(EngineError::Runtime)?;

        let worker = thread::Builder::new()
            .name("mission-engine".to_string())
            .spawn(move || runtime.block_on(run_worker(config, cmd_rx, event_tx)))
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx,
            event_rx,
            worker: Some(worker),
        })
    }

    pub fn start_feed(&self, interval: Duration) {
        self.send(EngineCommand::StartFeed { interval });
    }

    pub fn stop_feed(&self) {
        self.send(EngineCommand::StopFeed);
    }

    pub fn start_counter(&self, duration: Duration) {
        self.send(EngineCommand::StartCounter { duration });
    }

    pub fn stop_counter(&self) {
        self.send(EngineCommand::StopCounter);
    }

    pub fn schedule_analysis(&self, request_id: RequestId, delay: Duration) {
        self.send(EngineCommand::ScheduleAnalysis { request_id, delay });
    }

    pub fn cancel_analysis(&self, request_id: RequestId) {
        self.send(EngineCommand::CancelAnalysis { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Stops all timers and waits for the worker to exit. Idempotent.
    pub fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        self.send(EngineCommand::Shutdown);
        if worker.join().is_err() {
            mission_warn!("engine worker panicked during shutdown");
        }
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            mission_debug!("engine worker gone; command dropped");
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[derive(Default)]
struct Timers {
    feed: Option<TimerHandle>,
    counter: Option<TimerHandle>,
    analyses: HashMap<RequestId, TimerHandle>,
}

struct Worker {
    scheduler: FrameScheduler,
    wall_clock: WallClock,
    event_tx: mpsc::Sender<EngineEvent>,
    timers: Timers,
}

async fn run_worker(
    config: EngineConfig,
    mut cmd_rx: UnboundedReceiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let mut worker = Worker {
        scheduler: FrameScheduler::new(config.monotonic_clock, config.frame_interval),
        wall_clock: config.wall_clock,
        event_tx,
        timers: Timers::default(),
    };
    mission_info!(
        "engine worker started (frame interval {:?})",
        worker.scheduler.frame_interval()
    );

    while let Some(command) = cmd_rx.recv().await {
        if matches!(command, EngineCommand::Shutdown) {
            break;
        }
        worker.handle(command);
    }

    // Dropping the handles cancels whatever is still running.
    worker.timers = Timers::default();
    mission_info!("engine worker stopped");
}

impl Worker {
    fn handle(&mut self, command: EngineCommand) {
        mission_debug!("engine command {:?}", command);
        self.timers.analyses.retain(|_, timer| !timer.is_finished());

        match command {
            EngineCommand::StartFeed { interval } => {
                let event_tx = self.event_tx.clone();
                let wall_clock = self.wall_clock.clone();
                let period = interval.max(Duration::from_millis(1));
                self.timers.feed = Some(TimerHandle::interval(period, move |_tick| {
                    let _ = event_tx.send(EngineEvent::FeedTick { at: (*wall_clock)() });
                }));
            }
            EngineCommand::StopFeed => {
                self.timers.feed = None;
            }
            EngineCommand::StartCounter { duration } => {
                let frame_tx = self.event_tx.clone();
                let done_tx = self.event_tx.clone();
                self.timers.counter = Some(self.scheduler.run(
                    duration,
                    move |elapsed| {
                        let _ = frame_tx.send(EngineEvent::CounterFrame { elapsed });
                    },
                    move || {
                        let _ = done_tx.send(EngineEvent::CounterCompleted);
                    },
                ));
            }
            EngineCommand::StopCounter => {
                self.timers.counter = None;
            }
            EngineCommand::ScheduleAnalysis { request_id, delay } => {
                let event_tx = self.event_tx.clone();
                let timer = TimerHandle::once(delay, move || {
                    let _ = event_tx.send(EngineEvent::AnalysisReady { request_id });
                });
                self.timers.analyses.insert(request_id, timer);
            }
            EngineCommand::CancelAnalysis { request_id } => {
                self.timers.analyses.remove(&request_id);
            }
            EngineCommand::Shutdown => {}
        }
    }
}
