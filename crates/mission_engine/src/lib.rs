//! Mission control engine: the timers behind the dashboard.
//!
//! Every timer is owned by a [`TimerHandle`]; dropping the handle stops it.
//! [`EngineHandle`] runs them on a single-threaded runtime and reports
//! [`EngineEvent`]s back to the UI loop.
mod engine;
mod scheduler;
mod timer;
mod types;

pub use engine::EngineHandle;
pub use scheduler::{FrameScheduler, MonotonicClock, TokioClock};
pub use timer::TimerHandle;
pub use types::{EngineConfig, EngineError, EngineEvent, RequestId, WallClock};
