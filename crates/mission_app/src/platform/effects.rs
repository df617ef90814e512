use mission_core::{Effect, Msg};
use mission_engine::{EngineConfig, EngineError, EngineEvent, EngineHandle};
use mission_logging::{mission_debug, mission_info};

/// Executes core effects on the engine and turns engine events into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(config)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartCounter { duration } => {
                    mission_info!("StartCounter duration={:?}", duration);
                    self.engine.start_counter(duration);
                }
                Effect::StopCounter => {
                    mission_info!("StopCounter");
                    self.engine.stop_counter();
                }
                Effect::StartFeed { interval } => {
                    mission_info!("StartFeed interval={:?}", interval);
                    self.engine.start_feed(interval);
                }
                Effect::StopFeed => {
                    mission_info!("StopFeed");
                    self.engine.stop_feed();
                }
                Effect::ScheduleAnalysis { request_id, delay } => {
                    mission_info!("ScheduleAnalysis request_id={} delay={:?}", request_id, delay);
                    self.engine.schedule_analysis(request_id, delay);
                }
                Effect::CancelAnalysis { request_id } => {
                    mission_info!("CancelAnalysis request_id={}", request_id);
                    self.engine.cancel_analysis(request_id);
                }
            }
        }
    }

    /// Drains everything the engine produced since the last call.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    pub fn shutdown(&mut self) {
        mission_debug!("shutting down engine");
        self.engine.shutdown();
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FeedTick { at } => Msg::FeedTick { at },
        EngineEvent::CounterFrame { elapsed } => Msg::CounterFrame { elapsed },
        EngineEvent::CounterCompleted => Msg::CounterCompleted,
        EngineEvent::AnalysisReady { request_id } => Msg::AnalysisReady { request_id },
    }
}
