use crate::{AppState, Effect, Lifecycle, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.lifecycle() == Lifecycle::Mounted {
                return (state, Vec::new());
            }
            state.set_lifecycle(Lifecycle::Mounted);
            state.counter_mut().restart();
            state.feed_mut().resume();
            state.mark_dirty();
            let settings = state.settings();
            vec![
                Effect::StartCounter {
                    duration: settings.counter.duration,
                },
                Effect::StartFeed {
                    interval: settings.feed.interval,
                },
            ]
        }
        Msg::Unmounted => {
            if state.lifecycle() != Lifecycle::Mounted {
                return (state, Vec::new());
            }
            state.set_lifecycle(Lifecycle::TornDown);
            state.feed_mut().tear_down();
            state.mark_dirty();
            let mut effects = vec![Effect::StopFeed, Effect::StopCounter];
            if let Some(request_id) = state.analyzer_mut().reset() {
                effects.push(Effect::CancelAnalysis { request_id });
            }
            effects
        }
        Msg::CounterFrame { elapsed } => {
            if state.lifecycle() == Lifecycle::Mounted && state.counter_mut().advance(elapsed) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CounterCompleted => {
            if state.lifecycle() == Lifecycle::Mounted && state.counter_mut().complete() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FeedTick { at } => {
            // Late ticks after teardown are dropped by the feed itself.
            if state.lifecycle() == Lifecycle::Mounted && state.feed_mut().tick(at).is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::InputChanged(text) => {
            if state.analyzer_mut().set_input(text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AnalyzeSubmitted => match state.analyzer_mut().submit() {
            Some(request_id) => {
                state.mark_dirty();
                vec![Effect::ScheduleAnalysis {
                    request_id,
                    delay: state.settings().analyzer.delay,
                }]
            }
            None => Vec::new(),
        },
        Msg::AnalysisReady { request_id } => {
            if state.analyzer_mut().complete(request_id).is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ResetClicked => {
            let abandoned = state.analyzer_mut().reset();
            state.mark_dirty();
            match abandoned {
                Some(request_id) => vec![Effect::CancelAnalysis { request_id }],
                None => Vec::new(),
            }
        }
        Msg::AlertClicked => {
            if state.set_alert_open(true) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AlertDismissed => {
            if state.set_alert_open(false) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick => {
            if state.analyzer().is_busy() {
                state.advance_spinner();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
