use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event};
use mission_core::{update, AppState, Msg, RequestId, FALLBACK_COMPANY};
use mission_logging::{mission_debug, mission_info, set_loop_tick};
use ratatui::DefaultTerminal;

use super::config::{config_path, load_config};
use super::effects::EffectRunner;
use super::input::{map_key, InputAction};
use super::logging;
use super::ui::render::render;

const FRAME_BUDGET: Duration = Duration::from_millis(16);
// Spinner cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let loaded = load_config(&config_path());
    let log_warning = logging::initialize(&loaded.config);
    loaded.log_outcome();

    let runner =
        EffectRunner::new(loaded.config.engine_config()).context("failed to start engine")?;
    let mut app = App::new(AppState::with_settings(loaded.config.dashboard_settings()), runner);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    app.runner.shutdown();
    ratatui::restore();

    if let Some(warning) = log_warning {
        eprintln!("{warning}");
    }
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
    loop_tick: u64,
    needs_redraw: bool,
}

impl App {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            loop_tick: 0,
            needs_redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        mission_info!("dashboard starting");
        self.dispatch(Msg::Mounted);
        let mut last_tick = Instant::now();

        loop {
            self.loop_tick += 1;
            set_loop_tick(self.loop_tick);

            if self.needs_redraw {
                let view = self.state.view();
                terminal
                    .draw(|frame| render(frame, &view))
                    .context("failed to draw dashboard")?;
                self.needs_redraw = false;
            }

            if event::poll(FRAME_BUDGET).context("failed to poll terminal events")? {
                match event::read().context("failed to read terminal event")? {
                    Event::Key(key) => match map_key(key, &self.state.view()) {
                        InputAction::Dispatch(msg) => self.dispatch(msg),
                        InputAction::Quit => break,
                        InputAction::Ignore => {}
                    },
                    Event::Resize(..) => self.needs_redraw = true,
                    _ => {}
                }
            }

            for msg in self.runner.poll() {
                self.dispatch(msg);
            }

            if last_tick.elapsed() >= TICK_INTERVAL {
                self.dispatch(Msg::Tick);
                last_tick = Instant::now();
            }
        }

        self.dispatch(Msg::Unmounted);
        mission_info!("dashboard stopped after {} loop ticks", self.loop_tick);
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        if !matches!(msg, Msg::Tick | Msg::CounterFrame { .. }) {
            mission_debug!("dispatch {:?}", msg);
        }
        let ready = match msg {
            Msg::AnalysisReady { request_id } => Some(request_id),
            _ => None,
        };
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.enqueue(effects);
        let changed = state.consume_dirty();
        if let Some(request_id) = ready {
            log_analysis(request_id, changed, &state);
        }
        self.needs_redraw |= changed;
        self.state = state;
    }
}

fn log_analysis(request_id: RequestId, completed: bool, state: &AppState) {
    let Some(result) = state.analyzer().result().filter(|_| completed) else {
        mission_info!("analysis {} discarded", request_id);
        return;
    };
    if result.company_name == FALLBACK_COMPANY {
        mission_debug!("analysis {}: input is not a URL; using fallback", request_id);
    }
    mission_info!("analysis {} completed for {}", request_id, result.company_name);
}
