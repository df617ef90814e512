use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use mission_engine::{EngineConfig, EngineEvent, EngineHandle};

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(12, 30, 5)
        .unwrap()
}

fn engine() -> EngineHandle {
    let config = EngineConfig {
        frame_interval: Duration::from_millis(2),
        wall_clock: Arc::new(fixed_time),
        ..EngineConfig::default()
    };
    EngineHandle::new(config).expect("engine starts")
}

fn drain(engine: &EngineHandle) -> Vec<EngineEvent> {
    std::iter::from_fn(|| engine.try_recv()).collect()
}

#[test]
fn feed_ticks_carry_wall_clock_time() {
    let engine = engine();
    engine.start_feed(Duration::from_millis(10));

    let event = engine.recv_timeout(Duration::from_secs(2));
    assert_eq!(event, Some(EngineEvent::FeedTick { at: fixed_time() }));
}

#[test]
fn stopped_feed_goes_quiet() {
    let engine = engine();
    engine.start_feed(Duration::from_millis(5));
    assert!(engine.recv_timeout(Duration::from_secs(2)).is_some());

    engine.stop_feed();
    // Let the stop command land, then discard anything sent before it.
    thread::sleep(Duration::from_millis(50));
    drain(&engine);

    thread::sleep(Duration::from_millis(100));
    assert!(drain(&engine).is_empty());
}

#[test]
fn counter_runs_to_completion() {
    let engine = engine();
    engine.start_counter(Duration::from_millis(40));

    let mut events = Vec::new();
    while let Some(event) = engine.recv_timeout(Duration::from_secs(2)) {
        let done = event == EngineEvent::CounterCompleted;
        events.push(event);
        if done {
            break;
        }
    }

    assert_eq!(events.last(), Some(&EngineEvent::CounterCompleted));
    assert_eq!(
        events[events.len() - 2],
        EngineEvent::CounterFrame {
            elapsed: Duration::from_millis(40)
        }
    );
}

#[test]
fn analysis_delay_reports_request_id() {
    let engine = engine();
    engine.schedule_analysis(7, Duration::from_millis(20));

    let event = engine.recv_timeout(Duration::from_secs(2));
    assert_eq!(event, Some(EngineEvent::AnalysisReady { request_id: 7 }));
}

#[test]
fn cancelled_analysis_never_reports() {
    let engine = engine();
    engine.schedule_analysis(3, Duration::from_millis(150));
    engine.cancel_analysis(3);

    assert_eq!(engine.recv_timeout(Duration::from_millis(400)), None);
}

#[test]
fn shutdown_stops_everything() {
    let mut engine = engine();
    engine.start_feed(Duration::from_millis(5));
    engine.schedule_analysis(1, Duration::from_millis(100));
    engine.shutdown();
    drain(&engine);

    thread::sleep(Duration::from_millis(200));
    assert!(drain(&engine).is_empty());

    // Commands after shutdown are dropped quietly.
    engine.start_feed(Duration::from_millis(5));
    engine.shutdown();
}
