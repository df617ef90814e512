use chrono::{NaiveDate, NaiveDateTime};
use mission_core::{update, AppState, LogCategory, LogFeed, Msg, SCRIPT};

fn at(secs: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
        + chrono::Duration::seconds(i64::from(secs))
}

fn mounted() -> AppState {
    update(AppState::new(), Msg::Mounted).0
}

fn tick(state: AppState, secs: u32) -> AppState {
    update(state, Msg::FeedTick { at: at(secs) }).0
}

#[test]
fn window_never_exceeds_capacity() {
    let mut feed = LogFeed::new(15);
    for n in 1..=60u32 {
        feed.tick(at(n));
        assert!(feed.len() <= 15);
        assert_eq!(feed.len(), (n as usize).min(15));
    }
}

#[test]
fn oldest_entry_tracks_script_position() {
    let mut feed = LogFeed::new(15);
    for n in 1..=100usize {
        feed.tick(at(n as u32));
        if n >= 15 {
            // Tick n shows scripted messages n-14..=n (1-based, cyclic).
            let oldest = feed.entries().next().unwrap();
            assert_eq!(oldest.text, SCRIPT[(n - 15) % SCRIPT.len()].1, "after tick {n}");
            let newest = feed.entries().last().unwrap();
            assert_eq!(newest.text, SCRIPT[(n - 1) % SCRIPT.len()].1);
        }
    }
}

#[test]
fn entries_follow_script_order_with_unique_ids() {
    let mut feed = LogFeed::new(30);
    for n in 1..=26 {
        feed.tick(at(n));
    }
    let entries: Vec<_> = feed.entries().collect();
    assert_eq!(entries[0].text, "[SCAN] Initializing LinkedIn scraper...");
    assert_eq!(entries[0].category, LogCategory::Info);
    assert_eq!(entries[4].category, LogCategory::Warning);
    assert_eq!(entries[24].text, SCRIPT[0].1);
    assert!(entries.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[test]
fn timestamps_never_go_backwards() {
    let mut feed = LogFeed::new(15);
    feed.tick(at(10));
    feed.tick(at(5));
    feed.tick(at(12));
    let stamps: Vec<_> = feed.entries().map(|e| e.clock_label()).collect();
    assert_eq!(stamps, vec!["09:00:10", "09:00:10", "09:00:12"]);
}

#[test]
fn no_entry_appended_after_teardown() {
    let mut state = mounted();
    for n in 1..=3 {
        state = tick(state, n);
    }
    assert_eq!(state.feed().len(), 3);

    let (mut state, _effects) = update(state, Msg::Unmounted);
    state.consume_dirty();
    for n in 4..=10 {
        state = tick(state, n);
    }
    assert_eq!(state.feed().len(), 3);
    assert_eq!(state.feed().ticks(), 3);
    assert!(!state.consume_dirty());
}

#[test]
fn ticks_before_mount_are_ignored() {
    let state = tick(AppState::new(), 1);
    assert!(state.feed().is_empty());
}

#[test]
fn view_rows_carry_clock_labels() {
    let state = tick(mounted(), 65);
    let rows = state.view().log_rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].clock, "09:01:05");
    assert_eq!(rows[0].category, LogCategory::Info);
}
