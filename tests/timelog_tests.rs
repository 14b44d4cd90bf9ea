mod common;
use common::{TWO_DAY_LOG, dt};

use chrono::Duration;
use punch::core::parser::parse_log;
use punch::core::{BreakState, ClockState, Command, FixedClock, MemoryStore, TimeLog, Transition};
use punch::errors::AppError;

fn empty_log(now: &str) -> TimeLog<MemoryStore, FixedClock> {
    TimeLog::load(MemoryStore::default(), FixedClock::new(dt(now))).unwrap()
}

#[test]
fn test_full_day_round_trip() {
    let mut log = empty_log("2024-01-05 09:00");

    assert!(log.punch_in().unwrap().is_accepted());
    log.clock_mut().set(dt("2024-01-05 12:00"));
    assert!(log.start_break().unwrap().is_accepted());
    log.clock_mut().set(dt("2024-01-05 12:30"));
    assert!(log.end_break().unwrap().is_accepted());
    log.clock_mut().set(dt("2024-01-05 17:30"));
    assert!(log.punch_out().unwrap().is_accepted());

    assert_eq!(
        log.store().content(),
        "\nJan 05, 2024\n  P_IN::09:00\n  B_IN::12:00\n  B_OUT::12:30\n  P_OUT::17:30\n  TIME::8.00H\n"
    );

    let reparsed = parse_log(log.store().content()).unwrap();
    assert_eq!(reparsed, log.entries());

    let totals = log.totals().unwrap();
    assert_eq!(totals.elapsed_minutes, 510);
    assert_eq!(totals.break_minutes, 30);
    assert!((totals.net_hours() - 8.0).abs() < 1e-9);
}

#[test]
fn test_every_append_stays_parseable() {
    let mut log = empty_log("2024-01-05 09:00");
    let steps = [
        Command::In,
        Command::BreakStart,
        Command::BreakEnd,
        Command::BreakStart,
        Command::BreakEnd,
        Command::Out,
    ];

    for cmd in steps {
        log.clock_mut().advance(Duration::minutes(45));
        assert!(log.apply(cmd).unwrap().is_accepted(), "{cmd} rejected");
        let reparsed = parse_log(log.store().content()).unwrap();
        assert_eq!(reparsed, log.entries());
    }

    assert_eq!(log.entries()[0].breaks().len(), 2);
}

#[test]
fn test_second_day_appends_new_entry() {
    let store = MemoryStore::new(TWO_DAY_LOG);
    let mut log = TimeLog::load(store, FixedClock::new(dt("2024-01-08 17:00"))).unwrap();

    assert!(log.punch_out().unwrap().is_accepted());
    log.clock_mut().set(dt("2024-01-09 08:30"));
    assert!(log.punch_in().unwrap().is_accepted());

    let entries = parse_log(log.store().content()).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(log.focus_entry().unwrap().date(), dt("2024-01-09 00:00").date());
}

#[test]
fn test_seconds_are_dropped_from_written_times() {
    let at = dt("2024-01-05 09:00") + Duration::seconds(42);
    let mut log = TimeLog::load(MemoryStore::default(), FixedClock::new(at)).unwrap();

    match log.punch_in().unwrap() {
        Transition::Accepted { at, .. } => assert_eq!(at, dt("2024-01-05 09:00")),
        other => panic!("expected acceptance, got {:?}", other),
    }
    assert!(log.store().content().contains("P_IN::09:00"));
}

#[test]
fn test_rejected_commands_do_not_touch_the_log() {
    let mut log = empty_log("2024-01-05 09:00");

    for cmd in [Command::Out, Command::BreakStart, Command::BreakEnd] {
        let transition = log.apply(cmd).unwrap();
        assert_eq!(
            transition,
            Transition::Rejected {
                command: cmd,
                state: ClockState::PunchedOut,
                available: vec![Command::In, Command::State],
            }
        );
    }
    assert_eq!(log.store().content(), "");
    assert!(log.entries().is_empty());

    log.punch_in().unwrap();
    log.clock_mut().set(dt("2024-01-05 12:00"));
    log.start_break().unwrap();
    let before = log.store().content().to_string();
    let entries_before = log.entries().to_vec();

    for cmd in [Command::In, Command::Out, Command::BreakStart] {
        assert!(!log.apply(cmd).unwrap().is_accepted());
    }
    assert_eq!(log.store().content(), before);
    assert_eq!(log.entries(), entries_before.as_slice());
}

#[test]
fn test_state_transition_table() {
    use BreakState::*;
    use ClockState::*;

    assert_eq!(PunchedOut.available_commands(), vec![Command::In, Command::State]);
    assert_eq!(
        PunchedIn(OffBreak).available_commands(),
        vec![Command::Out, Command::BreakStart, Command::State]
    );
    assert_eq!(
        PunchedIn(OnBreak).available_commands(),
        vec![Command::BreakEnd, Command::State]
    );

    assert_eq!(PunchedOut.next(Command::In), Some(PunchedIn(OffBreak)));
    assert_eq!(PunchedIn(OffBreak).next(Command::BreakStart), Some(PunchedIn(OnBreak)));
    assert_eq!(PunchedIn(OnBreak).next(Command::BreakEnd), Some(PunchedIn(OffBreak)));
    assert_eq!(PunchedIn(OffBreak).next(Command::Out), Some(PunchedOut));
    assert_eq!(PunchedIn(OnBreak).next(Command::Out), None);
    assert_eq!(PunchedIn(OffBreak).next(Command::In), None);
}

#[test]
fn test_state_follows_last_entry() {
    let mut log = empty_log("2024-01-05 09:00");
    assert_eq!(log.clock_state(), ClockState::PunchedOut);

    log.punch_in().unwrap();
    assert_eq!(log.clock_state(), ClockState::PunchedIn(BreakState::OffBreak));

    log.start_break().unwrap();
    assert_eq!(log.clock_state(), ClockState::PunchedIn(BreakState::OnBreak));
}

#[test]
fn test_focus_redirect_is_read_only() {
    let store = MemoryStore::new(TWO_DAY_LOG);
    let mut log = TimeLog::load(store, FixedClock::new(dt("2024-01-08 13:00"))).unwrap();

    assert_eq!(log.focus_entry().unwrap().date(), dt("2024-01-08 00:00").date());

    log.focus_on(2).unwrap();
    assert_eq!(log.focus_entry().unwrap().date(), dt("2024-01-05 00:00").date());
    assert_eq!(log.focus_state(), ClockState::PunchedOut);
    // writes still gate on the last entry
    assert_eq!(log.clock_state(), ClockState::PunchedIn(BreakState::OffBreak));
    assert!((log.totals().unwrap().net_hours() - 8.0).abs() < 1e-9);

    assert!(log.start_break().unwrap().is_accepted());
    assert_eq!(log.focus_entry().unwrap().date(), dt("2024-01-08 00:00").date());
    assert_eq!(log.entries()[0].breaks().len(), 1);
    assert_eq!(log.entries()[1].open_break(), Some(dt("2024-01-08 13:00").time()));
}

#[test]
fn test_focus_index_out_of_range() {
    let mut log = TimeLog::load(
        MemoryStore::new(TWO_DAY_LOG),
        FixedClock::new(dt("2024-01-08 13:00")),
    )
    .unwrap();

    assert!(matches!(
        log.focus_on(3),
        Err(AppError::InvalidIndex { index: 3, len: 2 })
    ));
    assert!(matches!(log.focus_on(0), Err(AppError::InvalidIndex { .. })));
}

#[test]
fn test_load_rejects_malformed_store() {
    let store = MemoryStore::new("Jan 05, 2024\n  P_IN::09:00\n  B_OUT::10:00\n");
    let result = TimeLog::load(store, FixedClock::new(dt("2024-01-05 12:00")));
    assert!(matches!(result, Err(AppError::MalformedLog { line: 3, .. })));
}

#[test]
fn test_reporting_on_empty_log() {
    let log = empty_log("2024-01-05 09:00");
    assert!(log.focus_entry().is_none());
    assert!(matches!(log.totals(), Err(AppError::NoEntries)));
    assert!(matches!(log.projection(), Err(AppError::NoEntries)));
}

#[test]
fn test_append_after_unterminated_last_line() {
    let store = MemoryStore::new("Jan 05, 2024\n  P_IN::09:00");
    let mut log = TimeLog::load(store, FixedClock::new(dt("2024-01-05 12:00"))).unwrap();

    assert!(log.start_break().unwrap().is_accepted());
    assert_eq!(
        log.store().content(),
        "Jan 05, 2024\n  P_IN::09:00\n  B_IN::12:00\n"
    );
    assert_eq!(parse_log(log.store().content()).unwrap(), log.entries());
}

#[test]
fn test_punch_in_after_unterminated_sealed_entry() {
    let store = MemoryStore::new("Jan 05, 2024\n  P_IN::09:00\n  P_OUT::17:00");
    let mut log = TimeLog::load(store, FixedClock::new(dt("2024-01-06 09:00"))).unwrap();

    assert!(log.punch_in().unwrap().is_accepted());
    assert_eq!(
        log.store().content(),
        "Jan 05, 2024\n  P_IN::09:00\n  P_OUT::17:00\n\nJan 06, 2024\n  P_IN::09:00\n"
    );

    let reparsed = parse_log(log.store().content()).unwrap();
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed, log.entries());
}

#[test]
fn test_night_shift_totals_match_projection() {
    let mut log = empty_log("2024-01-05 22:00");
    log.punch_in().unwrap();

    log.clock_mut().set(dt("2024-01-06 01:00"));
    let projected = log.projection().unwrap();
    assert_eq!(projected.worked_minutes(), 180);

    assert!(log.punch_out().unwrap().is_accepted());
    assert_eq!(log.totals().unwrap().net_minutes(), 180);
    assert!(log.store().content().ends_with("  P_OUT::01:00\n  TIME::3.00H\n"));
    assert_eq!(parse_log(log.store().content()).unwrap(), log.entries());
}

#[test]
fn test_event_a_day_after_punch_in_is_refused() {
    let mut log = empty_log("2024-01-05 09:00");
    log.punch_in().unwrap();
    let before = log.store().content().to_string();

    log.clock_mut().set(dt("2024-01-06 09:30"));
    assert!(matches!(log.punch_out(), Err(AppError::IncompleteEntry(_))));

    log.clock_mut().set(dt("2024-01-05 08:00"));
    assert!(matches!(log.start_break(), Err(AppError::IncompleteEntry(_))));

    assert_eq!(log.store().content(), before);
    assert!(!log.entries()[0].is_sealed());
}
