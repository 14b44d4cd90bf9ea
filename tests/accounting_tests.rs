mod common;
use common::dt;

use punch::core::calculator::projection::{DEFAULT_WORK_DAY_HOURS, project};
use punch::core::calculator::totals::sealed_totals;
use punch::core::logic::Core;
use punch::core::parser::parse_log;
use punch::errors::AppError;
use punch::models::DaySummary;
use punch::models::entry::Entry;
use punch::utils::formatting::remaining_label;

fn one_entry(text: &str) -> Entry {
    parse_log(text).unwrap().remove(0)
}

#[test]
fn test_sealed_totals_net_of_breaks() {
    let entry = one_entry("Jan 05, 2024\n  P_IN::09:00\n  B_IN::12:00\n  B_OUT::12:30\n  P_OUT::17:30\n");
    let totals = sealed_totals(&entry).unwrap();

    assert!((totals.elapsed_hours() - 8.5).abs() < 1e-9);
    assert_eq!(totals.break_minutes, 30);
    assert!((totals.net_hours() - 8.0).abs() < 1e-9);
}

#[test]
fn test_sealed_totals_sum_several_breaks() {
    let entry = one_entry(
        "Jan 05, 2024\n  P_IN::08:00\n  B_IN::10:00\n  B_OUT::10:15\n  B_IN::12:00\n  B_OUT::12:45\n  P_OUT::16:00\n",
    );
    let totals = sealed_totals(&entry).unwrap();

    assert_eq!(totals.elapsed_minutes, 480);
    assert_eq!(totals.break_minutes, 60);
    assert_eq!(totals.net_minutes(), 420);
}

#[test]
fn test_sealed_totals_need_punch_out() {
    let entry = one_entry("Jan 05, 2024\n  P_IN::09:00\n");
    assert!(matches!(
        sealed_totals(&entry),
        Err(AppError::IncompleteEntry(_))
    ));
}

#[test]
fn test_projection_four_hours_in() {
    let entry = one_entry("Jan 05, 2024\n  P_IN::09:00\n");
    let p = project(&entry, dt("2024-01-05 13:00"), DEFAULT_WORK_DAY_HOURS).unwrap();

    assert_eq!(p.remaining_minutes, 240);
    assert_eq!(p.remaining_label(), "4H:0m");
    assert!((p.hours_so_far() - 4.0).abs() < 1e-9);
    assert_eq!(p.finish_at, dt("2024-01-05 17:00"));
    assert_eq!(p.finish_label(), "05:00PM");
    assert!(!p.on_break);
}

#[test]
fn test_projection_minutes_only_below_threshold() {
    let entry = one_entry("Jan 05, 2024\n  P_IN::09:00\n");

    let p = project(&entry, dt("2024-01-05 16:15"), 8.0).unwrap();
    assert_eq!(p.remaining_label(), "45m");

    let p = project(&entry, dt("2024-01-05 16:00"), 8.0).unwrap();
    assert_eq!(p.remaining_label(), "60m");

    let p = project(&entry, dt("2024-01-05 15:59"), 8.0).unwrap();
    assert_eq!(p.remaining_label(), "1H:1m");
}

#[test]
fn test_projection_counts_open_break_until_now() {
    let entry = one_entry("Jan 05, 2024\n  P_IN::09:00\n  B_IN::10:00\n  B_OUT::10:10\n  B_IN::12:00\n");
    let p = project(&entry, dt("2024-01-05 12:20"), 8.0).unwrap();

    assert_eq!(p.break_minutes, 30);
    assert_eq!(p.worked_minutes(), 170);
    assert_eq!(p.remaining_minutes, 310);
    assert_eq!(p.finish_at, dt("2024-01-05 17:30"));
    assert!(p.on_break);
}

#[test]
fn test_projection_custom_target_and_overtime() {
    let entry = one_entry("Jan 05, 2024\n  P_IN::09:00\n");

    let p = project(&entry, dt("2024-01-05 13:00"), 6.5).unwrap();
    assert_eq!(p.remaining_minutes, 150);
    assert_eq!(p.remaining_label(), "2H:30m");

    let p = project(&entry, dt("2024-01-05 17:15"), 8.0).unwrap();
    assert_eq!(p.remaining_minutes, -15);
    assert_eq!(p.remaining_label(), "-15m");
}

#[test]
fn test_projection_rejects_sealed_entry_and_bad_target() {
    let sealed = one_entry("Jan 05, 2024\n  P_IN::09:00\n  P_OUT::17:00\n");
    assert!(matches!(
        project(&sealed, dt("2024-01-05 18:00"), 8.0),
        Err(AppError::IncompleteEntry(_))
    ));

    let open = one_entry("Jan 05, 2024\n  P_IN::09:00\n");
    assert!(matches!(
        project(&open, dt("2024-01-05 12:00"), 0.5),
        Err(AppError::InvalidHours(_))
    ));
    assert!(matches!(
        project(&open, dt("2024-01-05 12:00"), 25.0),
        Err(AppError::InvalidHours(_))
    ));
}

#[test]
fn test_daily_summary_picks_view() {
    let entries = parse_log(common::TWO_DAY_LOG).unwrap();
    let now = dt("2024-01-08 12:45");

    let first = Core::build_daily_summary(&entries[0], now, 8.0).unwrap();
    assert!(matches!(first, DaySummary::Sealed(_)));
    assert_eq!(first.break_minutes(), 30);

    let second = Core::build_daily_summary(&entries[1], now, 8.0).unwrap();
    assert!(matches!(second, DaySummary::Open(_)));
    assert!((second.net_hours() - 4.0).abs() < 1e-9);
}

#[test]
fn test_remaining_label_formats() {
    assert_eq!(remaining_label(0), "0m");
    assert_eq!(remaining_label(61), "1H:1m");
    assert_eq!(remaining_label(480), "8H:0m");
}

#[test]
fn test_sealed_totals_across_midnight() {
    let entry = one_entry(
        "Jan 05, 2024\n  P_IN::22:00\n  B_IN::23:50\n  B_OUT::00:10\n  P_OUT::01:00\n",
    );
    let totals = sealed_totals(&entry).unwrap();

    assert_eq!(totals.elapsed_minutes, 180);
    assert_eq!(totals.break_minutes, 20);
    assert_eq!(totals.net_minutes(), 160);
}

#[test]
fn test_projection_and_totals_agree_after_midnight() {
    let open = one_entry("Jan 05, 2024\n  P_IN::22:00\n  B_IN::00:30\n");
    let p = project(&open, dt("2024-01-06 01:00"), 8.0).unwrap();

    assert_eq!(p.elapsed_minutes, 180);
    assert_eq!(p.break_minutes, 30);
    assert_eq!(p.worked_minutes(), 150);

    let sealed = one_entry(
        "Jan 05, 2024\n  P_IN::22:00\n  B_IN::00:30\n  B_OUT::01:00\n  P_OUT::01:00\n",
    );
    assert_eq!(sealed_totals(&sealed).unwrap().net_minutes(), p.worked_minutes());
}
