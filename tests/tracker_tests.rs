use chrono::{DateTime, Local, TimeZone};
use planningpro::errors::AppError;
use planningpro::models::tracker::{DailyTimeState, Transition, WorkStatus};

fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 10, h, m, s).unwrap()
}

#[test]
fn regular_day_with_one_break() {
    let mut st = DailyTimeState::new("2");

    st.start_day(at(8, 0, 0)).unwrap();
    st.start_break(at(12, 0, 0)).unwrap();
    let b = st.end_break(at(12, 15, 0)).unwrap();
    assert_eq!(b.duration_seconds, 900);

    let report = st.end_day(at(16, 0, 0)).unwrap();

    assert_eq!(report.total_work_seconds, 27_900);
    assert_eq!(report.total_break_seconds, 900);
    assert_eq!(report.break_intervals.len(), 1);
    assert_eq!(report.break_intervals[0].start, at(12, 0, 0));
    assert_eq!(report.break_intervals[0].end, at(12, 15, 0));
    assert_eq!(report.date_str(), "2025-06-10");
    assert_eq!(report.day_start, at(8, 0, 0));
    assert_eq!(report.day_end, at(16, 0, 0));
}

#[test]
fn end_day_resets_to_a_fresh_tracker() {
    let mut st = DailyTimeState::new("2");
    st.start_day(at(8, 0, 0)).unwrap();
    st.end_day(at(9, 0, 0)).unwrap();

    assert_eq!(st, DailyTimeState::new("2"));
    assert_eq!(st.status(), WorkStatus::Stopped);
    assert!(st.day_start().is_none());
}

#[test]
fn zero_length_break_is_recorded() {
    let mut st = DailyTimeState::new("2");
    st.start_day(at(8, 0, 0)).unwrap();
    st.start_break(at(10, 0, 0)).unwrap();
    st.end_break(at(10, 0, 0)).unwrap();

    let report = st.end_day(at(11, 0, 0)).unwrap();
    assert_eq!(report.break_intervals.len(), 1);
    assert_eq!(report.break_intervals[0].duration_seconds, 0);
    assert_eq!(report.total_break_seconds, 0);
    assert_eq!(report.total_work_seconds, 3 * 3600);
}

#[test]
fn ending_the_day_during_a_break_closes_it() {
    let mut st = DailyTimeState::new("2");
    st.start_day(at(8, 0, 0)).unwrap();
    st.start_break(at(12, 0, 0)).unwrap();

    let report = st.end_day(at(12, 30, 0)).unwrap();
    assert_eq!(report.total_work_seconds, 4 * 3600);
    assert_eq!(report.total_break_seconds, 1800);
    assert_eq!(report.break_intervals.len(), 1);
    assert_eq!(report.break_intervals[0].end, at(12, 30, 0));
}

#[test]
fn work_plus_break_covers_the_whole_day() {
    let mut st = DailyTimeState::new("2");
    st.start_day(at(7, 58, 13)).unwrap();
    st.start_break(at(9, 1, 7)).unwrap();
    st.end_break(at(9, 20, 0)).unwrap();
    st.start_break(at(12, 3, 59)).unwrap();
    st.end_break(at(13, 0, 1)).unwrap();
    st.start_break(at(15, 45, 0)).unwrap();

    let report = st.end_day(at(17, 2, 30)).unwrap();
    assert_eq!(
        report.total_work_seconds + report.total_break_seconds,
        report.span_seconds()
    );
    assert_eq!(report.break_intervals.len(), 3);
    assert_eq!(
        report
            .break_intervals
            .iter()
            .map(|b| b.duration_seconds)
            .sum::<i64>(),
        report.total_break_seconds
    );
}

#[test]
fn subsecond_instants_keep_the_sum_exact() {
    let start = at(8, 0, 0) + chrono::Duration::milliseconds(700);
    let pause = at(10, 0, 0) + chrono::Duration::milliseconds(300);
    let end = at(11, 0, 0) + chrono::Duration::milliseconds(900);

    let mut st = DailyTimeState::new("2");
    st.start_day(start).unwrap();
    st.start_break(pause).unwrap();
    let report = st.end_day(end).unwrap();

    assert_eq!(
        report.total_work_seconds + report.total_break_seconds,
        report.span_seconds()
    );
}

#[test]
fn invalid_transitions_are_refused_without_side_effects() {
    let mut st = DailyTimeState::new("2");

    let err = st.start_break(at(8, 0, 0)).unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidTransition {
            from: WorkStatus::Stopped,
            action: Transition::StartBreak
        }
    ));
    assert!(st.end_break(at(8, 0, 0)).is_err());
    assert!(st.end_day(at(8, 0, 0)).is_err());
    assert_eq!(st, DailyTimeState::new("2"));

    st.start_day(at(8, 0, 0)).unwrap();
    let before = st.clone();
    assert!(st.start_day(at(9, 0, 0)).is_err());
    assert!(st.end_break(at(9, 0, 0)).is_err());
    assert_eq!(st, before);

    st.start_break(at(10, 0, 0)).unwrap();
    let before = st.clone();
    let err = st.start_break(at(10, 5, 0)).unwrap_err();
    assert_eq!(err.to_string(), "Cannot start a break while on break");
    assert_eq!(st, before);
}

#[test]
fn live_totals_follow_the_open_segment() {
    let mut st = DailyTimeState::new("2");
    st.start_day(at(8, 0, 0)).unwrap();

    let t = st.live_totals(at(10, 0, 0));
    assert_eq!(t.work_seconds, 7200);
    assert_eq!(t.current_segment_seconds, 7200);

    st.start_break(at(10, 0, 0)).unwrap();
    let t = st.live_totals(at(10, 10, 0));
    assert_eq!(t.work_seconds, 7200);
    assert_eq!(t.break_seconds, 600);
    assert_eq!(t.current_segment_seconds, 600);

    // reading does not mutate
    assert_eq!(st.accumulated_break_seconds(), 0);
    assert_eq!(t.progress_percent(8 * 3600), 25.0);
}

#[test]
fn clock_skew_never_goes_negative() {
    let mut st = DailyTimeState::new("2");
    st.start_day(at(10, 0, 0)).unwrap();
    st.start_break(at(9, 0, 0)).unwrap();
    assert_eq!(st.accumulated_work_seconds(), 0);

    let t = st.live_totals(at(8, 0, 0));
    assert_eq!(t.break_seconds, 0);
}

#[test]
fn available_actions_match_the_phase() {
    let mut st = DailyTimeState::new("2");
    assert_eq!(st.available_actions(), &[Transition::StartDay]);

    st.apply(Transition::StartDay, at(8, 0, 0)).unwrap();
    assert_eq!(
        st.available_actions(),
        &[Transition::StartBreak, Transition::EndDay]
    );

    st.apply(Transition::StartBreak, at(9, 0, 0)).unwrap();
    assert_eq!(
        st.available_actions(),
        &[Transition::EndBreak, Transition::EndDay]
    );

    let report = st.apply(Transition::EndDay, at(9, 30, 0)).unwrap();
    assert!(report.is_some());
}

#[test]
fn state_survives_a_json_round_trip_mid_break() {
    let mut st = DailyTimeState::new("2");
    st.start_day(at(8, 0, 0)).unwrap();
    st.start_break(at(12, 0, 0)).unwrap();

    let json = serde_json::to_string(&st).unwrap();
    let back: DailyTimeState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, st);
    assert_eq!(back.break_started_at(), Some(at(12, 0, 0)));
}
