use crate::cli::commands::open_db;
use crate::cli::parser::{ClockAction, Commands};
use crate::config::Config;
use crate::core::clock::{ClockLogic, ClockSnapshot};
use crate::core::reports::ReportStats;
use crate::core::session::SessionLogic;
use crate::db::reports::{DbReportSink, load_reports};
use crate::errors::AppResult;
use crate::models::route::{EmployeeSection, Section};
use crate::models::session::Session;
use crate::models::tracker::{Phase, Transition};
use crate::ui::messages::{detail, header, success, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::week_bounds;
use crate::utils::formatting::{progress_bar, secs2clock, secs2readable};
use crate::utils::time::{hhmm, now_or};
use rusqlite::Connection;

/// `HH:MM-HH:MM`
const BREAK_SPAN_WIDTH: usize = 11;

fn transition_for(action: ClockAction) -> Option<Transition> {
    match action {
        ClockAction::Start => Some(Transition::StartDay),
        ClockAction::Break => Some(Transition::StartBreak),
        ClockAction::Resume => Some(Transition::EndBreak),
        ClockAction::End => Some(Transition::EndDay),
        ClockAction::Status => None,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, at: Option<&str>) -> AppResult<()> {
    if let Commands::Clock { action } = cmd {
        let pool = open_db(cfg)?;
        let manager = SessionLogic::manager(&pool.conn, cfg);
        let session = manager.require(Section::Employee(EmployeeSection::TimeTracking))?;
        let now = now_or(at)?;

        let Some(transition) = transition_for(*action) else {
            let snapshot = ClockLogic::snapshot(&pool.conn, session, now)?;
            return print_status(&pool.conn, session, &snapshot, cfg);
        };

        let sink = DbReportSink::new(&pool.conn);
        let outcome = ClockLogic::apply(&pool.conn, &sink, session, transition, now)?;
        let totals = outcome.state.live_totals(now);

        match transition {
            Transition::StartDay => success(format!("Day started at {}", hhmm(&now))),
            Transition::StartBreak => {
                success(format!("Break started at {}", hhmm(&now)));
                detail(format!("Worked so far: {}", secs2readable(totals.work_seconds)));
            }
            Transition::EndBreak => {
                success(format!("Back to work at {}", hhmm(&now)));
                if let Some(b) = outcome.state.break_intervals().last() {
                    detail(format!(
                        "Break {}-{} ({})",
                        hhmm(&b.start),
                        hhmm(&b.end),
                        secs2readable(b.duration_seconds)
                    ));
                }
            }
            Transition::EndDay => {
                if let Some(r) = &outcome.report {
                    success(format!("Day ended at {}", hhmm(&r.day_end)));
                    detail(format!("Report filed for {}", r.date_str()));
                    detail(format!("Worked:   {}", secs2readable(r.total_work_seconds)));
                    detail(format!(
                        "On break: {} ({} break(s))",
                        secs2readable(r.total_break_seconds),
                        r.break_intervals.len()
                    ));
                }
            }
        }
    }
    Ok(())
}

fn print_status(
    conn: &Connection,
    session: &Session,
    snapshot: &ClockSnapshot,
    cfg: &Config,
) -> AppResult<()> {
    let state = &snapshot.state;
    let totals = snapshot.totals;
    let target = cfg.target_seconds();

    header(format!(
        "Time tracking: {} ({})",
        session.identity.display_name(),
        snapshot.at.format("%Y-%m-%d %H:%M")
    ));

    let status = state.status();
    println!("Status:     {}{}{}", color_for_status(status), status, RESET);

    if snapshot.is_stale() {
        warning("This day was started on an earlier date and is still open.");
    }

    if let Some(start) = state.day_start() {
        println!("Started:    {}", start.format("%Y-%m-%d %H:%M"));
    }

    println!("Worked:     {}", secs2clock(totals.work_seconds));
    println!("On break:   {}", secs2clock(totals.break_seconds));

    let percent = totals.progress_percent(target);
    println!(
        "Progress:   {} {:.1}% of {}",
        progress_bar(percent, 20),
        percent,
        secs2readable(target)
    );

    if !state.break_intervals().is_empty() || matches!(state.phase(), Phase::OnBreak { .. }) {
        println!("Breaks:");
        for b in state.break_intervals() {
            let span = format!("{}-{}", hhmm(&b.start), hhmm(&b.end));
            println!(
                "  {:<BREAK_SPAN_WIDTH$}  {}",
                span,
                secs2readable(b.duration_seconds)
            );
        }
        if let Phase::OnBreak { since } = state.phase() {
            let span = format!("{}-now", hhmm(&since));
            println!(
                "  {:<BREAK_SPAN_WIDTH$}  {} (in progress)",
                span,
                secs2readable(totals.current_segment_seconds)
            );
        }
    }

    let actions = state
        .available_actions()
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" | ");
    println!("Next:       {actions}");

    let (monday, sunday) = week_bounds(snapshot.at.date_naive());
    let week = load_reports(conn, Some(&session.identity.id), Some((monday, sunday)))?;
    let stats = ReportStats::compute(&week, target);
    println!(
        "This week:  {} over {} filed day(s), avg {}",
        secs2readable(stats.total_work_seconds + totals.work_seconds),
        stats.days,
        secs2readable(stats.avg_work_seconds)
    );

    Ok(())
}
