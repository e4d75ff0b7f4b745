use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reports::{ReportLogic, ReportStats, summarize_by_employee};
use crate::core::session::SessionLogic;
use crate::db::identities::list_identities;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_performance};
use crate::utils::date::parse_period;
use crate::utils::formatting::secs2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::hhmm;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report { employee, period } = cmd else {
        return Ok(());
    };

    let pool = open_db(cfg)?;
    let conn = &pool.conn;
    let manager = SessionLogic::manager(conn, cfg);
    let session = manager.current().ok_or(AppError::NotAuthenticated)?;

    let bounds = match period {
        Some(p) => parse_period(p)?,
        None => None,
    };

    let reports = ReportLogic::visible(conn, session, employee.as_deref(), bounds)?;

    if reports.is_empty() {
        info("No time reports found.");
        return Ok(());
    }

    let names: HashMap<String, String> = list_identities(conn, None)?
        .into_iter()
        .map(|e| (e.identity.id.clone(), e.identity.display_name()))
        .collect();
    let name_of = |id: &str| names.get(id).cloned().unwrap_or_else(|| format!("#{id}"));

    header("Time reports");

    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("EMPLOYEE", 10),
        Column::new("START", 5),
        Column::new("END", 5),
        Column::new("WORKED", 7),
        Column::new("BREAK", 7),
        Column::new("BREAKS", 6),
    ])
    .separator(&cfg.separator_char);

    for r in &reports {
        table.add_row(vec![
            r.date_str(),
            name_of(&r.employee_id),
            hhmm(&r.day_start),
            hhmm(&r.day_end),
            secs2readable(r.total_work_seconds),
            secs2readable(r.total_break_seconds),
            r.break_intervals.len().to_string(),
        ]);
    }
    print!("{}", table.render());

    let target = cfg.target_seconds();
    let stats = ReportStats::compute(&reports, target);

    println!();
    println!("Total worked:  {}", secs2readable(stats.total_work_seconds));
    println!("Total breaks:  {}", secs2readable(stats.total_break_seconds));
    println!("Average/day:   {}", secs2readable(stats.avg_work_seconds));
    println!("Days:          {}", stats.days);
    println!("Employees:     {}", stats.employees);
    println!(
        "Performance:   {}{:.1}%{} of {} per day",
        color_for_performance(stats.performance_percent),
        stats.performance_percent,
        RESET,
        secs2readable(target)
    );

    if session.identity.is_admin() && stats.employees > 1 {
        println!();
        let mut per = Table::new(vec![
            Column::new("EMPLOYEE", 10),
            Column::new("DAYS", 4),
            Column::new("WORKED", 7),
            Column::new("AVG/DAY", 7),
            Column::new("PERF", 6),
        ])
        .separator(&cfg.separator_char);
        for (id, s) in summarize_by_employee(&reports, target) {
            per.add_row(vec![
                name_of(&id),
                s.days.to_string(),
                secs2readable(s.total_work_seconds),
                secs2readable(s.avg_work_seconds),
                format!("{:.1}%", s.performance_percent),
            ]);
        }
        print!("{}", per.render());
    }

    Ok(())
}
