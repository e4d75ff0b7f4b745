use chrono::{DateTime, Local, NaiveDate, TimeZone};
use planningpro::core::auth::SessionManager;
use planningpro::core::clock::ClockLogic;
use planningpro::core::employees::EmployeeLogic;
use planningpro::core::reports::{ReportLogic, ReportStats, summarize_by_employee};
use planningpro::core::sink::ReportSink;
use planningpro::db::identities::{DbDirectory, NewIdentity};
use planningpro::db::initialize::init_db_with_seed;
use planningpro::db::pool::DbPool;
use planningpro::db::reports::{DbReportSink, load_reports};
use planningpro::db::slot::{DEFAULT_SESSION_KEY, DbSessionSlot};
use planningpro::db::time_state::load_state;
use planningpro::errors::{AppError, AppResult};
use planningpro::export::logic::ExportLogic;
use planningpro::models::report::DailyTimeReport;
use planningpro::models::role::{AccountStatus, Role};
use planningpro::models::session::Session;
use planningpro::models::tracker::{Transition, WorkStatus};
use planningpro::utils::date::parse_period;

fn at(d: u32, h: u32, m: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, d, h, m, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn demo_pool() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    init_db_with_seed(&pool.conn, true).unwrap();
    pool
}

fn sign_in(pool: &DbPool, email: &str, secret: &str) -> Session {
    let mut mgr = SessionManager::new(
        DbDirectory::new(&pool.conn),
        DbSessionSlot::new(&pool.conn, DEFAULT_SESSION_KEY),
    );
    mgr.login(email, secret).unwrap()
}

fn file_day(pool: &DbPool, who: &Session, day: u32, end_hour: u32) -> DailyTimeReport {
    let sink = DbReportSink::new(&pool.conn);
    for (action, now) in [
        (Transition::StartDay, at(day, 8, 0)),
        (Transition::StartBreak, at(day, 12, 0)),
        (Transition::EndBreak, at(day, 12, 30)),
    ] {
        ClockLogic::apply(&pool.conn, &sink, who, action, now).unwrap();
    }
    ClockLogic::apply(&pool.conn, &sink, who, Transition::EndDay, at(day, end_hour, 30))
        .unwrap()
        .report
        .unwrap()
}

#[test]
fn filed_day_is_stored_with_its_breaks() {
    let pool = demo_pool();
    let jean = sign_in(&pool, "employe@planningpro.com", "employe123");

    let filed = file_day(&pool, &jean, 10, 16);
    assert_eq!(filed.total_work_seconds, 7 * 3600 + 1800);

    let stored = load_reports(&pool.conn, Some(&jean.identity.id), None).unwrap();
    assert_eq!(stored, vec![filed]);
    assert!(load_state(&pool.conn, &jean.identity.id).unwrap().is_none());
}

#[test]
fn second_report_for_the_same_day_is_refused() {
    let pool = demo_pool();
    let jean = sign_in(&pool, "employe@planningpro.com", "employe123");
    let filed = file_day(&pool, &jean, 10, 16);

    let err = DbReportSink::new(&pool.conn).append(&filed).unwrap_err();
    assert!(matches!(err, AppError::DuplicateReport { .. }));

    let err = ClockLogic::apply(
        &pool.conn,
        &DbReportSink::new(&pool.conn),
        &jean,
        Transition::StartDay,
        at(10, 18, 0),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::DayAlreadyReported(d) if d == "2025-06-10"));
}

struct RefusingSink;

impl ReportSink for RefusingSink {
    fn append(&self, r: &DailyTimeReport) -> AppResult<()> {
        Err(AppError::DuplicateReport {
            employee: r.employee_id.clone(),
            date: r.date_str(),
        })
    }
}

#[test]
fn refused_report_keeps_the_day_open() {
    let pool = demo_pool();
    let jean = sign_in(&pool, "employe@planningpro.com", "employe123");
    let sink = DbReportSink::new(&pool.conn);

    ClockLogic::apply(&pool.conn, &sink, &jean, Transition::StartDay, at(11, 8, 0)).unwrap();

    let err = ClockLogic::apply(
        &pool.conn,
        &RefusingSink,
        &jean,
        Transition::EndDay,
        at(11, 16, 0),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::DuplicateReport { .. }));

    let state = ClockLogic::current(&pool.conn, &jean.identity.id).unwrap();
    assert_eq!(state.status(), WorkStatus::Working);
    assert!(load_reports(&pool.conn, None, None).unwrap().is_empty());
}

#[test]
fn employees_only_read_their_own_reports() {
    let pool = demo_pool();
    let jean = sign_in(&pool, "employe@planningpro.com", "employe123");
    file_day(&pool, &jean, 10, 16);

    let own = ReportLogic::visible(&pool.conn, &jean, None, None).unwrap();
    assert_eq!(own.len(), 1);

    let err =
        ReportLogic::visible(&pool.conn, &jean, Some("admin@planningpro.com"), None).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let admin = sign_in(&pool, "admin@planningpro.com", "admin123");
    let all = ReportLogic::visible(&pool.conn, &admin, None, None).unwrap();
    assert_eq!(all.len(), 1);
    let theirs =
        ReportLogic::visible(&pool.conn, &admin, Some("employe@planningpro.com"), None).unwrap();
    assert_eq!(theirs, all);
}

#[test]
fn period_filter_limits_reports() {
    let pool = demo_pool();
    let jean = sign_in(&pool, "employe@planningpro.com", "employe123");
    file_day(&pool, &jean, 10, 16);
    file_day(&pool, &jean, 11, 17);
    file_day(&pool, &jean, 12, 15);

    let bounds = parse_period("2025-06-11:2025-06-12").unwrap();
    let some = ReportLogic::visible(&pool.conn, &jean, None, bounds).unwrap();
    assert_eq!(
        some.iter().map(|r| r.date_str()).collect::<Vec<_>>(),
        vec!["2025-06-11", "2025-06-12"]
    );
}

#[test]
fn stats_over_several_days() {
    let pool = demo_pool();
    let jean = sign_in(&pool, "employe@planningpro.com", "employe123");
    file_day(&pool, &jean, 10, 16); // 7h30
    file_day(&pool, &jean, 11, 17); // 8h30

    let reports = load_reports(&pool.conn, None, None).unwrap();
    let stats = ReportStats::compute(&reports, 8 * 3600);

    assert_eq!(stats.days, 2);
    assert_eq!(stats.employees, 1);
    assert_eq!(stats.total_work_seconds, 16 * 3600);
    assert_eq!(stats.total_break_seconds, 3600);
    assert_eq!(stats.avg_work_seconds, 8 * 3600);
    assert_eq!(stats.performance_percent, 100.0);

    let per = summarize_by_employee(&reports, 8 * 3600);
    assert_eq!(per.len(), 1);
    assert_eq!(per[0].0, jean.identity.id);
}

#[test]
fn empty_stats_are_zero() {
    let stats = ReportStats::compute(&[], 8 * 3600);
    assert_eq!(stats.days, 0);
    assert_eq!(stats.avg_work_seconds, 0);
    assert_eq!(stats.performance_percent, 0.0);
}

#[test]
fn period_expressions() {
    assert_eq!(parse_period("all").unwrap(), None);
    assert_eq!(
        parse_period("2025").unwrap(),
        Some((date(2025, 1, 1), date(2025, 12, 31)))
    );
    assert_eq!(
        parse_period("2024-02").unwrap(),
        Some((date(2024, 2, 1), date(2024, 2, 29)))
    );
    assert_eq!(
        parse_period("2025-06-10").unwrap(),
        Some((date(2025, 6, 10), date(2025, 6, 10)))
    );
    assert_eq!(
        parse_period("2025-01:2025-03").unwrap(),
        Some((date(2025, 1, 1), date(2025, 3, 31)))
    );
    assert!(parse_period("2025-13").is_err());
    assert!(parse_period("2025-06:2025-01").is_err());
    assert!(parse_period("yesterday").is_err());
}

fn new_employee(email: &str, given: &str, secret: &str) -> NewIdentity {
    NewIdentity {
        email: email.into(),
        given_name: given.into(),
        family_name: "Martin".into(),
        role: Role::Employee,
        status: AccountStatus::Active,
        secret: secret.into(),
        hired_on: None,
    }
}

#[test]
fn removed_account_id_is_not_handed_to_the_next_one() {
    let pool = demo_pool();
    let admin = sign_in(&pool, "admin@planningpro.com", "admin123");

    let claire = EmployeeLogic::add(
        &pool.conn,
        &admin,
        new_employee("claire@planningpro.com", "Claire", "claire42"),
    )
    .unwrap();
    let claire_session = sign_in(&pool, "claire@planningpro.com", "claire42");
    file_day(&pool, &claire_session, 10, 16);

    EmployeeLogic::remove(&pool.conn, &admin, "claire@planningpro.com").unwrap();

    let paul = EmployeeLogic::add(
        &pool.conn,
        &admin,
        new_employee("paul@planningpro.com", "Paul", "paul1234"),
    )
    .unwrap();
    assert_ne!(claire.id, paul.id);

    let paul_session = sign_in(&pool, "paul@planningpro.com", "paul1234");
    assert!(
        ReportLogic::visible(&pool.conn, &paul_session, None, None)
            .unwrap()
            .is_empty()
    );

    // the day Claire filed is still free for Paul
    let sink = DbReportSink::new(&pool.conn);
    ClockLogic::apply(&pool.conn, &sink, &paul_session, Transition::StartDay, at(10, 9, 0))
        .unwrap();

    let rows = ExportLogic::rows(&pool.conn, &admin, None).unwrap();
    let orphan = rows.iter().find(|r| r.employee_id == claire.id).unwrap();
    assert_eq!(orphan.name, "");
    assert!(rows.iter().all(|r| r.employee_id != paul.id));
}

#[test]
fn failed_tracker_reset_leaves_no_report_behind() {
    let pool = demo_pool();
    let jean = sign_in(&pool, "employe@planningpro.com", "employe123");
    let sink = DbReportSink::new(&pool.conn);

    ClockLogic::apply(&pool.conn, &sink, &jean, Transition::StartDay, at(10, 8, 0)).unwrap();

    pool.conn
        .execute_batch(
            "CREATE TEMP TRIGGER block_clear BEFORE DELETE ON time_state
             BEGIN SELECT RAISE(ABORT, 'state locked'); END;",
        )
        .unwrap();

    let err = ClockLogic::apply(&pool.conn, &sink, &jean, Transition::EndDay, at(10, 16, 0));
    assert!(err.is_err());
    assert!(load_reports(&pool.conn, Some(&jean.identity.id), None).unwrap().is_empty());
    assert_eq!(
        ClockLogic::current(&pool.conn, &jean.identity.id).unwrap().status(),
        WorkStatus::Working
    );

    pool.conn.execute_batch("DROP TRIGGER block_clear").unwrap();

    let outcome =
        ClockLogic::apply(&pool.conn, &sink, &jean, Transition::EndDay, at(10, 16, 0)).unwrap();
    assert!(outcome.report.is_some());
    assert_eq!(
        load_reports(&pool.conn, Some(&jean.identity.id), None).unwrap().len(),
        1
    );
}
