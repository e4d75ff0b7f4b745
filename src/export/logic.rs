use crate::core::reports::ReportLogic;
use crate::db::identities::list_identities;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::models::identity::Identity;
use crate::models::session::Session;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Rows the session may export, oldest first.
    pub fn rows(
        conn: &Connection,
        session: &Session,
        range: Option<&str>,
    ) -> AppResult<Vec<ReportExport>> {
        let bounds = match range {
            None => None,
            Some(r) => parse_period(r)?,
        };

        let reports = ReportLogic::visible(conn, session, None, bounds)?;

        let people: HashMap<String, Identity> = list_identities(conn, None)?
            .into_iter()
            .map(|e| (e.identity.id.clone(), e.identity))
            .collect();

        Ok(reports
            .iter()
            .map(|r| ReportExport::from_report(r, people.get(&r.employee_id)))
            .collect())
    }

    /// Export filed reports.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and
    ///   `start:end` pairs of those
    ///
    /// Returns how many rows were written.
    pub fn export(
        conn: &Connection,
        session: &Session,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let rows = Self::rows(conn, session, range)?;

        if rows.is_empty() {
            warning("No time reports found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_quiet(
            conn,
            "export",
            &session.identity.email,
            &format!("{} report(s) as {} to {file}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
