//! `time_state` table: one serialized tracker per employee.

use crate::errors::{AppError, AppResult};
use crate::models::tracker::DailyTimeState;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_state(conn: &Connection, employee_id: &str) -> AppResult<Option<DailyTimeState>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT state FROM time_state WHERE employee_id = ?1",
            [employee_id],
            |row| row.get(0),
        )
        .optional()?;

    raw.map(|json| {
        serde_json::from_str::<DailyTimeState>(&json)
            .map_err(|e| AppError::Other(format!("Corrupt tracker state for {employee_id}: {e}")))
    })
    .transpose()
}

pub fn save_state(conn: &Connection, state: &DailyTimeState) -> AppResult<()> {
    let json = serde_json::to_string(state)
        .map_err(|e| AppError::Other(format!("Cannot serialize tracker state: {e}")))?;

    conn.execute(
        "INSERT INTO time_state (employee_id, state, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(employee_id) DO UPDATE SET state = excluded.state,
                                                updated_at = excluded.updated_at",
        params![state.employee_id(), json, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn clear_state(conn: &Connection, employee_id: &str) -> AppResult<()> {
    conn.execute("DELETE FROM time_state WHERE employee_id = ?1", [employee_id])?;
    Ok(())
}
