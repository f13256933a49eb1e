use super::FromSqliteRow;
use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Attendance {
    pub id: i64,
    pub member_id: String,
    pub check_in: NaiveDateTime,
    pub check_out: Option<NaiveDateTime>, // None while the member is still in
}

impl FromSqliteRow for Attendance {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("attendance_id")?,
            member_id: row.get("member_id")?,
            check_in: row.get("check_in")?,
            check_out: row.get("check_out")?,
        })
    }
}

/// A row of the "currently in" view.
#[derive(Debug, Clone, Serialize)]
pub struct PresentMember {
    pub member_id: String,
    pub name: String,
    pub check_in: NaiveDateTime,
}

impl FromSqliteRow for PresentMember {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            member_id: row.get("member_id")?,
            name: row.get("name")?,
            check_in: row.get("check_in")?,
        })
    }
}
