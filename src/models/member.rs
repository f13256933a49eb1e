use super::FromSqliteRow;
use super::status::MemberStatus;
use chrono::NaiveDate;
use rusqlite::Row;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: String,          // ⇔ member.member_id (TEXT, chosen at sign-up, e.g. "M1")
    pub name: String,        // ⇔ member.name
    pub phone: String,       // ⇔ member.phone (TEXT, may be '')
    pub age: u32,            // ⇔ member.age (INT >= 0)
    pub join_date: NaiveDate, // ⇔ member.join_date (TEXT "YYYY-MM-DD")
    pub status: MemberStatus, // ⇔ member.status ('Active' | 'Inactive')
}

/// Input for a new member; status is computed, never supplied.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub age: u32,
    pub join_date: NaiveDate,
}

impl FromSqliteRow for Member {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let status_str: String = row.get("status")?;
        let status = MemberStatus::from_db_str(&status_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("Invalid member status: {}", status_str).into(),
            )
        })?;

        Ok(Self {
            id: row.get("member_id")?,
            name: row.get("name")?,
            phone: row.get("phone")?,
            age: row.get("age")?,
            join_date: row.get("join_date")?,
            status,
        })
    }
}
