use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member's present/absent mark for one calendar day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub is_present: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn new(member_id: Uuid, date: NaiveDate, is_present: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            date,
            is_present,
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn entry(&self) -> AttendanceEntry {
        AttendanceEntry {
            date: self.date,
            is_present: self.is_present,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub is_present: bool,
}

impl AttendanceEntry {
    pub fn new(date: NaiveDate, is_present: bool) -> Self {
        Self { date, is_present }
    }
}
