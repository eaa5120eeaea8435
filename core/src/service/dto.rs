use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Names read off the attendance whiteboard for one day.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RollCall {
    pub present: Vec<String>,
    pub absent: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub date: Option<NaiveDate>,
    pub present: usize,
    pub absent: usize,
    pub skipped: usize,
    pub created_members: Vec<String>,
}

/// Record listing filter. `date` takes precedence over the `from`/`to` range,
/// both ends of which are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub member_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn has_date_bounds(&self) -> bool {
        self.date.is_some() || self.from.is_some() || self.to.is_some()
    }

    pub fn matches(&self, member_id: &Uuid, date: NaiveDate) -> bool {
        if let Some(id) = &self.member_id {
            if id != member_id {
                return false;
            }
        }
        if let Some(d) = self.date {
            return d == date;
        }
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GoalInput {
    pub title: String,
    pub description: Option<String>,
}

/// Fields left as `None` are unchanged. An empty description clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
}
