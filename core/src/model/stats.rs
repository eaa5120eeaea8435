use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub member_id: Uuid,
    pub name: String,
    pub total_days: usize,
    pub days_present: usize,
    pub attendance_rate: f64, // Percent, 0..=100
    pub current_streak: u32,
    pub present_today: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub team_id: Uuid,
    pub name: String,
    pub member_count: usize,
    pub attendance_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub all: Vec<MemberStats>,
    pub by_streak: Vec<MemberStats>,
    pub by_days_present: Vec<MemberStats>,
    pub by_attendance_rate: Vec<MemberStats>,
    pub by_team_rate: Vec<TeamStats>,
}

/// `part / whole * 100`, or 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
