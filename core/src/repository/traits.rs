use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::Result;
use crate::model::attendance::AttendanceRecord;
use crate::model::goal::WeeklyGoals;
use crate::model::member::Member;
use crate::model::team::Team;

pub trait MemberRepository {
    fn create(&self, member: Member) -> Result<Member>;
    fn get(&self, id: &Uuid) -> Result<Member>;
    fn list(&self) -> Result<Vec<Member>>;
    fn update(&self, member: &Member) -> Result<()>;
    fn delete(&self, id: &Uuid) -> Result<()>;
}

pub trait TeamRepository {
    fn create(&self, team: Team) -> Result<Team>;
    fn get(&self, id: &Uuid) -> Result<Team>;
    fn list(&self) -> Result<Vec<Team>>;
    fn update(&self, team: &Team) -> Result<()>;
}

/// Attendance keyed by `(member_id, date)`; at most one record per pair.
pub trait AttendanceRepository {
    /// Inserts, or replaces the mark and notes of the existing record for the same member and day.
    fn upsert(&self, record: AttendanceRecord) -> Result<AttendanceRecord>;
    fn delete(&self, member_id: &Uuid, date: NaiveDate) -> Result<()>;
    fn delete_for_member(&self, member_id: &Uuid) -> Result<usize>;
    fn list(&self) -> Result<Vec<AttendanceRecord>>;
}

/// Weekly goal lists keyed by `week_start`, always a Monday.
pub trait GoalRepository {
    fn get_week(&self, week_start: NaiveDate) -> Result<Option<WeeklyGoals>>;
    fn list(&self) -> Result<Vec<WeeklyGoals>>;
    fn upsert(&self, week: &WeeklyGoals) -> Result<()>;
    fn delete_week(&self, week_start: NaiveDate) -> Result<()>;
}
