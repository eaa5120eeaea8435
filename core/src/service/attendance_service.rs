use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::model::attendance::AttendanceRecord;
use crate::model::member::Member;
use crate::repository::{AttendanceRepository, MemberRepository};
use crate::service::dto::{ImportSummary, RecordFilter, RollCall};
use crate::service::export::to_csv;

/// Listing cap when no date bound is given.
pub const DEFAULT_LIST_LIMIT: usize = 200;

pub struct AttendanceService<'a, M: MemberRepository, A: AttendanceRepository> {
    members: &'a M,
    attendance: &'a A,
}

impl<'a, M: MemberRepository, A: AttendanceRepository> AttendanceService<'a, M, A> {
    pub fn new(members: &'a M, attendance: &'a A) -> Self {
        Self { members, attendance }
    }

    pub fn record(
        &self,
        member_id: &Uuid,
        date: NaiveDate,
        is_present: bool,
        notes: Option<String>,
    ) -> Result<AttendanceRecord> {
        self.members.get(member_id)?;
        let mut record = AttendanceRecord::new(*member_id, date, is_present);
        record.notes = notes;
        self.attendance.upsert(record)
    }

    pub fn remove(&self, member_id: &Uuid, date: NaiveDate) -> Result<()> {
        self.attendance.delete(member_id, date)
    }

    /// Newest day first.
    pub fn list(&self, filter: &RecordFilter) -> Result<Vec<AttendanceRecord>> {
        let mut records: Vec<AttendanceRecord> = self
            .attendance
            .list()?
            .into_iter()
            .filter(|r| filter.matches(&r.member_id, r.date))
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));

        if !filter.has_date_bounds() {
            records.truncate(DEFAULT_LIST_LIMIT);
        }
        Ok(records)
    }

    /// Applies a whiteboard roll call to `date`. Names match existing members
    /// case-insensitively; unknown names become new members. A name listed
    /// as both present and absent ends up absent.
    pub fn import_roll_call(&self, roll_call: &RollCall, date: NaiveDate) -> Result<ImportSummary> {
        let mut members = self.members.list()?;
        let mut summary = ImportSummary {
            date: Some(date),
            ..ImportSummary::default()
        };

        let marks = roll_call
            .present
            .iter()
            .map(|n| (n, true))
            .chain(roll_call.absent.iter().map(|n| (n, false)));

        for (raw_name, is_present) in marks {
            let name = raw_name.trim();
            if name.is_empty() {
                warn!("skipping blank name in roll call");
                summary.skipped += 1;
                continue;
            }

            let member_id = match members.iter().find(|m| m.is_named(name)) {
                Some(m) => m.id,
                None => {
                    let created = self.members.create(Member::new(name.to_string()))?;
                    summary.created_members.push(created.name.clone());
                    let id = created.id;
                    members.push(created);
                    id
                }
            };

            let mut record = AttendanceRecord::new(member_id, date, is_present);
            record.notes = roll_call.notes.clone();
            self.attendance.upsert(record)?;

            if is_present {
                summary.present += 1;
            } else {
                summary.absent += 1;
            }
        }

        info!(
            present = summary.present,
            absent = summary.absent,
            created = summary.created_members.len(),
            "roll call imported"
        );
        Ok(summary)
    }

    pub fn export_csv(&self) -> Result<String> {
        let records = self.attendance.list()?;
        let members = self.members.list()?;
        Ok(to_csv(&records, &members))
    }
}
