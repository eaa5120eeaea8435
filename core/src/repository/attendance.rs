use std::path::Path;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::attendance::AttendanceRecord;
use crate::repository::json_file::JsonFile;
use crate::repository::traits::AttendanceRepository;
use crate::time::format_day;

const ATTENDANCE_FILE_NAME: &str = "attendance.json";

#[derive(Clone)]
pub struct FileAttendanceRepository {
    file: JsonFile,
}

impl FileAttendanceRepository {
    pub fn new(base_dir: &Path) -> Result<Self> {
        Ok(FileAttendanceRepository {
            file: JsonFile::open(base_dir, ATTENDANCE_FILE_NAME)?,
        })
    }
}

impl AttendanceRepository for FileAttendanceRepository {
    fn upsert(&self, record: AttendanceRecord) -> Result<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self.file.read()?;
        let stored = match records
            .iter()
            .position(|r| r.member_id == record.member_id && r.date == record.date)
        {
            Some(pos) => {
                let existing = &mut records[pos];
                existing.is_present = record.is_present;
                if record.notes.is_some() {
                    existing.notes = record.notes;
                }
                existing.clone()
            }
            None => {
                records.push(record.clone());
                record
            }
        };
        self.file.write(&records)?;
        info!(
            member = %stored.member_id,
            date = %format_day(stored.date),
            present = stored.is_present,
            "attendance recorded"
        );
        Ok(stored)
    }

    fn delete(&self, member_id: &Uuid, date: NaiveDate) -> Result<()> {
        let mut records: Vec<AttendanceRecord> = self.file.read()?;
        let initial_len = records.len();
        records.retain(|r| !(r.member_id == *member_id && r.date == date));

        if records.len() == initial_len {
            return Err(Error::NotFound(format!(
                "Attendance for member {} on {}",
                member_id,
                format_day(date)
            )));
        }

        self.file.write(&records)
    }

    fn delete_for_member(&self, member_id: &Uuid) -> Result<usize> {
        let mut records: Vec<AttendanceRecord> = self.file.read()?;
        let initial_len = records.len();
        records.retain(|r| r.member_id != *member_id);
        let removed = initial_len - records.len();
        if removed > 0 {
            self.file.write(&records)?;
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<AttendanceRecord>> {
        self.file.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_upsert_keeps_one_record_per_member_and_day() {
        let dir = tempdir().unwrap();
        let repo = FileAttendanceRepository::new(dir.path()).unwrap();
        let member = Uuid::new_v4();

        let first = repo.upsert(AttendanceRecord::new(member, day(3), true)).unwrap();
        let second = repo.upsert(AttendanceRecord::new(member, day(3), false)).unwrap();

        let records = repo.list().unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_present);
        assert_eq!(second.id, first.id);
    }

    #[test]
    fn test_upsert_without_notes_keeps_existing_notes() {
        let dir = tempdir().unwrap();
        let repo = FileAttendanceRepository::new(dir.path()).unwrap();
        let member = Uuid::new_v4();

        let mut noted = AttendanceRecord::new(member, day(3), true);
        noted.notes = Some("left early".to_string());
        repo.upsert(noted).unwrap();
        repo.upsert(AttendanceRecord::new(member, day(3), true)).unwrap();

        assert_eq!(repo.list().unwrap()[0].notes.as_deref(), Some("left early"));
    }

    #[test]
    fn test_delete_single_and_by_member() {
        let dir = tempdir().unwrap();
        let repo = FileAttendanceRepository::new(dir.path()).unwrap();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        repo.upsert(AttendanceRecord::new(a, day(1), true)).unwrap();
        repo.upsert(AttendanceRecord::new(a, day(2), true)).unwrap();
        repo.upsert(AttendanceRecord::new(b, day(2), false)).unwrap();

        repo.delete(&a, day(1)).unwrap();
        assert!(matches!(repo.delete(&a, day(1)), Err(Error::NotFound(_))));

        assert_eq!(repo.delete_for_member(&a).unwrap(), 1);
        assert_eq!(repo.delete_for_member(&a).unwrap(), 0);
        let left = repo.list().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].member_id, b);
    }
}
