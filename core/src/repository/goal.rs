use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::goal::WeeklyGoals;
use crate::repository::json_file::JsonFile;
use crate::repository::traits::GoalRepository;
use crate::time::format_day;

const GOALS_FILE_NAME: &str = "goals.json";

#[derive(Clone)]
pub struct FileGoalRepository {
    file: JsonFile,
}

impl FileGoalRepository {
    pub fn new(base_dir: &Path) -> Result<Self> {
        Ok(FileGoalRepository {
            file: JsonFile::open(base_dir, GOALS_FILE_NAME)?,
        })
    }
}

impl GoalRepository for FileGoalRepository {
    fn get_week(&self, week_start: NaiveDate) -> Result<Option<WeeklyGoals>> {
        let weeks: Vec<WeeklyGoals> = self.file.read()?;
        Ok(weeks.into_iter().find(|w| w.week_start == week_start))
    }

    fn list(&self) -> Result<Vec<WeeklyGoals>> {
        self.file.read()
    }

    fn upsert(&self, week: &WeeklyGoals) -> Result<()> {
        let mut weeks: Vec<WeeklyGoals> = self.file.read()?;
        match weeks.iter().position(|w| w.week_start == week.week_start) {
            Some(pos) => weeks[pos] = week.clone(),
            None => weeks.push(week.clone()),
        }
        self.file.write(&weeks)?;
        info!(week = %format_day(week.week_start), goals = week.goals.len(), "weekly goals saved");
        Ok(())
    }

    fn delete_week(&self, week_start: NaiveDate) -> Result<()> {
        let mut weeks: Vec<WeeklyGoals> = self.file.read()?;
        let initial_len = weeks.len();
        weeks.retain(|w| w.week_start != week_start);

        if weeks.len() == initial_len {
            return Err(Error::NotFound(format!("Goals for week of {}", format_day(week_start))));
        }

        self.file.write(&weeks)
    }
}
