use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::goal::{week_start, Goal, WeeklyGoals};
use crate::repository::GoalRepository;
use crate::service::dto::{GoalInput, GoalUpdate};
use crate::service::lookup::resolve;
use crate::time::format_day;

/// Weekly goals. Every `date` argument may be any day of the week; it is
/// normalized to that week's Monday before the store is touched.
pub struct GoalService<'a, G: GoalRepository> {
    goals: &'a G,
}

fn required_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("Goal title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn cleaned(description: Option<String>) -> Option<String> {
    description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

impl<'a, G: GoalRepository> GoalService<'a, G> {
    pub fn new(goals: &'a G) -> Self {
        Self { goals }
    }

    /// Replaces the week's goals with `inputs`, in that order. The week keeps
    /// its id if it already exists. Nothing is written if any title is blank.
    pub fn set_week(&self, date: NaiveDate, inputs: Vec<GoalInput>) -> Result<WeeklyGoals> {
        let goals = inputs
            .into_iter()
            .enumerate()
            .map(|(order, input)| -> Result<Goal> {
                Ok(Goal::new(required_title(&input.title)?, cleaned(input.description), order))
            })
            .collect::<Result<Vec<Goal>>>()?;

        let mut week = match self.goals.get_week(week_start(date))? {
            Some(existing) => existing,
            None => WeeklyGoals::new(date),
        };
        week.goals = goals;
        week.touch();
        self.goals.upsert(&week)?;
        Ok(week)
    }

    /// The week's goals by `order`; empty when the week has none.
    pub fn list_week(&self, date: NaiveDate) -> Result<Vec<Goal>> {
        Ok(self
            .goals
            .get_week(week_start(date))?
            .map(|w| w.ordered())
            .unwrap_or_default())
    }

    pub fn find_goal(&self, date: NaiveDate, query: &str) -> Result<Goal> {
        let goals = self.list_week(date)?;
        resolve(&goals, query).cloned()
    }

    pub fn update_goal(&self, goal_id: &Uuid, update: GoalUpdate) -> Result<Goal> {
        let title = update.title.as_deref().map(required_title).transpose()?;
        let (mut week, pos) = self.week_holding(goal_id)?;

        let goal = &mut week.goals[pos];
        if let Some(title) = title {
            goal.title = title;
        }
        if let Some(description) = update.description {
            goal.description = cleaned(Some(description));
        }
        if let Some(done) = update.is_completed {
            goal.is_completed = done;
        }
        let updated = goal.clone();

        week.touch();
        self.goals.upsert(&week)?;
        Ok(updated)
    }

    /// Removes one goal. The remaining goals keep their `order` values.
    pub fn delete_goal(&self, goal_id: &Uuid) -> Result<Goal> {
        let (mut week, pos) = self.week_holding(goal_id)?;
        let removed = week.goals.remove(pos);
        week.touch();
        self.goals.upsert(&week)?;
        info!(goal = %removed.id, week = %format_day(week.week_start), "goal deleted");
        Ok(removed)
    }

    pub fn delete_week(&self, date: NaiveDate) -> Result<()> {
        self.goals.delete_week(week_start(date))
    }

    /// Empties the week but keeps it. Returns how many goals were dropped; a
    /// missing week is not an error.
    pub fn clear_week(&self, date: NaiveDate) -> Result<usize> {
        let mut week = match self.goals.get_week(week_start(date))? {
            Some(week) => week,
            None => return Ok(0),
        };
        let cleared = week.goals.len();
        week.goals.clear();
        week.touch();
        self.goals.upsert(&week)?;
        Ok(cleared)
    }

    fn week_holding(&self, goal_id: &Uuid) -> Result<(WeeklyGoals, usize)> {
        self.goals
            .list()?
            .into_iter()
            .find_map(|w| w.goals.iter().position(|g| g.id == *goal_id).map(|pos| (w, pos)))
            .ok_or_else(|| Error::NotFound(format!("Goal with ID {}", goal_id)))
    }
}
