use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub order: usize,
}

impl Goal {
    pub fn new(title: String, description: Option<String>, order: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            is_completed: false,
            order,
        }
    }

    pub fn is_titled(&self, title: &str) -> bool {
        self.title.trim().to_lowercase() == title.trim().to_lowercase()
    }
}

/// The goal list for one Monday-to-Sunday week.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeeklyGoals {
    pub id: Uuid,
    pub week_start: NaiveDate,
    pub goals: Vec<Goal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeeklyGoals {
    /// `date` may be any day of the week; it is stored as that week's Monday.
    pub fn new(date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            week_start: week_start(date),
            goals: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn ordered(&self) -> Vec<Goal> {
        let mut goals = self.goals.clone();
        goals.sort_by_key(|g| g.order);
        goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-03-10 is a Monday.
        assert_eq!(week_start(day(3, 10)), day(3, 10));
        assert_eq!(week_start(day(3, 12)), day(3, 10));
        assert_eq!(week_start(day(3, 16)), day(3, 10));
        assert_eq!(week_start(day(3, 2)), day(2, 24));
    }

    #[test]
    fn test_new_week_is_normalized() {
        let week = WeeklyGoals::new(day(3, 14));
        assert_eq!(week.week_start, day(3, 10));
        assert!(week.goals.is_empty());
    }
}
