use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::attendance::AttendanceEntry;
use crate::model::stats::{percentage, AttendanceStats, MemberStats, TeamStats};
use crate::model::streak::compute_streak;

pub const LEADERBOARD_SIZE: usize = 10;

/// A member and the full attendance history the caller has for them.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberHistory {
    pub member_id: Uuid,
    pub name: String,
    pub team_id: Option<Uuid>,
    pub entries: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRoster {
    pub team_id: Uuid,
    pub name: String,
    pub member_ids: Vec<Uuid>,
}

pub fn member_stats(member: &MemberHistory, today: NaiveDate) -> MemberStats {
    let total_days = member.entries.len();
    let days_present = member.entries.iter().filter(|e| e.is_present).count();
    let present_today = member
        .entries
        .iter()
        .any(|e| e.date == today && e.is_present);

    MemberStats {
        member_id: member.member_id,
        name: member.name.clone(),
        total_days,
        days_present,
        attendance_rate: percentage(days_present, total_days),
        current_streak: compute_streak(&member.entries, today),
        present_today,
    }
}

/// Team rate is the plain mean of member rates, not weighted by recorded days.
pub fn team_stats(team: &TeamRoster, rates: &HashMap<Uuid, f64>) -> TeamStats {
    let mut seen = HashSet::new();
    let members: Vec<Uuid> = team
        .member_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect();

    let attendance_rate = if members.is_empty() {
        0.0
    } else {
        let sum: f64 = members
            .iter()
            .map(|id| rates.get(id).copied().unwrap_or(0.0))
            .sum();
        sum / members.len() as f64
    };

    TeamStats {
        team_id: team.team_id,
        name: team.name.clone(),
        member_count: members.len(),
        attendance_rate,
    }
}

pub fn compute_stats(members: &[MemberHistory], teams: &[TeamRoster], today: NaiveDate) -> AttendanceStats {
    let all: Vec<MemberStats> = members.iter().map(|m| member_stats(m, today)).collect();

    let by_streak = top_by(&all, |a, b| b.current_streak.cmp(&a.current_streak));
    let by_days_present = top_by(&all, |a, b| b.days_present.cmp(&a.days_present));
    let by_attendance_rate = top_by(&all, |a, b| descending(a.attendance_rate, b.attendance_rate));

    let rates: HashMap<Uuid, f64> = all.iter().map(|s| (s.member_id, s.attendance_rate)).collect();
    let team_rows: Vec<TeamStats> = teams.iter().map(|t| team_stats(t, &rates)).collect();
    let by_team_rate = top_by(&team_rows, |a, b| descending(a.attendance_rate, b.attendance_rate));

    AttendanceStats {
        all,
        by_streak,
        by_days_present,
        by_attendance_rate,
        by_team_rate,
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

// `sort_by` is stable, so ties keep input order.
fn top_by<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ranked = items.to_vec();
    ranked.sort_by(compare);
    ranked.truncate(LEADERBOARD_SIZE);
    ranked
}
