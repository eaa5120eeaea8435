use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::model::attendance::AttendanceEntry;
use crate::model::leaderboard::{compute_stats, MemberHistory, TeamRoster};
use crate::model::stats::AttendanceStats;
use crate::repository::{AttendanceRepository, MemberRepository, TeamRepository};

/// Loads the stored history and feeds it to the leaderboard computation.
pub struct StatsUseCase<'a, M, T, A>
where
    M: MemberRepository,
    T: TeamRepository,
    A: AttendanceRepository,
{
    members: &'a M,
    teams: &'a T,
    attendance: &'a A,
}

impl<'a, M, T, A> StatsUseCase<'a, M, T, A>
where
    M: MemberRepository,
    T: TeamRepository,
    A: AttendanceRepository,
{
    pub fn new(members: &'a M, teams: &'a T, attendance: &'a A) -> Self {
        Self {
            members,
            teams,
            attendance,
        }
    }

    pub fn get_stats(&self, today: NaiveDate) -> Result<AttendanceStats> {
        let members = self.members.list()?;
        let teams = self.teams.list()?;
        let records = self.attendance.list()?;

        // Records whose member no longer exists are dropped here.
        let mut entries_by_member: HashMap<Uuid, Vec<AttendanceEntry>> = HashMap::new();
        for record in &records {
            entries_by_member
                .entry(record.member_id)
                .or_default()
                .push(record.entry());
        }

        let histories: Vec<MemberHistory> = members
            .iter()
            .map(|m| MemberHistory {
                member_id: m.id,
                name: m.name.clone(),
                team_id: m.team_id,
                entries: entries_by_member.remove(&m.id).unwrap_or_default(),
            })
            .collect();

        let rosters: Vec<TeamRoster> = teams
            .iter()
            .map(|t| TeamRoster {
                team_id: t.id,
                name: t.name.clone(),
                member_ids: histories
                    .iter()
                    .filter(|h| h.team_id == Some(t.id))
                    .map(|h| h.member_id)
                    .collect(),
            })
            .collect();

        debug!(
            members = histories.len(),
            teams = rosters.len(),
            records = records.len(),
            "computing attendance stats"
        );
        Ok(compute_stats(&histories, &rosters, today))
    }
}
