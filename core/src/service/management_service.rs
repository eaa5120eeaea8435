use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::member::Member;
use crate::model::team::Team;
use crate::repository::{AttendanceRepository, MemberRepository, TeamRepository};
use crate::service::lookup::resolve;

pub struct ManagementService<'a, M, T, A>
where
    M: MemberRepository,
    T: TeamRepository,
    A: AttendanceRepository,
{
    members: &'a M,
    teams: &'a T,
    attendance: &'a A,
}

fn required_name(name: &str, kind: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{} name is required", kind)));
    }
    Ok(trimmed.to_string())
}

impl<'a, M, T, A> ManagementService<'a, M, T, A>
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

    // Teams

    pub fn create_team(&self, name: &str) -> Result<Team> {
        let name = required_name(name, "Team")?;
        self.teams.create(Team::new(name))
    }

    pub fn rename_team(&self, id: &Uuid, name: &str) -> Result<Team> {
        let name = required_name(name, "Team")?;
        let mut team = self.teams.get(id)?;
        team.name = name;
        team.touch();
        self.teams.update(&team)?;
        Ok(team)
    }

    pub fn list_teams(&self) -> Result<Vec<Team>> {
        self.teams.list()
    }

    pub fn find_team(&self, query: &str) -> Result<Team> {
        let teams = self.teams.list()?;
        resolve(&teams, query).cloned()
    }

    // Members

    pub fn create_member(&self, name: &str, email: Option<String>, team_id: Option<Uuid>) -> Result<Member> {
        let name = required_name(name, "Member")?;
        if let Some(id) = &team_id {
            self.teams.get(id)?;
        }

        let mut member = Member::new(name);
        member.email = email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty());
        member.team_id = team_id;
        self.members.create(member)
    }

    pub fn rename_member(&self, id: &Uuid, name: &str) -> Result<Member> {
        let name = required_name(name, "Member")?;
        let mut member = self.members.get(id)?;
        member.name = name;
        member.touch();
        self.members.update(&member)?;
        Ok(member)
    }

    /// Moves a member onto `team_id`, or off any team with `None`.
    pub fn assign_member(&self, id: &Uuid, team_id: Option<Uuid>) -> Result<Member> {
        if let Some(team) = &team_id {
            self.teams.get(team)?;
        }
        let mut member = self.members.get(id)?;
        member.team_id = team_id;
        member.touch();
        self.members.update(&member)?;
        info!(member = %member.id, team = ?member.team_id, "member assigned");
        Ok(member)
    }

    /// Deletes the member and their attendance history. Returns the number of records removed.
    ///
    /// History goes first: a failure part way leaves a member with no
    /// records rather than records with no member.
    pub fn remove_member(&self, id: &Uuid) -> Result<usize> {
        self.members.get(id)?;
        let removed = self.attendance.delete_for_member(id)?;
        self.members.delete(id)?;
        info!(member = %id, records = removed, "member removed");
        Ok(removed)
    }

    pub fn list_members(&self) -> Result<Vec<Member>> {
        self.members.list()
    }

    pub fn find_member(&self, query: &str) -> Result<Member> {
        let members = self.members.list()?;
        resolve(&members, query).cloned()
    }
}
