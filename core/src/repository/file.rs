use std::path::Path;

use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::member::Member;
use crate::model::team::Team;
use crate::repository::json_file::JsonFile;
use crate::repository::traits::{MemberRepository, TeamRepository};

const MEMBERS_FILE_NAME: &str = "members.json";
const TEAMS_FILE_NAME: &str = "teams.json";

#[derive(Clone)]
pub struct FileMemberRepository {
    file: JsonFile,
}

impl FileMemberRepository {
    pub fn new(base_dir: &Path) -> Result<Self> {
        Ok(FileMemberRepository {
            file: JsonFile::open(base_dir, MEMBERS_FILE_NAME)?,
        })
    }
}

impl MemberRepository for FileMemberRepository {
    fn create(&self, member: Member) -> Result<Member> {
        let mut members: Vec<Member> = self.file.read()?;
        members.push(member.clone());
        self.file.write(&members)?;
        info!(id = %member.id, name = %member.name, "member created");
        Ok(member)
    }

    fn get(&self, id: &Uuid) -> Result<Member> {
        let members: Vec<Member> = self.file.read()?;
        members
            .into_iter()
            .find(|m| m.id == *id)
            .ok_or_else(|| Error::NotFound(format!("Member with ID {}", id)))
    }

    fn list(&self) -> Result<Vec<Member>> {
        self.file.read()
    }

    fn update(&self, member: &Member) -> Result<()> {
        let mut members: Vec<Member> = self.file.read()?;
        if let Some(pos) = members.iter().position(|m| m.id == member.id) {
            members[pos] = member.clone();
            self.file.write(&members)
        } else {
            Err(Error::NotFound(format!("Member with ID {}", member.id)))
        }
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        let mut members: Vec<Member> = self.file.read()?;
        let initial_len = members.len();
        members.retain(|m| m.id != *id);

        if members.len() == initial_len {
            return Err(Error::NotFound(format!("Member with ID {}", id)));
        }

        self.file.write(&members)?;
        info!(%id, "member deleted");
        Ok(())
    }
}

#[derive(Clone)]
pub struct FileTeamRepository {
    file: JsonFile,
}

impl FileTeamRepository {
    pub fn new(base_dir: &Path) -> Result<Self> {
        Ok(FileTeamRepository {
            file: JsonFile::open(base_dir, TEAMS_FILE_NAME)?,
        })
    }
}

impl TeamRepository for FileTeamRepository {
    fn create(&self, team: Team) -> Result<Team> {
        let mut teams: Vec<Team> = self.file.read()?;
        teams.push(team.clone());
        self.file.write(&teams)?;
        info!(id = %team.id, name = %team.name, "team created");
        Ok(team)
    }

    fn get(&self, id: &Uuid) -> Result<Team> {
        let teams: Vec<Team> = self.file.read()?;
        teams
            .into_iter()
            .find(|t| t.id == *id)
            .ok_or_else(|| Error::NotFound(format!("Team with ID {}", id)))
    }

    fn list(&self) -> Result<Vec<Team>> {
        self.file.read()
    }

    fn update(&self, team: &Team) -> Result<()> {
        let mut teams: Vec<Team> = self.file.read()?;
        if let Some(pos) = teams.iter().position(|t| t.id == team.id) {
            teams[pos] = team.clone();
            self.file.write(&teams)
        } else {
            Err(Error::NotFound(format!("Team with ID {}", team.id)))
        }
    }
}
