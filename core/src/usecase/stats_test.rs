
#[cfg(test)]
mod tests {
    use crate::error::{Error, Result};
    use crate::model::attendance::AttendanceRecord;
    use crate::model::member::Member;
    use crate::model::team::Team;
    use crate::repository::{AttendanceRepository, MemberRepository, TeamRepository};
    use crate::usecase::stats::StatsUseCase;
    use chrono::{Duration, NaiveDate};
    use uuid::Uuid;

    struct MockMemberRepo {
        members: Vec<Member>,
    }

    impl MemberRepository for MockMemberRepo {
        fn create(&self, _member: Member) -> Result<Member> { unimplemented!() }
        fn get(&self, id: &Uuid) -> Result<Member> {
            self.members.iter().find(|m| m.id == *id).cloned().ok_or_else(|| Error::NotFound(id.to_string()))
        }
        fn list(&self) -> Result<Vec<Member>> { Ok(self.members.clone()) }
        fn update(&self, _member: &Member) -> Result<()> { unimplemented!() }
        fn delete(&self, _id: &Uuid) -> Result<()> { unimplemented!() }
    }

    struct MockTeamRepo {
        teams: Vec<Team>,
    }

    impl TeamRepository for MockTeamRepo {
        fn create(&self, _team: Team) -> Result<Team> { unimplemented!() }
        fn get(&self, _id: &Uuid) -> Result<Team> { unimplemented!() }
        fn list(&self) -> Result<Vec<Team>> { Ok(self.teams.clone()) }
        fn update(&self, _team: &Team) -> Result<()> { unimplemented!() }
    }

    struct MockAttendanceRepo {
        records: Vec<AttendanceRecord>,
    }

    impl AttendanceRepository for MockAttendanceRepo {
        fn upsert(&self, _record: AttendanceRecord) -> Result<AttendanceRecord> { unimplemented!() }
        fn delete(&self, _member_id: &Uuid, _date: NaiveDate) -> Result<()> { unimplemented!() }
        fn delete_for_member(&self, _member_id: &Uuid) -> Result<usize> { unimplemented!() }
        fn list(&self) -> Result<Vec<AttendanceRecord>> { Ok(self.records.clone()) }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn mark(member: &Member, days_ago: i64, present: bool) -> AttendanceRecord {
        AttendanceRecord::new(member.id, today() - Duration::days(days_ago), present)
    }

    #[test]
    fn test_get_stats_groups_records_by_member_and_team() {
        let build = Team::new("Build".to_string());
        let empty = Team::new("Empty".to_string());

        let mut ada = Member::new("Ada".to_string());
        ada.team_id = Some(build.id);
        let mut bob = Member::new("Bob".to_string());
        bob.team_id = Some(build.id);
        let cy = Member::new("Cy".to_string());

        let orphan = Member::new("Deleted".to_string());
        let records = vec![
            mark(&ada, 0, true),
            mark(&ada, 1, true),
            mark(&bob, 0, true),
            mark(&bob, 1, false),
            mark(&cy, 1, true),
            mark(&cy, 2, true),
            mark(&cy, 3, true),
            mark(&orphan, 0, true),
        ];

        let members = MockMemberRepo { members: vec![ada.clone(), bob.clone(), cy.clone()] };
        let teams = MockTeamRepo { teams: vec![empty.clone(), build.clone()] };
        let attendance = MockAttendanceRepo { records };

        let usecase = StatsUseCase::new(&members, &teams, &attendance);
        let stats = usecase.get_stats(today()).unwrap();

        assert_eq!(stats.all.len(), 3);
        let names: Vec<&str> = stats.all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Bob", "Cy"]);

        // Cy has no record today but three prior consecutive days.
        assert_eq!(stats.by_streak[0].name, "Cy");
        assert_eq!(stats.by_streak[0].current_streak, 3);
        assert!(!stats.by_streak[0].present_today);

        let bob_stats = stats.all.iter().find(|s| s.member_id == bob.id).unwrap();
        assert_eq!(bob_stats.attendance_rate, 50.0);
        assert!(bob_stats.present_today);

        assert_eq!(stats.by_team_rate.len(), 2);
        assert_eq!(stats.by_team_rate[0].team_id, build.id);
        assert_eq!(stats.by_team_rate[0].member_count, 2);
        assert_eq!(stats.by_team_rate[0].attendance_rate, 75.0);
        assert_eq!(stats.by_team_rate[1].team_id, empty.id);
        assert_eq!(stats.by_team_rate[1].attendance_rate, 0.0);
    }

    #[test]
    fn test_get_stats_on_empty_store() {
        let members = MockMemberRepo { members: vec![] };
        let teams = MockTeamRepo { teams: vec![] };
        let attendance = MockAttendanceRepo { records: vec![] };
        let stats = StatsUseCase::new(&members, &teams, &attendance).get_stats(today()).unwrap();
        assert!(stats.all.is_empty());
        assert!(stats.by_streak.is_empty());
        assert!(stats.by_team_rate.is_empty());
    }

    #[test]
    fn test_serialized_stats_use_camel_case() {
        let ada = Member::new("Ada".to_string());
        let members = MockMemberRepo { members: vec![ada.clone()] };
        let teams = MockTeamRepo { teams: vec![] };
        let attendance = MockAttendanceRepo { records: vec![mark(&ada, 0, true)] };
        let stats = StatsUseCase::new(&members, &teams, &attendance).get_stats(today()).unwrap();

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["byStreak"][0]["currentStreak"], 1);
        assert_eq!(json["all"][0]["presentToday"], true);
        assert!(json["byTeamRate"].as_array().unwrap().is_empty());
    }
}
