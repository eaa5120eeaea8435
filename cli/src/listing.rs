use std::collections::HashMap;

use tabled::settings::object::Rows;
use tabled::settings::{Color, Style};
use tabled::{Table, Tabled};
use chrono::NaiveDate;
use tracboard_core::{format_day, AttendanceRecord, Goal, Member, Team};
use uuid::Uuid;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Present")]
    present: &'static str,
    #[tabled(rename = "Notes")]
    notes: String,
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Email")]
    email: String,
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Members")]
    members: usize,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    title: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Description")]
    description: String,
}

fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

fn print_rows<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::modern()).modify(Rows::first(), Color::FG_CYAN);
    println!("{}", table);
}

pub fn print_records(records: &[AttendanceRecord], members: &[Member]) {
    if records.is_empty() {
        println!("No attendance records found.");
        return;
    }
    let names: HashMap<Uuid, &str> = members.iter().map(|m| (m.id, m.name.as_str())).collect();

    let rows = records
        .iter()
        .map(|r| RecordRow {
            date: format_day(r.date),
            member: names
                .get(&r.member_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| short_id(&r.member_id)),
            present: if r.is_present { "yes" } else { "no" },
            notes: r.notes.clone().unwrap_or_default(),
        })
        .collect();
    print_rows::<RecordRow>(rows);
}

pub fn print_members(members: &[Member], teams: &[Team]) {
    if members.is_empty() {
        println!("No members found.");
        return;
    }
    let team_names: HashMap<Uuid, &str> = teams.iter().map(|t| (t.id, t.name.as_str())).collect();

    let rows = members
        .iter()
        .map(|m| MemberRow {
            id: short_id(&m.id),
            name: m.name.clone(),
            team: m
                .team_id
                .and_then(|id| team_names.get(&id).map(|n| n.to_string()))
                .unwrap_or_else(|| "-".to_string()),
            email: m.email.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    print_rows::<MemberRow>(rows);
}

pub fn print_teams(teams: &[Team], members: &[Member]) {
    if teams.is_empty() {
        println!("No teams found.");
        return;
    }
    let rows = teams
        .iter()
        .map(|t| TeamRow {
            id: short_id(&t.id),
            name: t.name.clone(),
            members: members.iter().filter(|m| m.team_id == Some(t.id)).count(),
        })
        .collect();
    print_rows::<TeamRow>(rows);
}

pub fn print_goals(week_start: NaiveDate, goals: &[Goal]) {
    if goals.is_empty() {
        println!("No goals for the week of {}.", format_day(week_start));
        return;
    }
    println!("\x1b[1mWeek of {}\x1b[0m", format_day(week_start));
    let rows = goals
        .iter()
        .enumerate()
        .map(|(i, g)| GoalRow {
            position: i + 1,
            id: short_id(&g.id),
            title: g.title.clone(),
            done: if g.is_completed { "yes" } else { "no" },
            description: g.description.clone().unwrap_or_default(),
        })
        .collect();
    print_rows::<GoalRow>(rows);
}
