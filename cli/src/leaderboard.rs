use chrono::NaiveDate;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Style};
use tabled::{Table, Tabled};
use tracboard_core::{format_day, AttendanceStats, MemberStats, TeamStats};

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "Streak")]
    streak: u32,
    #[tabled(rename = "Present")]
    present: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Today")]
    today: &'static str,
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Team")]
    name: String,
    #[tabled(rename = "Members")]
    members: usize,
    #[tabled(rename = "Rate")]
    rate: String,
}

fn member_rows(stats: &[MemberStats]) -> Vec<MemberRow> {
    stats
        .iter()
        .enumerate()
        .map(|(i, s)| MemberRow {
            rank: i + 1,
            name: s.name.clone(),
            streak: s.current_streak,
            present: format!("{}/{}", s.days_present, s.total_days),
            rate: format!("{:.1}%", s.attendance_rate),
            today: if s.present_today { "yes" } else { "-" },
        })
        .collect()
}

fn team_rows(stats: &[TeamStats]) -> Vec<TeamRow> {
    stats
        .iter()
        .enumerate()
        .map(|(i, s)| TeamRow {
            rank: i + 1,
            name: s.name.clone(),
            members: s.member_count,
            rate: format!("{:.1}%", s.attendance_rate),
        })
        .collect()
}

fn print_table<R: Tabled>(title: &str, rows: Vec<R>) {
    println!("\n\x1b[1;36m{}\x1b[0m", title);
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::modern()).modify(Rows::first(), Color::FG_CYAN);
    println!("{}", table);
}

pub fn print_stats(stats: &AttendanceStats, today: NaiveDate) {
    if stats.all.is_empty() {
        println!("No members yet. Add one with `tracboard member add <name>`.");
        return;
    }

    let here = stats.all.iter().filter(|s| s.present_today).count();
    println!("{}: {} of {} members present", format_day(today), here, stats.all.len());

    print_table("Current streak", member_rows(&stats.by_streak));
    print_table("Days present", member_rows(&stats.by_days_present));
    print_table("Attendance rate", member_rows(&stats.by_attendance_rate));
    print_table("Team attendance", team_rows(&stats.by_team_rate));
}
