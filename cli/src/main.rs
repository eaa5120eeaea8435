mod leaderboard;
mod listing;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracboard_core::{
    format_day, parse_day, week_start, AttendanceService, Config, ConfigFile, FileAttendanceRepository,
    FileGoalRepository, FileMemberRepository, FileTeamRepository, GoalInput, GoalService, GoalUpdate,
    ManagementService, RecordFilter, RollCall, StatsUseCase,
};

#[derive(Parser)]
#[command(name = "tracboard")]
#[command(about = "Attendance tracking and leaderboards for the robotics team", long_about = None)]
struct Cli {
    /// Directory holding members.json, teams.json, attendance.json and goals.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: ~/.config/tracboard/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Mark a member present (or absent) for a day
    Mark {
        /// Member name or ID
        member: String,
        /// Day: YYYY-MM-DD, today, yesterday, -Nd, -Nw or a weekday
        #[arg(long, default_value = "today", allow_hyphen_values = true)]
        date: String,
        #[arg(long)]
        absent: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a member's mark for a day
    Unmark {
        member: String,
        #[arg(long, allow_hyphen_values = true)]
        date: String,
    },
    /// List attendance records, newest first
    Records {
        #[arg(long, allow_hyphen_values = true)]
        date: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        to: Option<String>,
        #[arg(long)]
        member: Option<String>,
    },
    /// Apply a roll-call JSON file ({"present": [...], "absent": [...], "notes": ...})
    Import {
        file: PathBuf,
        #[arg(long, default_value = "today", allow_hyphen_values = true)]
        date: String,
    },
    /// Show leaderboards
    Stats {
        /// Print the raw stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the full history as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage teams
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },
    /// Manage members
    Member {
        #[command(subcommand)]
        command: MemberCommands,
    },
    /// Weekly team goals
    Goals {
        /// Any day of the target week (same forms as --date)
        #[arg(long, default_value = "today", global = true, allow_hyphen_values = true)]
        week: String,
        #[command(subcommand)]
        command: GoalCommands,
    },
}

#[derive(clap::Subcommand)]
enum TeamCommands {
    Add { name: String },
    List,
    Rename { team: String, name: String },
}

#[derive(clap::Subcommand)]
enum MemberCommands {
    Add {
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        team: Option<String>,
    },
    List,
    Rename { member: String, name: String },
    /// Put a member on a team, or take them off any team when --team is omitted
    Assign {
        member: String,
        #[arg(long)]
        team: Option<String>,
    },
    /// Delete a member and their attendance history
    Remove { member: String },
}

#[derive(clap::Subcommand)]
enum GoalCommands {
    Show,
    /// Replace the week's goals with these titles, in order
    Set {
        #[arg(required = true)]
        titles: Vec<String>,
    },
    Edit {
        /// Goal title or ID
        goal: String,
        #[arg(long)]
        title: Option<String>,
        /// New description; an empty string clears it
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        done: bool,
        #[arg(long, conflicts_with = "done")]
        undone: bool,
    },
    Remove { goal: String },
    /// Remove every goal but keep the week
    Clear,
    /// Delete the week entirely
    DropWeek,
}

struct Repositories {
    members: FileMemberRepository,
    teams: FileTeamRepository,
    attendance: FileAttendanceRepository,
    goals: FileGoalRepository,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn optional_day(input: &Option<String>, today: NaiveDate) -> Result<Option<NaiveDate>> {
    input
        .as_deref()
        .map(|d| parse_day(d, today))
        .transpose()
        .map_err(Into::into)
}

fn completion_flag(done: bool, undone: bool) -> Option<bool> {
    match (done, undone) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = ConfigFile::load(cli.config.as_deref()).context("Failed to load config")?;
    let config = Config::resolve(cli.data_dir.clone(), file)?;
    let today = config.reference_zone.today();
    debug!(data_dir = %config.data_dir.display(), zone = %config.reference_zone, today = %today, "starting");

    let repos = Repositories {
        members: FileMemberRepository::new(&config.data_dir)?,
        teams: FileTeamRepository::new(&config.data_dir)?,
        attendance: FileAttendanceRepository::new(&config.data_dir)?,
        goals: FileGoalRepository::new(&config.data_dir)?,
    };

    run(cli.command, &repos, today)
}

fn run(command: Commands, repos: &Repositories, today: NaiveDate) -> Result<()> {
    let management = ManagementService::new(&repos.members, &repos.teams, &repos.attendance);
    let attendance = AttendanceService::new(&repos.members, &repos.attendance);

    match command {
        Commands::Mark { member, date, absent, notes } => {
            let member = management.find_member(&member)?;
            let date = parse_day(&date, today)?;
            let record = attendance.record(&member.id, date, !absent, notes)?;
            println!(
                "Marked {} {} on {}",
                member.name,
                if record.is_present { "present" } else { "absent" },
                format_day(record.date)
            );
        }
        Commands::Unmark { member, date } => {
            let member = management.find_member(&member)?;
            let date = parse_day(&date, today)?;
            attendance.remove(&member.id, date)?;
            println!("Removed mark for {} on {}", member.name, format_day(date));
        }
        Commands::Records { date, from, to, member } => {
            let member_id = match member {
                Some(q) => Some(management.find_member(&q)?.id),
                None => None,
            };
            let filter = RecordFilter {
                member_id,
                date: optional_day(&date, today)?,
                from: optional_day(&from, today)?,
                to: optional_day(&to, today)?,
            };
            let records = attendance.list(&filter)?;
            listing::print_records(&records, &management.list_members()?);
        }
        Commands::Import { file, date } => {
            let date = parse_day(&date, today)?;
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let roll_call: RollCall = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a roll-call document", file.display()))?;
            let summary = attendance.import_roll_call(&roll_call, date)?;
            println!(
                "Imported roll call for {}: {} present, {} absent",
                format_day(date),
                summary.present,
                summary.absent
            );
            if !summary.created_members.is_empty() {
                println!("  New members: {}", summary.created_members.join(", "));
            }
            if summary.skipped > 0 {
                println!("  Skipped {} blank name(s)", summary.skipped);
            }
        }
        Commands::Stats { json } => {
            let stats = StatsUseCase::new(&repos.members, &repos.teams, &repos.attendance).get_stats(today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                leaderboard::print_stats(&stats, today);
            }
        }
        Commands::Export { output } => {
            let csv = attendance.export_csv()?;
            match output {
                Some(path) => {
                    fs::write(&path, csv).with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Exported attendance to {}", path.display());
                }
                None => print!("{}", csv),
            }
        }
        Commands::Team { command } => match command {
            TeamCommands::Add { name } => {
                let team = management.create_team(&name)?;
                println!("Team added: {} (ID: {})", team.name, team.id);
            }
            TeamCommands::List => {
                listing::print_teams(&management.list_teams()?, &management.list_members()?);
            }
            TeamCommands::Rename { team, name } => {
                let team = management.find_team(&team)?;
                let renamed = management.rename_team(&team.id, &name)?;
                println!("Team renamed: {} -> {}", team.name, renamed.name);
            }
        },
        Commands::Member { command } => match command {
            MemberCommands::Add { name, email, team } => {
                let team_id = match team {
                    Some(q) => Some(management.find_team(&q)?.id),
                    None => None,
                };
                let member = management.create_member(&name, email, team_id)?;
                println!("Member added: {} (ID: {})", member.name, member.id);
            }
            MemberCommands::List => {
                listing::print_members(&management.list_members()?, &management.list_teams()?);
            }
            MemberCommands::Rename { member, name } => {
                let member = management.find_member(&member)?;
                let renamed = management.rename_member(&member.id, &name)?;
                println!("Member renamed: {} -> {}", member.name, renamed.name);
            }
            MemberCommands::Assign { member, team } => {
                let member = management.find_member(&member)?;
                match team {
                    Some(q) => {
                        let team = management.find_team(&q)?;
                        management.assign_member(&member.id, Some(team.id))?;
                        println!("{} assigned to {}", member.name, team.name);
                    }
                    None => {
                        management.assign_member(&member.id, None)?;
                        println!("{} removed from their team", member.name);
                    }
                }
            }
            MemberCommands::Remove { member } => {
                let member = management.find_member(&member)?;
                let removed = management.remove_member(&member.id)?;
                println!("Member removed: {} ({} attendance records deleted)", member.name, removed);
            }
        },
        Commands::Goals { week, command } => {
            let goals = GoalService::new(&repos.goals);
            let date = parse_day(&week, today)?;
            let monday = format_day(week_start(date));
            match command {
                GoalCommands::Show => listing::print_goals(week_start(date), &goals.list_week(date)?),
                GoalCommands::Set { titles } => {
                    let inputs = titles
                        .into_iter()
                        .map(|title| GoalInput { title, description: None })
                        .collect();
                    let saved = goals.set_week(date, inputs)?;
                    println!("Set {} goal(s) for the week of {}", saved.goals.len(), monday);
                }
                GoalCommands::Edit { goal, title, description, done, undone } => {
                    let goal = goals.find_goal(date, &goal)?;
                    let update = GoalUpdate {
                        title,
                        description,
                        is_completed: completion_flag(done, undone),
                    };
                    let updated = goals.update_goal(&goal.id, update)?;
                    println!(
                        "Goal updated: {}{}",
                        updated.title,
                        if updated.is_completed { " (done)" } else { "" }
                    );
                }
                GoalCommands::Remove { goal } => {
                    let goal = goals.find_goal(date, &goal)?;
                    let removed = goals.delete_goal(&goal.id)?;
                    println!("Goal removed: {}", removed.title);
                }
                GoalCommands::Clear => {
                    let cleared = goals.clear_week(date)?;
                    println!("Cleared {} goal(s) from the week of {}", cleared, monday);
                }
                GoalCommands::DropWeek => {
                    goals.delete_week(date)?;
                    println!("Deleted the week of {}", monday);
                }
            }
        }
    }
    Ok(())
}
