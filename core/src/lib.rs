pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{Config, ConfigFile};
pub use error::{Error, Result};
pub use model::attendance::{AttendanceEntry, AttendanceRecord};
pub use model::goal::{week_start, Goal, WeeklyGoals};
pub use model::leaderboard::{compute_stats, MemberHistory, TeamRoster, LEADERBOARD_SIZE};
pub use model::member::Member;
pub use model::stats::{AttendanceStats, MemberStats, TeamStats};
pub use model::streak::compute_streak;
pub use model::team::Team;
pub use repository::{
    AttendanceRepository, FileAttendanceRepository, FileGoalRepository, FileMemberRepository,
    FileTeamRepository, GoalRepository, MemberRepository, TeamRepository,
};
pub use service::attendance_service::AttendanceService;
pub use service::dto::{GoalInput, GoalUpdate, ImportSummary, RecordFilter, RollCall};
pub use service::goal_service::GoalService;
pub use service::management_service::ManagementService;
pub use time::{format_day, parse_day, ReferenceZone};
pub use usecase::stats::StatsUseCase;
