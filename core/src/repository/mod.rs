pub mod attendance;
pub mod file;
pub mod goal;
pub mod json_file;
pub mod traits;

// Re-export
pub use attendance::FileAttendanceRepository;
pub use file::{FileMemberRepository, FileTeamRepository};
pub use goal::FileGoalRepository;
pub use traits::{AttendanceRepository, GoalRepository, MemberRepository, TeamRepository};
