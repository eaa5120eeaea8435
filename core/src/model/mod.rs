pub mod attendance;
pub mod goal;
pub mod leaderboard;
pub mod member;
pub mod stats;
pub mod streak;
pub mod team;
