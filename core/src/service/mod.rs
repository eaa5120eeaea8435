pub mod attendance_service;
pub mod dto;
pub mod export;
pub mod goal_service;
pub mod lookup;
pub mod management_service;
