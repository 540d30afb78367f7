pub mod analytics;
pub mod attendance;
pub mod employees;
