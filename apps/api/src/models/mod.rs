pub mod email_log;
pub mod high_five;
pub mod organization;
pub mod user;
