pub mod session;
pub mod session_user;
pub mod teacher;
pub mod user;
