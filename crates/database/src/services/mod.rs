pub mod participation;
pub mod session;
pub mod teacher;
pub mod user;

pub use participation::ParticipationService;
pub use session::SessionService;
pub use teacher::TeacherService;
pub use user::UserService;
