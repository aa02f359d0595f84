pub mod question;
pub mod user;
pub use question::Question;
pub use user::{User, UserRole};
