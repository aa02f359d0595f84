pub mod middleware;
pub mod password;
pub mod session;
pub mod utils;

pub use middleware::{AdminUser, AuthenticatedUser, CurrentSession, MaybeUser, SessionMiddleware};
pub use session::{SessionId, SessionStore};
pub use utils::{require_admin, require_user, ADMIN_LOGIN_PAGE, LOGIN_PAGE};
