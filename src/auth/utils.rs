use crate::{
    errors::{AppError, AppResult},
    models::domain::User,
};

pub const LOGIN_PAGE: &str = "/login.html";
pub const ADMIN_LOGIN_PAGE: &str = "/admin-login.html";

/// Passes when a user is bound; otherwise redirects to `login_page`.
pub fn require_user(user: Option<&User>, login_page: &'static str) -> AppResult<()> {
    match user {
        Some(_) => Ok(()),
        None => Err(AppError::Unauthenticated {
            redirect_to: login_page,
        }),
    }
}

pub fn require_admin(user: Option<&User>) -> AppResult<()> {
    let user = user.ok_or(AppError::Unauthenticated {
        redirect_to: ADMIN_LOGIN_PAGE,
    })?;

    if !user.role.is_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
