pub mod auth_handler;
pub mod page_handler;
pub mod question_handler;

use actix_files::Files;
use actix_web::web;

use crate::{config::Config, errors::AppError};

pub use auth_handler::{check_login, login, logout, register};
pub use page_handler::{admin_dashboard, admin_login_page, index_page, login_page};
pub use question_handler::{add_question, list_questions};

/// Malformed bodies answer with the same JSON error shape as everything else.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Registers every route. The static file service is mounted last and never
/// serves the guarded pages itself.
pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.app_data(json_config())
        .app_data(form_config())
        .service(register)
        .service(login)
        .service(logout)
        .service(check_login)
        .service(list_questions)
        .service(add_question)
        .service(login_page)
        .service(index_page)
        .service(admin_login_page)
        .service(
            web::resource(["/admin.html", "/admin-dashboard.html"])
                .route(web::get().to(admin_dashboard)),
        )
        .service(
            Files::new("/", config.public_dir.clone()).path_filter(page_handler::is_public_file),
        );
}
