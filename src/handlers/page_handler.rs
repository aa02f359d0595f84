use std::path::Path;

use actix_files::NamedFile;
use actix_web::{dev::RequestHead, get, web};

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    config::Config,
    errors::{AppError, AppResult},
};

/// Pages only reachable through their guarded routes.
const GUARDED_PAGES: [&str; 3] = ["index.html", "admin.html", "admin-dashboard.html"];

/// Path filter for the static file service. `Files` normalizes `//` and `..`
/// before this runs, so any spelling of a guarded page is caught here.
pub fn is_public_file(path: &Path, _head: &RequestHead) -> bool {
    !GUARDED_PAGES.iter().any(|page| path == Path::new(page))
}

async fn serve_page(config: &Config, name: &str) -> AppResult<NamedFile> {
    let path = config.public_dir.join(name);

    NamedFile::open_async(&path).await.map_err(|e| {
        log::error!("couldn't open page {:?}: {}", path, e);
        AppError::NotFound(format!("Page {} not found", name))
    })
}

#[get("/")]
pub async fn login_page(state: web::Data<AppState>) -> AppResult<NamedFile> {
    serve_page(&state.config, "login.html").await
}

#[get("/index.html")]
pub async fn index_page(
    _auth: AuthenticatedUser,
    state: web::Data<AppState>,
) -> AppResult<NamedFile> {
    serve_page(&state.config, "index.html").await
}

#[get("/admin-login.html")]
pub async fn admin_login_page(state: web::Data<AppState>) -> AppResult<NamedFile> {
    serve_page(&state.config, "admin-login.html").await
}

/// Mounted at both `/admin.html` and `/admin-dashboard.html`.
pub async fn admin_dashboard(
    _admin: AdminUser,
    state: web::Data<AppState>,
) -> AppResult<NamedFile> {
    serve_page(&state.config, "admin-dashboard.html").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixtures::test_state, test_helpers::assert_redirect};
    use actix_web::{http::StatusCode, test as actix_test, App};
    use tempfile::tempdir;

    #[test]
    fn test_guarded_pages_are_not_public_files() {
        let req = actix_test::TestRequest::default().to_http_request();
        let head = req.head();

        assert!(!is_public_file(Path::new("index.html"), head));
        assert!(!is_public_file(Path::new("admin.html"), head));
        assert!(!is_public_file(Path::new("admin-dashboard.html"), head));
        assert!(is_public_file(Path::new("login.html"), head));
        assert!(is_public_file(Path::new("admin-login.html"), head));
        assert!(is_public_file(Path::new("css/index.html.bak"), head));
    }

    #[actix_web::test]
    async fn test_login_page_served() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path()).await;
        std::fs::write(state.config.public_dir.join("login.html"), "<h1>login</h1>").unwrap();

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_page),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "<h1>login</h1>");
    }

    #[actix_web::test]
    async fn test_missing_page_is_not_found() {
        let dir = tempdir().unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(dir.path()).await))
                .service(admin_login_page),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/admin-login.html").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_index_requires_session() {
        let dir = tempdir().unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(dir.path()).await))
                .wrap(crate::auth::SessionMiddleware)
                .service(index_page),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/index.html").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_redirect(&resp, "/login.html");
    }
}
