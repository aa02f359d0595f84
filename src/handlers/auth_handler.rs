use actix_web::{
    cookie::{Cookie, SameSite},
    get, post, web,
    web::Either,
    HttpResponse,
};

use crate::{
    app_state::AppState,
    auth::{MaybeUser, SessionId},
    config::Config,
    errors::AppError,
    models::dto::{
        request::{Credentials, CredentialsRequest},
        response::{CheckLoginResponse, LoginResponse, SuccessResponse, UserDto},
    },
};

/// The login and registration forms post either JSON or url-encoded bodies.
type CredentialsBody = Either<web::Json<CredentialsRequest>, web::Form<CredentialsRequest>>;

fn credentials_from(body: CredentialsBody) -> Result<Credentials, AppError> {
    let request = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    Ok(request.into_credentials()?)
}

/// Browser-session cookie; the server side enforces the idle timeout.
pub fn session_cookie(config: &Config, id: SessionId) -> Cookie<'static> {
    Cookie::build(config.session_cookie_name.clone(), id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .finish()
}

fn expired_session_cookie(config: &Config) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.session_cookie_name.clone(), "")
        .path("/")
        .finish();
    cookie.make_removal();
    cookie
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    body: CredentialsBody,
) -> Result<HttpResponse, AppError> {
    state.user_service.register(credentials_from(body)?).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::new("Registration successful!")))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    current: MaybeUser,
    body: CredentialsBody,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.authenticate(credentials_from(body)?).await?;

    // Never reuse a token that existed before authentication.
    if let Some(previous) = current.0 {
        state.sessions.destroy(&previous.id);
    }

    let role = user.role;
    let username = user.username.clone();
    let session_id = state.sessions.create(user);
    log::info!("{} logged in as {:?}", username, role);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&state.config, session_id))
        .json(LoginResponse { success: true, role }))
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, current: MaybeUser) -> HttpResponse {
    if let Some(session) = current.0 {
        state.sessions.destroy(&session.id);
        log::info!("{} logged out", session.user.username);
    }

    HttpResponse::Ok()
        .cookie(expired_session_cookie(&state.config))
        .json(SuccessResponse::new("Logged out successfully"))
}

#[get("/check-login")]
pub async fn check_login(current: MaybeUser) -> HttpResponse {
    let user = current.0.map(|session| UserDto::from(session.user));

    HttpResponse::Ok().json(CheckLoginResponse {
        logged_in: user.is_some(),
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::SessionMiddleware,
        handlers::{form_config, json_config},
        test_utils::{fixtures::test_state, test_helpers::assert_error_status},
    };
    use actix_web::{http::StatusCode, test as actix_test, App};
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[test]
    fn test_session_cookie_attributes() {
        let config = Config::test_config();
        let id = SessionId::new();
        let cookie = session_cookie(&config, id);

        assert_eq!(cookie.name(), config.session_cookie_name);
        assert_eq!(cookie.value(), id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[actix_web::test]
    async fn test_check_login_without_session() {
        let dir = tempdir().unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(dir.path()).await))
                .wrap(SessionMiddleware)
                .service(check_login),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/check-login").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "loggedIn": false }));
    }

    #[actix_web::test]
    async fn test_register_accepts_form_body() {
        let dir = tempdir().unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(dir.path()).await))
                .app_data(json_config())
                .app_data(form_config())
                .wrap(SessionMiddleware)
                .service(register),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "formuser"), ("password", "pw")])
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_register_rejects_blank_username() {
        let dir = tempdir().unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(dir.path()).await))
                .app_data(json_config())
                .app_data(form_config())
                .wrap(SessionMiddleware)
                .service(register),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "", "password": "pw" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_logout_without_session_still_succeeds() {
        let dir = tempdir().unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(dir.path()).await))
                .wrap(SessionMiddleware)
                .service(logout),
        )
        .await;

        let req = actix_test::TestRequest::post().uri("/logout").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Logged out successfully");
    }
}
