use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{
        session::SessionId,
        utils::{require_admin, require_user, ADMIN_LOGIN_PAGE, LOGIN_PAGE},
    },
    errors::AppError,
    models::domain::User,
};

/// The session bound to a request, resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: SessionId,
    pub user: User,
}

/// Resolves the session cookie into a [`CurrentSession`] request extension.
/// Requests without a live session pass through untouched; the extractors
/// below decide what a missing session means for a given route.
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| ErrorInternalServerError("Application state not configured"))?;

            let session = req
                .cookie(&state.config.session_cookie_name)
                .and_then(|cookie| cookie.value().parse::<SessionId>().ok())
                .and_then(|id| {
                    state
                        .sessions
                        .lookup(&id)
                        .map(|user| CurrentSession { id, user })
                });

            if let Some(session) = session {
                req.extensions_mut().insert(session);
            }

            service.call(req).await
        })
    }
}

fn current_session(req: &HttpRequest) -> Option<CurrentSession> {
    req.extensions().get::<CurrentSession>().cloned()
}

/// Session if one is bound; never rejects.
pub struct MaybeUser(pub Option<CurrentSession>);

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(MaybeUser(current_session(req))))
    }
}

/// Any logged-in user; otherwise redirects to the login page.
pub struct AuthenticatedUser(pub CurrentSession);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = current_session(req);
        let outcome = require_user(session.as_ref().map(|s| &s.user), LOGIN_PAGE);

        ready(outcome.and_then(|()| {
            session
                .map(AuthenticatedUser)
                .ok_or(AppError::Unauthenticated {
                    redirect_to: LOGIN_PAGE,
                })
        }))
    }
}

/// A logged-in admin; redirects to the admin login page when nobody is
/// logged in and answers 403 for regular users.
pub struct AdminUser(pub CurrentSession);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = current_session(req);
        let outcome = require_admin(session.as_ref().map(|s| &s.user));

        if let Err(e) = &outcome {
            log::debug!("{} rejected: {}", req.path(), e);
        }

        ready(outcome.and_then(|()| {
            session.map(AdminUser).ok_or(AppError::Unauthenticated {
                redirect_to: ADMIN_LOGIN_PAGE,
            })
        }))
    }
}
