use actix_web::{get, post, web, web::Either, HttpResponse};
use serde_json::{Map, Value};

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::{domain::Question, dto::response::MessageResponse},
};

/// Url-encoded submissions become a flat object of string fields.
type QuestionBody = Either<web::Json<Question>, web::Form<Map<String, Value>>>;

fn question_from(body: QuestionBody) -> Question {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => Question(Value::Object(form.into_inner())),
    }
}

#[get("/questions")]
pub async fn list_questions(
    _auth: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

// The guard comes first so a rejected request never has its body read.
#[post("/questions")]
pub async fn add_question(
    admin: AdminUser,
    state: web::Data<AppState>,
    body: QuestionBody,
) -> Result<HttpResponse, AppError> {
    state
        .question_service
        .add_question(question_from(body), &admin.0.user.username)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Question added successfully!".to_string(),
    }))
}
