use std::sync::Arc;

use crate::{
    auth::SessionStore,
    config::Config,
    errors::AppResult,
    repositories::{JsonQuestionRepository, JsonUserRepository, QuestionRepository, UserRepository},
    services::{QuestionService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub question_service: Arc<QuestionService>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// File-backed state rooted at `config.data_dir`.
    pub async fn new(config: Config) -> AppResult<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let user_repository = Arc::new(JsonUserRepository::new(config.users_file()));
        let question_repository = Arc::new(JsonQuestionRepository::new(config.questions_file()));

        Ok(Self::with_repositories(
            config,
            user_repository,
            question_repository,
        ))
    }

    pub fn with_repositories(
        config: Config,
        user_repository: Arc<dyn UserRepository>,
        question_repository: Arc<dyn QuestionRepository>,
    ) -> Self {
        let user_service = Arc::new(UserService::new(user_repository, &config.admin_username));
        let question_service = Arc::new(QuestionService::new(question_repository));
        let sessions = Arc::new(SessionStore::new(chrono::Duration::minutes(
            config.session_ttl_minutes,
        )));

        Self {
            user_service,
            question_service,
            sessions,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[actix_rt::test]
    async fn test_new_creates_data_dir() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().join("data"),
            ..Config::test_config()
        };

        let state = AppState::new(config).await.unwrap();

        assert!(dir.path().join("data").is_dir());
        assert!(state.sessions.is_empty());
        assert_eq!(state.sessions.ttl(), chrono::Duration::minutes(5));
    }
}
