#[cfg(test)]
pub mod fixtures {
    use std::path::Path;

    use serde_json::json;

    use crate::{app_state::AppState, config::Config, models::domain::Question};

    /// File-backed state with its data and public directories under `root`.
    pub async fn test_state(root: &Path) -> AppState {
        let public_dir = root.join("public");
        std::fs::create_dir_all(&public_dir).expect("public dir should be creatable");

        let config = Config {
            data_dir: root.join("data"),
            public_dir,
            ..Config::test_config()
        };

        AppState::new(config)
            .await
            .expect("test state should build")
    }

    /// A few differently shaped question records.
    pub fn test_questions() -> Vec<Question> {
        vec![
            Question(json!({
                "question": "What is 2 + 2?",
                "options": ["3", "4", "5"],
                "answer": "4"
            })),
            Question(json!({ "question": "Is Rust memory safe?", "answer": true })),
            Question(json!({ "prompt": "Name a planet", "tags": ["space"] })),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::{dev::ServiceResponse, http::header::LOCATION, http::StatusCode};

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts a bare 302 to `location`
    pub fn assert_redirect<B>(resp: &ServiceResponse<B>, location: &str) {
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some(location)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use tempfile::tempdir;

    #[test]
    fn test_fixtures_test_questions() {
        let questions = test_questions();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].0["answer"], "4");
    }

    #[actix_rt::test]
    async fn test_fixtures_test_state_layout() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path()).await;

        assert!(state.config.public_dir.is_dir());
        assert!(state.config.data_dir.is_dir());
    }
}
