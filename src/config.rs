use std::{env, path::PathBuf};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub session_ttl_minutes: i64,
    pub session_cookie_name: String,
    pub secure_cookies: bool,
    /// Registering under this name yields the admin role.
    pub admin_username: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
            session_ttl_minutes: 120,
            session_cookie_name: "quiz_sid".to_string(),
            secure_cookies: false,
            admin_username: "admin".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: env::var("PORT")
                .or_else(|_| env::var("WEB_SERVER_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(defaults.session_ttl_minutes),
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or(defaults.session_cookie_name),
            secure_cookies: env::var("SECURE_COOKIES")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.secure_cookies),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
        }
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn questions_file(&self) -> PathBuf {
        self.data_dir.join("questions.json")
    }

    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.web_server_host, self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            data_dir: PathBuf::from("target/test-data"),
            public_dir: PathBuf::from("target/test-public"),
            session_ttl_minutes: 5,
            ..Self::default()
        }
    }
}
