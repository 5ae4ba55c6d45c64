use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USER_NAME: &str = "Marcus";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub user_name: String,
    pub fixtures_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let user_name = lookup("APP_USER_NAME")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

        let fixtures_path = lookup("APP_FIXTURES_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            port,
            user_name,
            fixtures_path,
        }
    }
}
