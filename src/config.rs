// Run configuration.
// Reads the username and API credential once, before any network access.

use std::env;

use crate::error::{LangstatError, Result};

const PLACEHOLDER_USERNAME: &str = "YOUR_GITHUB_USERNAME";

/// Credentials and target account for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub token: String,
}

impl Config {
    /// Build a config from GITHUB_USER and GITHUB_TOKEN.
    ///
    /// A missing token, missing username, or the placeholder username left
    /// over from setup instructions all abort before any request is made.
    pub fn from_env() -> Result<Self> {
        let token = env::var("GITHUB_TOKEN").map_err(|_| LangstatError::MissingToken)?;
        let username = env::var("GITHUB_USER").map_err(|_| LangstatError::MissingUsername)?;
        Self::new(username, token)
    }

    fn new(username: String, token: String) -> Result<Self> {
        if token.is_empty() {
            return Err(LangstatError::MissingToken);
        }
        if username.is_empty() {
            return Err(LangstatError::MissingUsername);
        }
        if username == PLACEHOLDER_USERNAME {
            return Err(LangstatError::PlaceholderUsername);
        }
        Ok(Self { username, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::new("octocat".to_string(), "ghp_abc".to_string()).unwrap();
        assert_eq!(config.username, "octocat");
    }

    #[test]
    fn test_placeholder_username_rejected() {
        let err = Config::new(PLACEHOLDER_USERNAME.to_string(), "ghp_abc".to_string())
            .unwrap_err();
        assert!(matches!(err, LangstatError::PlaceholderUsername));
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = Config::new("octocat".to_string(), String::new()).unwrap_err();
        assert!(matches!(err, LangstatError::MissingToken));
    }

    #[test]
    fn test_empty_username_rejected() {
        let err = Config::new(String::new(), "ghp_abc".to_string()).unwrap_err();
        assert!(matches!(err, LangstatError::MissingUsername));
    }
}
