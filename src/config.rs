//! Configuration constants and utilities for tideline
//!
//! This module contains tideline-specific configuration constants and
//! utilities: where the session file lives and which remote endpoint the
//! API client talks to.

/// Default session file path for tideline
pub const DEFAULT_SESSION_PATH: &str = "~/.tideline/session";

/// Environment variable name for overriding the session file path
pub const SESSION_PATH_ENV_VAR: &str = "TIDELINE_SESSION_PATH";

/// Default base URL of the remote social-posting API
pub const DEFAULT_BASE_URL: &str = "https://api.noroff.dev/api/v1/social";

/// Environment variable name for overriding the API base URL
pub const BASE_URL_ENV_VAR: &str = "TIDELINE_BASE_URL";

/// Get the session file path, checking environment variable first, then falling back to default
pub fn get_session_path() -> String {
    std::env::var_os(SESSION_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_SESSION_PATH.to_string())
}

/// Get the API base URL, checking environment variable first, then falling back to default
pub fn get_base_url() -> String {
    std::env::var_os(BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_path() {
        assert_eq!(DEFAULT_SESSION_PATH, "~/.tideline/session");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(SESSION_PATH_ENV_VAR, "TIDELINE_SESSION_PATH");
    }

    #[test]
    fn test_get_session_path_default() {
        // Save current env var state
        let original = std::env::var_os(SESSION_PATH_ENV_VAR);

        // Remove env var if set
        std::env::remove_var(SESSION_PATH_ENV_VAR);
        assert_eq!(get_session_path(), DEFAULT_SESSION_PATH);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(SESSION_PATH_ENV_VAR, val);
        }
    }

    #[test]
    fn test_get_session_path_env_override() {
        // Save current env var state
        let original = std::env::var_os(SESSION_PATH_ENV_VAR);

        let test_path = "/custom/session/path";
        std::env::set_var(SESSION_PATH_ENV_VAR, test_path);
        assert_eq!(get_session_path(), test_path);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(SESSION_PATH_ENV_VAR, val),
            None => std::env::remove_var(SESSION_PATH_ENV_VAR),
        }
    }

    #[test]
    fn test_get_base_url_default() {
        let original = std::env::var_os(BASE_URL_ENV_VAR);

        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(get_base_url(), DEFAULT_BASE_URL);

        if let Some(val) = original {
            std::env::set_var(BASE_URL_ENV_VAR, val);
        }
    }
}
