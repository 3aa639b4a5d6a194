//! Service configuration
//!
//! The collection URL is fixed at build time. Set `TASKS_API_URL` while
//! compiling to point a build at another deployment.

/// Collection endpoint used when `TASKS_API_URL` is unset at build time
pub const DEFAULT_API_URL: &str = "https://todobackend2-1.onrender.com/api/todos";

/// Remote service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Collection resource URL; item paths are `{base_url}/{id}`
    pub base_url: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(option_env!("TASKS_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ServiceConfig::new("http://localhost:5000/api/todos/");
        assert_eq!(config.base_url, "http://localhost:5000/api/todos");
    }

    #[test]
    fn test_default_is_not_empty() {
        assert!(!ServiceConfig::default().base_url.is_empty());
    }
}
