//! API Configuration
//!
//! Endpoint settings for the followers view, provided via context.

use leptos::prelude::*;
use reqwest::Url;

use crate::api::FetchError;

pub const DEFAULT_FOLLOWERS_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_FOLLOWERS_COUNT: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the people-listing API
    pub followers_url: String,
    /// Value of the `results` query parameter
    pub followers_count: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            followers_url: DEFAULT_FOLLOWERS_URL.to_string(),
            followers_count: DEFAULT_FOLLOWERS_COUNT,
        }
    }
}

impl ApiConfig {
    /// Full request URL, e.g. `https://randomuser.me/api/?results=5`
    pub fn request_url(&self) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.followers_url,
            &[("results", self.followers_count.to_string())],
        )
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }
}

/// Config from context, or the default endpoint when none was provided
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_url() {
        let url = ApiConfig::default().request_url().unwrap();
        assert_eq!(url.as_str(), "https://randomuser.me/api/?results=5");
    }

    #[test]
    fn test_custom_count() {
        let config = ApiConfig {
            followers_url: "http://localhost:8080/api/".to_string(),
            followers_count: 12,
        };
        let url = config.request_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/?results=12");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig {
            followers_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(config.request_url(), Err(FetchError::InvalidUrl(_))));
    }
}
