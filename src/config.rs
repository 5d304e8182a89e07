use std::env;

pub const REPO_URL_ENV_VAR: &str = "GH_REPOSITORY_URL";
/// Set by CircleCI, used when [`REPO_URL_ENV_VAR`] is missing.
pub const CI_REPO_URL_ENV_VAR: &str = "CIRCLE_REPOSITORY_URL";
pub const TOKEN_ENV_VAR: &str = "GH_TOKEN";
pub const API_URL_ENV_VAR: &str = "GH_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Where to look for releases and how to authenticate.
///
/// `repo_url` and `token` are not validated here, a missing value is reported
/// when resolving the last release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo_url: Option<String>,
    pub token: Option<String>,
    pub api_url: String,
}

impl Config {
    pub fn new(repo_url: Option<String>, token: Option<String>) -> Self {
        Self {
            repo_url,
            token,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key-value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let repo_url = get(REPO_URL_ENV_VAR).or_else(|| get(CI_REPO_URL_ENV_VAR));
        let config = Self::new(repo_url, get(TOKEN_ENV_VAR));

        match get(API_URL_ENV_VAR) {
            Some(api_url) => config.with_api_url(api_url),
            None => config,
        }
    }
}
