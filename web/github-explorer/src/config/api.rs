const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/github";

/// Location of the stats API, fixed at build time.
///
/// Set `GITHUB_EXPLORER_API_BASE_URL` when running `trunk build` to point the
/// app at another deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn load() -> Self {
        Self::new(option_env!("GITHUB_EXPLORER_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Self {
                base_url: DEFAULT_API_BASE_URL.to_string(),
            };
        }

        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::load()
    }
}
