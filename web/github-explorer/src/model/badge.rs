use serde::Serialize;
use url::form_urlencoded;

use crate::service::github::GitHubService;

const BADGE_ALT: &str = "GitHub Stats";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeOption {
    Language,
    Stars,
    Forks,
    Repos,
}

impl BadgeOption {
    pub const ALL: [BadgeOption; 4] = [
        BadgeOption::Language,
        BadgeOption::Stars,
        BadgeOption::Forks,
        BadgeOption::Repos,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BadgeOption::Language => "show_language",
            BadgeOption::Stars => "show_stars",
            BadgeOption::Forks => "show_forks",
            BadgeOption::Repos => "show_repos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BadgeOption::Language => "Show Language",
            BadgeOption::Stars => "Show Stars",
            BadgeOption::Forks => "Show Forks",
            BadgeOption::Repos => "Show Repos",
        }
    }
}

/// Display toggles for the rendered badge. Everything is shown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeOptions {
    pub show_language: bool,
    pub show_stars: bool,
    pub show_forks: bool,
    pub show_repos: bool,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            show_language: true,
            show_stars: true,
            show_forks: true,
            show_repos: true,
        }
    }
}

impl BadgeOptions {
    pub fn get(&self, option: BadgeOption) -> bool {
        match option {
            BadgeOption::Language => self.show_language,
            BadgeOption::Stars => self.show_stars,
            BadgeOption::Forks => self.show_forks,
            BadgeOption::Repos => self.show_repos,
        }
    }

    pub fn toggle(&mut self, option: BadgeOption) {
        let slot = match option {
            BadgeOption::Language => &mut self.show_language,
            BadgeOption::Stars => &mut self.show_stars,
            BadgeOption::Forks => &mut self.show_forks,
            BadgeOption::Repos => &mut self.show_repos,
        };
        *slot = !*slot;
    }
}

/// Route query form of [`BadgeOptions`]: only disabled toggles are present,
/// a missing key reads as enabled. The badge page does not consume it.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BadgeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_stars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_forks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_repos: Option<bool>,
}

impl BadgeQuery {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_query_string(&self) -> String {
        let options = BadgeOptions::from(self.clone());
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(
                BadgeOption::ALL
                    .iter()
                    .filter(|option| !options.get(**option))
                    .map(|option| (option.key(), "false")),
            )
            .finish()
    }
}

fn disabled(enabled: bool) -> Option<bool> {
    (!enabled).then_some(false)
}

impl From<&BadgeOptions> for BadgeQuery {
    fn from(options: &BadgeOptions) -> Self {
        Self {
            show_language: disabled(options.show_language),
            show_stars: disabled(options.show_stars),
            show_forks: disabled(options.show_forks),
            show_repos: disabled(options.show_repos),
        }
    }
}

impl From<BadgeQuery> for BadgeOptions {
    fn from(query: BadgeQuery) -> Self {
        Self {
            show_language: query.show_language.unwrap_or(true),
            show_stars: query.show_stars.unwrap_or(true),
            show_forks: query.show_forks.unwrap_or(true),
            show_repos: query.show_repos.unwrap_or(true),
        }
    }
}

/// Image location and embed snippets for a user's badge.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeData {
    pub image_url: String,
    pub markdown_code: String,
    pub html_code: String,
}

impl BadgeData {
    /// Always the default badge: display toggles are not applied here.
    pub fn new(service: &GitHubService, username: &str) -> Self {
        let image_url = service.badge_url(username);
        let profile_url = service.user_url(username);

        Self {
            markdown_code: format!("[![{BADGE_ALT}]({image_url})]({profile_url})"),
            html_code: format!(
                r#"<a href="{profile_url}"><img src="{image_url}" alt="{BADGE_ALT}"></a>"#
            ),
            image_url,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::api::ApiConfig;

    fn service() -> GitHubService {
        GitHubService::new(ApiConfig::new("https://stats.example.com/api"))
    }

    #[test]
    fn test_default_badge() {
        let badge = BadgeData::new(&service(), "octocat");
        assert_eq!(badge.image_url, "https://stats.example.com/api/octocat/badge");
        assert_eq!(
            badge.markdown_code,
            "[![GitHub Stats](https://stats.example.com/api/octocat/badge)](https://stats.example.com/api/octocat)"
        );
        assert_eq!(
            badge.html_code,
            r#"<a href="https://stats.example.com/api/octocat"><img src="https://stats.example.com/api/octocat/badge" alt="GitHub Stats"></a>"#
        );
    }

    #[test]
    fn test_snippets_reference_image_url() {
        let badge = BadgeData::new(&service(), "rust-lang");

        assert_eq!(badge.image_url, "https://stats.example.com/api/rust-lang/badge");
        assert!(badge.markdown_code.contains(&badge.image_url));
        assert!(badge.html_code.contains(&format!(r#"src="{}""#, badge.image_url)));
        assert!(badge
            .html_code
            .contains(r#"href="https://stats.example.com/api/rust-lang""#));
    }

    #[test]
    fn test_badge_ignores_route_toggles() {
        // disabled toggles only travel in the route, never to the image request
        let mut options = BadgeOptions::default();
        options.toggle(BadgeOption::Stars);
        assert_eq!(
            BadgeQuery::from(&options).to_query_string(),
            "show_stars=false"
        );

        let badge = BadgeData::new(&service(), "octocat");
        assert_eq!(badge.image_url, "https://stats.example.com/api/octocat/badge");
        assert!(!badge.markdown_code.contains("show_"));
        assert!(!badge.html_code.contains("show_"));
    }

    #[test]
    fn test_toggle() {
        let mut options = BadgeOptions::default();
        for option in BadgeOption::ALL {
            assert!(options.get(option));
        }

        options.toggle(BadgeOption::Stars);
        assert!(!options.get(BadgeOption::Stars));
        assert!(options.get(BadgeOption::Language));

        options.toggle(BadgeOption::Stars);
        assert_eq!(options, BadgeOptions::default());
    }

    #[test]
    fn test_query_only_carries_disabled_options() {
        assert!(BadgeQuery::from(&BadgeOptions::default()).is_empty());
        assert_eq!(BadgeQuery::default().to_query_string(), "");

        let mut options = BadgeOptions::default();
        options.toggle(BadgeOption::Language);
        options.toggle(BadgeOption::Repos);
        let query = BadgeQuery::from(&options);

        assert_eq!(
            query,
            BadgeQuery {
                show_language: Some(false),
                show_stars: None,
                show_forks: None,
                show_repos: Some(false),
            }
        );
        assert_eq!(query.to_query_string(), "show_language=false&show_repos=false");
    }

    #[test]
    fn test_query_back_to_options() {
        let query = BadgeQuery {
            show_stars: Some(false),
            show_repos: Some(true),
            ..Default::default()
        };
        let options = BadgeOptions::from(query);

        assert!(options.show_language);
        assert!(!options.show_stars);
        assert!(options.show_forks);
        assert!(options.show_repos);
    }

    #[test]
    fn test_every_option_disabled() {
        let mut options = BadgeOptions::default();
        BadgeOption::ALL
            .into_iter()
            .for_each(|option| options.toggle(option));

        assert_eq!(
            BadgeQuery::from(&options).to_query_string(),
            "show_language=false&show_stars=false&show_forks=false&show_repos=false"
        );
    }
}
