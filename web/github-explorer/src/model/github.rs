use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub html_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Stars,
    Forks,
}

impl Counter {
    pub fn icon(self) -> &'static str {
        match self {
            Counter::Stars => "bi-star",
            Counter::Forks => "bi-diagram-2",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Counter::Stars => "Stars",
            Counter::Forks => "Forks",
        }
    }
}

impl Repository {
    /// Counters worth showing on a card. Zero counts are omitted.
    pub fn visible_counters(&self) -> Vec<(Counter, u64)> {
        [
            (Counter::Stars, self.stargazers_count),
            (Counter::Forks, self.forks_count),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
    }

    pub fn updated_at_millis(&self) -> f64 {
        (self.updated_at.unix_timestamp_nanos() / 1_000_000) as f64
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub per_page: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepositoriesPage {
    pub repositories: Option<Vec<Repository>>,
    pub username: String,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_repos: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserStats {
    pub repositories: Option<Vec<Repository>>,
    pub username: String,
    pub stats: Stats,
}

impl UserStats {
    pub fn repositories(&self) -> &[Repository] {
        self.repositories.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn repository_json(stars: u64, forks: u64) -> serde_json::Value {
        json!({
            "id": 1,
            "name": "a",
            "description": null,
            "language": "Rust",
            "stargazers_count": stars,
            "forks_count": forks,
            "updated_at": "2024-03-05T10:20:30Z",
            "html_url": "https://github.com/octocat/a",
        })
    }

    #[test]
    fn test_decode_user_stats() {
        let body = json!({
            "repositories": [repository_json(0, 3)],
            "username": "octocat",
            "stats": {
                "totalStars": 0,
                "totalForks": 3,
                "totalRepos": 1,
            },
        });

        let stats: UserStats = serde_json::from_value(body).unwrap();
        assert_eq!(stats.username, "octocat");
        assert_eq!(
            stats.stats,
            Stats {
                total_stars: 0,
                total_forks: 3,
                total_repos: 1,
            }
        );

        let repos = stats.repositories();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "a");
        assert_eq!(repos[0].description, None);
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert_eq!(repos[0].updated_at.year(), 2024);
        assert_eq!(repos[0].updated_at.day(), 5);
    }

    #[test]
    fn test_missing_repositories_is_empty() {
        let body = json!({
            "username": "ghost",
            "stats": {"totalStars": 0, "totalForks": 0, "totalRepos": 0},
        });

        let stats: UserStats = serde_json::from_value(body).unwrap();
        assert!(stats.repositories.is_none());
        assert!(stats.repositories().is_empty());
    }

    #[test]
    fn test_decode_repositories_page() {
        let body = json!({
            "repositories": [repository_json(12, 0)],
            "username": "octocat",
            "pagination": {
                "current_page": 2,
                "per_page": 30,
                "has_next_page": false,
                "has_previous_page": true,
            },
        });

        let page: RepositoriesPage = serde_json::from_value(body).unwrap();
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.per_page, 30);
        assert!(!page.pagination.has_next_page);
        assert!(page.pagination.has_previous_page);
        assert_eq!(page.repositories.map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_zero_stars_hidden() {
        let repo: Repository = serde_json::from_value(repository_json(0, 3)).unwrap();
        assert_eq!(repo.visible_counters(), vec![(Counter::Forks, 3)]);
    }

    #[test]
    fn test_both_counters_shown() {
        let repo: Repository = serde_json::from_value(repository_json(7, 2)).unwrap();
        assert_eq!(
            repo.visible_counters(),
            vec![(Counter::Stars, 7), (Counter::Forks, 2)]
        );

        let repo: Repository = serde_json::from_value(repository_json(0, 0)).unwrap();
        assert!(repo.visible_counters().is_empty());
    }

    #[test]
    fn test_updated_at_millis() {
        let repo: Repository = serde_json::from_value(repository_json(0, 0)).unwrap();
        assert_eq!(repo.updated_at_millis(), 1_709_634_030_000.0);
    }
}
