// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{LanguageMap, Repository};

impl GitHubClient {
    /// Get one page of a user's public repositories.
    pub async fn get_user_repos(
        &mut self,
        user: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>> {
        let params = [
            ("per_page", &per_page.to_string()),
            ("page", &page.to_string()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", user), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Get the language byte breakdown for a repository via its locator URL.
    pub async fn get_languages(&mut self, languages_url: &str) -> Result<LanguageMap> {
        let response = self.get_url(languages_url).await?;
        let languages: LanguageMap = response.json().await?;
        Ok(languages)
    }
}
