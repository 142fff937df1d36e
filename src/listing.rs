// Repository listing.
// Serves today's cached repository list or walks the paginated API.

use crate::cache::{self, Lookup, paths};
use crate::config::Config;
use crate::error::Result;
use crate::github::{GitHubClient, Repository};

const PER_PAGE: u32 = 100;

/// List all repositories for the configured user.
///
/// A fresh, non-empty snapshot is returned without touching the network.
/// Otherwise every page is fetched; any page failure aborts the listing so a
/// partial list is never cached or aggregated.
pub async fn list_repositories(
    client: &mut GitHubClient,
    config: &Config,
) -> Result<Vec<Repository>> {
    let today = cache::today();
    let path = paths::repos_path(&config.username);

    if let Some(path) = path.as_deref() {
        if let Lookup::Fresh(repos) = cache::load::<Vec<Repository>>(path, &today) {
            if !repos.is_empty() {
                println!("Using today's cached repository list ({} repositories).", repos.len());
                return Ok(repos);
            }
        }
    }

    let mut repos = Vec::new();
    let mut page = 1u32;
    loop {
        println!("Fetching repositories page {}...", page);
        let batch = client
            .get_user_repos(&config.username, page, PER_PAGE)
            .await?;
        if batch.is_empty() {
            break;
        }
        repos.extend(batch);
        page += 1;
    }

    if let Some(path) = path.as_deref() {
        if let Err(err) = cache::save(path, &today, &repos) {
            log::warn!("failed to save repository cache {}: {}", path.display(), err);
        }
    }

    Ok(repos)
}
