// Language aggregation.
// Resolves each qualifying repository's language map and merges byte totals.

use indexmap::IndexMap;

use crate::cache::LanguageCache;
use crate::github::{GitHubClient, LanguageMap, Repository};

/// Result of one aggregation pass.
#[derive(Debug, Default)]
pub struct Aggregation {
    /// Cumulative byte count per language, keyed in first-encounter order.
    pub totals: IndexMap<String, u64>,
    /// The language map applied for each qualifying repository, by full name.
    /// Repositories whose fetch failed appear with an empty map.
    pub used: IndexMap<String, LanguageMap>,
}

impl Aggregation {
    /// Sum of byte counts over every aggregated language.
    pub fn grand_total(&self) -> u64 {
        self.totals.values().sum()
    }
}

/// Aggregate language bytes across the qualifying repositories.
///
/// Repositories are processed in listing order. A failed language fetch is
/// reported and contributes nothing; the run keeps going. Every fresh map is
/// recorded in the cache for persistence at the end of the run.
pub async fn aggregate(
    client: &mut GitHubClient,
    repos: &[Repository],
    include_forks: bool,
    lang_cache: &mut LanguageCache,
) -> Aggregation {
    let mut agg = Aggregation::default();

    for repo in qualifying(repos, include_forks) {
        let languages = match lang_cache.get(&repo.full_name) {
            Some(cached) => {
                log::debug!("language cache hit for {}", repo.full_name);
                cached.clone()
            }
            None => match client.get_languages(&repo.languages_url).await {
                Ok(fetched) => {
                    println!("  - Analyzed: {}", repo.name);
                    lang_cache.insert(&repo.full_name, fetched.clone());
                    fetched
                }
                Err(err) => {
                    println!("  - Could not fetch languages for {}: {}", repo.name, err);
                    log::warn!("language fetch failed for {}: {}", repo.full_name, err);
                    LanguageMap::new()
                }
            },
        };

        for (language, bytes) in &languages {
            *agg.totals.entry(language.clone()).or_insert(0) += bytes;
        }
        agg.used.insert(repo.full_name.clone(), languages);
    }

    agg
}

/// Repositories passing the fork-inclusion filter, in listing order.
pub fn qualifying(repos: &[Repository], include_forks: bool) -> impl Iterator<Item = &Repository> {
    repos.iter().filter(move |repo| include_forks || !repo.fork)
}
