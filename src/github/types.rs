// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// GitHub repository, reduced to the fields the pipeline consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub fork: bool,
    pub languages_url: String,
}

/// Language name to byte count for a single repository.
///
/// Ordered map: GitHub returns languages largest-first and the aggregator
/// relies on insertion order for stable tie-breaking, so the order is kept
/// through serialization.
pub type LanguageMap = IndexMap<String, u64>;

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
