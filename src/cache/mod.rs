// Cache module for local filesystem caching.
// Stores daily snapshots of GitHub API responses to limit repeat requests.

pub mod languages;
pub mod paths;
pub mod store;

pub use languages::LanguageCache;
pub use store::{Lookup, load, save, today};
