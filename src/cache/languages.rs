// In-memory view of the per-repository language snapshot.
// Accumulates freshly fetched maps and persists only when something changed.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::github::LanguageMap;

use super::store::{self, Lookup};

/// Language maps keyed by repository full name, loaded for one run.
///
/// Entries are only ever added, so repositories cached earlier in the day
/// survive runs that no longer visit them.
pub struct LanguageCache {
    path: Option<PathBuf>,
    entries: IndexMap<String, LanguageMap>,
    dirty: bool,
}

impl LanguageCache {
    /// Load today's language snapshot, starting empty on any miss.
    pub fn load(path: Option<PathBuf>, today: &str) -> Self {
        let entries = path
            .as_deref()
            .and_then(|p| store::load::<IndexMap<String, LanguageMap>>(p, today).fresh())
            .unwrap_or_default();

        Self {
            path,
            entries,
            dirty: false,
        }
    }

    /// Construct an in-memory cache with no backing file.
    #[cfg(test)]
    pub fn in_memory(entries: IndexMap<String, LanguageMap>) -> Self {
        Self {
            path: None,
            entries,
            dirty: false,
        }
    }

    /// Look up a repository's cached language map by full name.
    pub fn get(&self, full_name: &str) -> Option<&LanguageMap> {
        self.entries.get(full_name)
    }

    /// Record a freshly fetched language map.
    pub fn insert(&mut self, full_name: &str, languages: LanguageMap) {
        self.entries.insert(full_name.to_string(), languages);
        self.dirty = true;
    }

    /// Whether any map was fetched since loading.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the snapshot back if anything was fetched this run.
    ///
    /// A failed write is a warning, not an error: the report was computed
    /// from in-memory data and only a later run pays the re-fetch cost.
    pub fn persist(&self, today: &str) {
        if !self.dirty {
            return;
        }
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Err(err) = store::save(path, today, &self.entries) {
            log::warn!("failed to save language cache {}: {}", path.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;
    use tempfile::TempDir;

    fn sample_map() -> LanguageMap {
        indexmap! {
            "Rust".to_string() => 1024u64,
            "Shell".to_string() => 64u64,
        }
    }

    #[test]
    fn test_load_absent_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("languages.json");

        let cache = LanguageCache::load(Some(path), "2026-08-07");
        assert!(cache.entries.is_empty());
        assert!(!cache.is_dirty());
    }

    #[test]
    fn test_insert_marks_dirty_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("languages.json");

        let mut cache = LanguageCache::load(Some(path.clone()), "2026-08-07");
        cache.insert("octocat/hello", sample_map());
        assert!(cache.is_dirty());
        cache.persist("2026-08-07");

        let reloaded = LanguageCache::load(Some(path), "2026-08-07");
        assert_eq!(reloaded.get("octocat/hello"), Some(&sample_map()));
        assert!(!reloaded.is_dirty());
    }

    #[test]
    fn test_clean_cache_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("languages.json");

        let cache = LanguageCache::load(Some(path.clone()), "2026-08-07");
        cache.persist("2026-08-07");
        assert!(!path.exists());
    }

    #[test]
    fn test_insert_keeps_unrelated_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("languages.json");

        let mut cache = LanguageCache::load(Some(path.clone()), "2026-08-07");
        cache.insert("octocat/hello", sample_map());
        cache.persist("2026-08-07");

        let mut second = LanguageCache::load(Some(path.clone()), "2026-08-07");
        second.insert("octocat/world", indexmap! { "Go".to_string() => 7u64 });
        second.persist("2026-08-07");

        let reloaded = LanguageCache::load(Some(path), "2026-08-07");
        assert!(reloaded.get("octocat/hello").is_some());
        assert!(reloaded.get("octocat/world").is_some());
    }

    #[test]
    fn test_stale_snapshot_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("languages.json");

        let mut cache = LanguageCache::load(Some(path.clone()), "2026-08-06");
        cache.insert("octocat/hello", sample_map());
        cache.persist("2026-08-06");

        let next_day = LanguageCache::load(Some(path), "2026-08-07");
        assert!(next_day.entries.is_empty());
    }
}
