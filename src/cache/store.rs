// Cache store for reading and writing daily snapshots.
// Handles JSON serialization, calendar-day freshness, and filesystem operations.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Wrapper for cached data, valid for a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// Local calendar date the data was cached, formatted YYYY-MM-DD.
    pub date: String,
    /// The cached data.
    pub data: T,
}

/// Outcome of a cache lookup.
///
/// Everything but `Fresh` is a miss to callers; the variants stay distinct
/// so corruption remains visible in diagnostics.
#[derive(Debug)]
pub enum Lookup<T> {
    Fresh(T),
    Stale,
    Corrupt,
    Absent,
}

impl<T> Lookup<T> {
    /// Unwrap a fresh value, discarding stale/corrupt/absent outcomes.
    pub fn fresh(self) -> Option<T> {
        match self {
            Lookup::Fresh(data) => Some(data),
            _ => None,
        }
    }
}

/// Today's local calendar date, formatted YYYY-MM-DD.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Read a snapshot from a file, classifying its freshness.
///
/// Unreadable or unparseable files are reported and treated as misses so a
/// damaged cache never halts the pipeline.
pub fn load<T: DeserializeOwned>(path: &Path, today: &str) -> Lookup<T> {
    if !path.exists() {
        return Lookup::Absent;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::warn!("unreadable cache file {}: {}", path.display(), err);
            return Lookup::Corrupt;
        }
    };

    let snapshot: Snapshot<T> = match serde_json::from_str(&contents) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::warn!("corrupt cache file {}: {}", path.display(), err);
            return Lookup::Corrupt;
        }
    };

    if snapshot.date == today {
        Lookup::Fresh(snapshot.data)
    } else {
        Lookup::Stale
    }
}

/// Write a snapshot for the given day, replacing any previous one.
pub fn save<T: Serialize>(path: &Path, today: &str, data: &T) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let snapshot = Snapshot {
        date: today.to_string(),
        data,
    };
    let json = serde_json::to_string_pretty(&snapshot)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_save_and_load_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        save(&path, "2026-08-07", &data).unwrap();

        match load::<TestData>(&path, "2026-08-07") {
            Lookup::Fresh(loaded) => assert_eq!(loaded, data),
            other => panic!("expected fresh snapshot, got {:?}", other),
        }
    }

    #[test]
    fn test_yesterdays_snapshot_is_stale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        save(&path, "2026-08-06", &data).unwrap();

        assert!(matches!(
            load::<TestData>(&path, "2026-08-07"),
            Lookup::Stale
        ));
    }

    #[test]
    fn test_truncated_json_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        std::fs::write(&path, "{\"date\": \"2026-08-07\", \"data\": {\"na").unwrap();

        assert!(matches!(
            load::<TestData>(&path, "2026-08-07"),
            Lookup::Corrupt
        ));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        std::fs::write(&path, "{\"date\": \"2026-08-07\", \"data\": [1, 2]}").unwrap();

        assert!(matches!(
            load::<TestData>(&path, "2026-08-07"),
            Lookup::Corrupt
        ));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(matches!(
            load::<TestData>(&path, "2026-08-07"),
            Lookup::Absent
        ));
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let first = TestData {
            name: "first".to_string(),
            value: 1,
        };
        let second = TestData {
            name: "second".to_string(),
            value: 2,
        };

        save(&path, "2026-08-07", &first).unwrap();
        save(&path, "2026-08-07", &second).unwrap();

        let loaded = load::<TestData>(&path, "2026-08-07").fresh().unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_today_format() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
