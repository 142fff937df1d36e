// Cache path utilities.
// Constructs filesystem paths for the per-user daily snapshot files.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/langstat on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "langstat").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to a user's cache directory.
pub fn user_dir(user: &str) -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("users").join(sanitize_name(user)))
}

/// Path to a user's cached repository list.
pub fn repos_path(user: &str) -> Option<PathBuf> {
    user_dir(user).map(|dir| dir.join("repositories.json"))
}

/// Path to a user's cached per-repository language maps.
pub fn languages_path(user: &str) -> Option<PathBuf> {
    user_dir(user).map(|dir| dir.join("languages.json"))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
