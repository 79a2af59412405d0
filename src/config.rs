//! Runtime configuration
//!
//! Settings come from environment variables with project-relative defaults.

use std::path::{Path, PathBuf};

/// Environment variable overriding the calorie table location
pub const TABLE_PATH_ENV: &str = "MEAL_ANALYZER_TABLE_PATH";

/// Default file name of the calorie table inside the data directory
pub const DEFAULT_TABLE_FILE: &str = "Calorie List.csv";

/// Default log directive when RUST_LOG does not set one
pub const DEFAULT_LOG_DIRECTIVE: &str = "meal_analyzer=info";

/// Get the calorie table path from environment or use default
pub fn get_table_path() -> PathBuf {
    std::env::var(TABLE_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_table_path(&project_root()))
}

/// `<root>/data/Calorie List.csv`
pub fn default_table_path(root: &Path) -> PathBuf {
    root.join("data").join(DEFAULT_TABLE_FILE)
}

/// Directory of the executable, lifted out of `target/{debug,release}`
fn project_root() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(Path::parent) {
            path = grandparent.to_path_buf();
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_path() {
        let path = default_table_path(Path::new("/srv/app"));
        assert_eq!(path, PathBuf::from("/srv/app/data/Calorie List.csv"));
    }
}
