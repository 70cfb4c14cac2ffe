//! Local env file loader.
//!
//! Loads `key=value` pairs from a local configuration file into the process
//! environment. Variables already set in the environment are never
//! overridden, so the file only supplies defaults.

use std::path::Path;

/// Parses `key=value` lines from an env file.
///
/// Blank lines and `#` comments are skipped. Each remaining line is split on
/// the first `=`; keys and values are trimmed and kept verbatim otherwise.
/// Lines without `=` or with an empty key are ignored.
pub fn parse_env_lines(content: &str) -> Vec<(String, String)> {
    let mut vars = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            vars.push((key.to_string(), value.trim().to_string()));
        }
    }
    vars
}

/// Loads the env file at `path` into the process environment (best-effort,
/// no error if missing). Only sets variables that are not already set.
pub fn load_env_file(path: &Path) {
    if !path.exists() {
        return;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read env file");
            return;
        }
    };

    let mut loaded = 0usize;
    for (key, value) in parse_env_lines(&content) {
        if std::env::var(&key).is_err() {
            std::env::set_var(&key, value);
            loaded += 1;
        }
    }
    if loaded > 0 {
        tracing::debug!(path = %path.display(), count = loaded, "Loaded variables from env file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "# comment\n\nDB_HOST=localhost\n  # indented comment\nDB_PORT=5432\n";
        let vars = parse_env_lines(content);
        assert_eq!(
            vars,
            vec![
                ("DB_HOST".to_string(), "localhost".to_string()),
                ("DB_PORT".to_string(), "5432".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_trims_keys_and_values() {
        let vars = parse_env_lines("  DB_USER =  admin  ");
        assert_eq!(vars, vec![("DB_USER".to_string(), "admin".to_string())]);
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let vars = parse_env_lines("DB_PASSWORD=a=b=c");
        assert_eq!(vars, vec![("DB_PASSWORD".to_string(), "a=b=c".to_string())]);
    }

    #[test]
    fn test_parse_ignores_lines_without_equals() {
        assert!(parse_env_lines("not a pair\n").is_empty());
    }

    #[test]
    fn test_load_does_not_override_existing_variables() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("env_file_test_{}.env", std::process::id()));
        std::fs::write(
            &path,
            "ENV_FILE_TEST_PRESET=from_file\nENV_FILE_TEST_FRESH=from_file\n",
        )
        .unwrap();

        std::env::set_var("ENV_FILE_TEST_PRESET", "from_env");
        load_env_file(&path);

        assert_eq!(
            std::env::var("ENV_FILE_TEST_PRESET").unwrap(),
            "from_env"
        );
        assert_eq!(
            std::env::var("ENV_FILE_TEST_FRESH").unwrap(),
            "from_file"
        );

        std::env::remove_var("ENV_FILE_TEST_PRESET");
        std::env::remove_var("ENV_FILE_TEST_FRESH");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_a_noop() {
        load_env_file(Path::new("/nonexistent/.env"));
    }
}
