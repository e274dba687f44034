//! Analysis configuration loaded from a `smellcheck.yaml` file.
//!
//! Every field is optional; absent thresholds fall back to the
//! documented defaults in [`Thresholds`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detect::Thresholds;

/// On-disk configuration. Thresholds left unset resolve to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Glob patterns for paths to exclude from directory scans
    /// (e.g. "**/migrations/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    #[serde(default)]
    pub max_lines: Option<usize>,
    #[serde(default)]
    pub max_methods: Option<usize>,
    #[serde(default)]
    pub max_params: Option<usize>,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Config {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve configured overrides against the defaults.
    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        Thresholds {
            max_lines: self.max_lines.unwrap_or(defaults.max_lines),
            max_methods: self.max_methods.unwrap_or(defaults.max_methods),
            max_params: self.max_params.unwrap_or(defaults.max_params),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
        }
    }

    /// Check whether a path matches any excluded_paths pattern.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        let thresholds = config.thresholds();
        assert_eq!(thresholds, Thresholds::default());
        assert_eq!(thresholds.max_lines, 30);
        assert_eq!(thresholds.max_methods, 10);
        assert_eq!(thresholds.max_params, 5);
        assert_eq!(thresholds.max_depth, 3);
    }

    #[test]
    fn test_partial_overrides() {
        let yaml = "max_lines: 50\nmax_depth: 2\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let thresholds = config.thresholds();
        assert_eq!(thresholds.max_lines, 50);
        assert_eq!(thresholds.max_depth, 2);
        assert_eq!(thresholds.max_methods, 10);
        assert_eq!(thresholds.max_params, 5);
    }

    #[test]
    fn test_excluded_paths_globs() {
        let yaml = "excluded_paths:\n  - \"**/migrations/**\"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.is_path_excluded(Path::new("app/migrations/0001_init.py")));
        assert!(!config.is_path_excluded(Path::new("app/models.py")));
    }

    #[test]
    fn test_parse_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("smellcheck.yaml");
        std::fs::write(&path, "max_params: 3\n").unwrap();

        let config = Config::parse_file(&path).unwrap();
        assert_eq!(config.thresholds().max_params, 3);
    }
}
