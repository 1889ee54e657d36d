// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::errors::OgError;

pub const CONFIG_FILE_NAME: &str = ".ogextractconfig";

/// Settings read from `.ogextractconfig` (JSON). Every key is optional; unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub muscle_bin_dir: Option<PathBuf>,
    pub hmmbuild_bin_dir: Option<PathBuf>,
    pub archive_extension: Option<String>,
    pub reject_duplicates: Option<bool>,
}

impl ExtractConfig {
    pub fn from_json(text: &str) -> Result<Self, OgError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, OgError> {
        let text = fs::read_to_string(path).map_err(OgError::at(path))?;
        Self::from_json(&text)
    }
}

/// Looks for the config file in $HOME, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_str() {
        let cfg = ExtractConfig::from_json(
            r##"{
                "muscle_bin_dir": "/opt/muscle",
                "hmmbuild_bin_dir": "/opt/hmmer/bin",
                "archive_extension": "fasta",
                "reject_duplicates": true,
                "palette": ["#010203"]
            }"##,
        )
        .unwrap();
        assert_eq!(cfg.muscle_bin_dir, Some(PathBuf::from("/opt/muscle")));
        assert_eq!(cfg.hmmbuild_bin_dir, Some(PathBuf::from("/opt/hmmer/bin")));
        assert_eq!(cfg.archive_extension.as_deref(), Some("fasta"));
        assert_eq!(cfg.reject_duplicates, Some(true));
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(ExtractConfig::from_json("{}").unwrap(), ExtractConfig::default());
    }

    #[test]
    fn test_bad_config() {
        let err = ExtractConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, OgError::Format(_)));
    }
}
