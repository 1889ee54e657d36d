// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::errors::OgError;

/// The pipeline's output directory: protein files in `faa/`, MCL clusterings in `mcl/`, and the
/// per-group outputs written by this tool.
#[derive(Debug, Clone)]
pub struct WorkDir {
    root: PathBuf,
}

impl WorkDir {
    pub const OUTPUT_SUBDIRS: [&'static str; 3] = ["homolog_fasta", "aligned", "hmms"];

    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        WorkDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn faa_dir(&self) -> PathBuf {
        self.root.join("faa")
    }

    /// MCL clustering for the given inflation value, e.g. `mcl/clusters.2.txt` for "2".
    pub fn clusters_file(&self, inflation: &str) -> PathBuf {
        self.root.join("mcl").join(format!("clusters.{}.txt", inflation))
    }

    pub fn homolog_fasta_dir(&self) -> PathBuf {
        self.root.join("homolog_fasta")
    }

    pub fn aligned_dir(&self) -> PathBuf {
        self.root.join("aligned")
    }

    pub fn hmm_dir(&self) -> PathBuf {
        self.root.join("hmms")
    }

    pub fn report_path(&self) -> PathBuf {
        self.root.join("group_descriptions.txt")
    }

    /// Creates the output subdirectories. Existing ones are left alone.
    pub fn setup(&self) -> Result<(), OgError> {
        for sub in Self::OUTPUT_SUBDIRS {
            let path = self.root.join(sub);
            if path.is_dir() {
                info!("Subfolder exists: {}", path.display());
                continue;
            }
            fs::create_dir_all(&path).map_err(OgError::at(&path))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let wd = WorkDir::new("/data/run1");
        assert_eq!(wd.faa_dir(), PathBuf::from("/data/run1/faa"));
        assert_eq!(
            wd.clusters_file("2"),
            PathBuf::from("/data/run1/mcl/clusters.2.txt")
        );
        assert_eq!(
            wd.report_path(),
            PathBuf::from("/data/run1/group_descriptions.txt")
        );
        assert_eq!(wd.hmm_dir(), PathBuf::from("/data/run1/hmms"));
    }

    #[test]
    fn test_setup_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let wd = WorkDir::new(dir.path());
        wd.setup().unwrap();
        fs::write(wd.aligned_dir().join("keep.aln"), "x").unwrap();
        wd.setup().unwrap();
        assert!(wd.homolog_fasta_dir().is_dir());
        assert!(wd.hmm_dir().is_dir());
        assert!(wd.aligned_dir().join("keep.aln").exists());
    }
}
