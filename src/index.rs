// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use regex::Regex;

use crate::errors::OgError;
use crate::seq::fasta::read_fasta_file;

/// What to do when the same sequence ID shows up more than once in the input directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Log a warning and keep the later record.
    #[default]
    Warn,
    /// Abort the run.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub sequence: String,
    pub description: String,
    pub source: PathBuf,
}

/// Extracts descriptions from FastA headers laid out as `ID <token> <token|pep:...> ...`.
///
/// If the third whitespace-separated token of the header (counting the ID) starts with `pep:`,
/// the description is whatever follows the first `description:` marker. Otherwise the third
/// token itself is the description.
pub struct DescriptionParser {
    marker: Regex,
}

impl DescriptionParser {
    pub fn new() -> Result<Self, OgError> {
        Ok(DescriptionParser {
            marker: Regex::new(r"description:(.*)")?,
        })
    }

    pub fn extract<'a>(&self, header: &'a str) -> Result<&'a str, String> {
        let third = header.split_whitespace().nth(2).ok_or_else(|| {
            format!("header '{}' has fewer than three fields", header)
        })?;
        if third.starts_with("pep:") {
            self.marker
                .captures(header)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .ok_or_else(|| format!("pep: header '{}' has no 'description:' field", header))
        } else {
            Ok(third)
        }
    }
}

pub struct SequenceIndex {
    entries: HashMap<String, IndexEntry>,
    policy: DuplicatePolicy,
    parser: DescriptionParser,
}

impl SequenceIndex {
    pub fn new(policy: DuplicatePolicy) -> Result<Self, OgError> {
        Ok(SequenceIndex {
            entries: HashMap::new(),
            policy,
            parser: DescriptionParser::new()?,
        })
    }

    /// Indexes every regular file in `dir`, in file name order.
    pub fn from_dir<P: AsRef<Path>>(dir: P, policy: DuplicatePolicy) -> Result<Self, OgError> {
        let dir = dir.as_ref();
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(OgError::at(dir))? {
            let entry = entry.map_err(OgError::at(dir))?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            } else {
                debug!("Skipping non-file {}", path.display());
            }
        }
        paths.sort();

        let mut index = SequenceIndex::new(policy)?;
        for path in &paths {
            index.insert_file(path)?;
        }
        info!(
            "Indexed {} sequences from {} files in {}",
            index.len(),
            paths.len(),
            dir.display()
        );
        Ok(index)
    }

    /// Adds every record of one FastA file. Returns the number of records read.
    pub fn insert_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, OgError> {
        let path = path.as_ref();
        debug!("Reading {}", path.display());
        let records = read_fasta_file(path)?;
        let count = records.len();
        for rec in records {
            let description = self
                .parser
                .extract(&rec.header)
                .map_err(|msg| OgError::Format(format!("{}: {}", path.display(), msg)))?
                .to_string();
            let id = rec.id().to_string();
            let entry = IndexEntry {
                sequence: rec.sequence,
                description,
                source: path.to_path_buf(),
            };
            self.insert(id, entry)?;
        }
        Ok(count)
    }

    fn insert(&mut self, id: String, entry: IndexEntry) -> Result<(), OgError> {
        if let Some(previous) = self.entries.get(&id) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(OgError::DuplicateId {
                        id,
                        first: previous.source.clone(),
                        second: entry.source,
                    });
                }
                DuplicatePolicy::Warn => {
                    warn!(
                        "Duplicate sequence ID '{}' ({} and {}); keeping the latter",
                        id,
                        previous.source.display(),
                        entry.source.display()
                    );
                }
            }
        }
        self.entries.insert(id, entry);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&IndexEntry> {
        self.entries.get(id)
    }

    pub fn sequence(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|e| e.sequence.as_str())
    }

    pub fn description(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|e| e.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
