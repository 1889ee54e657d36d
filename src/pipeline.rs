// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use log::info;

use crate::cluster::{materialize_clusters, read_clusters, MaterializeSummary};
use crate::errors::OgError;
use crate::index::{DuplicatePolicy, SequenceIndex};
use crate::tools::{align_groups, build_hmms};
use crate::workdir::WorkDir;

/// Which stages to run after the group archives are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stages {
    ArchivesOnly,
    Align,
    AlignAndBuild,
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub workdir: WorkDir,
    pub faa_dir: PathBuf,
    pub clusters_file: PathBuf,
    pub extension: String,
    pub duplicates: DuplicatePolicy,
    pub stages: Stages,
    pub aligner: PathBuf,
    pub hmm_builder: PathBuf,
}

#[derive(Debug)]
pub struct ExtractReport {
    pub groups: MaterializeSummary,
    pub alignments: usize,
    pub hmms: usize,
}

/// Runs setup, indexing, group extraction and (depending on `stages`) alignment and HMM
/// building, strictly one after the other. The first error aborts the run.
pub fn run_pipeline(opts: &ExtractOptions) -> Result<ExtractReport, OgError> {
    let wd = &opts.workdir;
    wd.setup()?;

    let index = SequenceIndex::from_dir(&opts.faa_dir, opts.duplicates)?;
    info!("Writing fasta files and parsing descriptions...");
    let clusters = read_clusters(&opts.clusters_file)?;
    let groups = materialize_clusters(
        &index,
        &clusters,
        &wd.homolog_fasta_dir(),
        &wd.report_path(),
        &opts.extension,
    )?;

    let mut report = ExtractReport {
        groups,
        alignments: 0,
        hmms: 0,
    };
    if opts.stages == Stages::ArchivesOnly {
        return Ok(report);
    }
    // Only this run's archives: stale groups from an earlier, larger clustering are left alone.
    let alignments = align_groups(&opts.aligner, &report.groups.archives, &wd.aligned_dir())?;
    report.alignments = alignments.len();
    if opts.stages == Stages::AlignAndBuild {
        report.hmms = build_hmms(&opts.hmm_builder, &alignments, &wd.hmm_dir())?;
    }
    Ok(report)
}
