// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use crate::config::{find_config, ExtractConfig};
use crate::errors::OgError;
use crate::index::DuplicatePolicy;
use crate::pipeline::{run_pipeline, ExtractOptions, Stages};
use crate::tools::{tool_path, ALIGNER, HMM_BUILDER};
use crate::workdir::WorkDir;

/// For a given clustering, extracts a FastA file for each ortholog group, then aligns the groups
/// and builds a profile HMM for each.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Output directory of the ortholog pipeline (contains faa/ and mcl/)
    outdir: PathBuf,

    /// Clustering file [default: <outdir>/mcl/clusters.<inflation>.txt]
    #[arg(short, long)]
    clusters: Option<PathBuf>,

    /// MCL inflation value that selects the default clustering file
    #[arg(short, long, default_value = "2")]
    inflation: String,

    /// Directory of protein FastA files [default: <outdir>/faa]
    #[arg(long = "faa-dir")]
    faa_dir: Option<PathBuf>,

    /// Extension of the group archives [default: faa]
    #[arg(short, long = "ext")]
    extension: Option<String>,

    /// Abort if a sequence ID occurs more than once (default: warn and keep the last one)
    #[arg(long = "reject-duplicates")]
    reject_duplicates: bool,

    /// Stop after writing the group archives (implies --no-hmm)
    #[arg(long = "no-align")]
    no_align: bool,

    /// Do not build HMMs
    #[arg(long = "no-hmm")]
    no_hmm: bool,

    /// Config file [default: ~/.ogextractconfig, then ./.ogextractconfig]
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<ExtractConfig, OgError> {
    match &cli.config {
        Some(path) => ExtractConfig::from_file(path),
        None => match find_config() {
            Some(path) => {
                info!("Reading config from {}", path.display());
                ExtractConfig::from_file(&path)
            }
            None => Ok(ExtractConfig::default()),
        },
    }
}

fn options(cli: Cli, config: ExtractConfig) -> ExtractOptions {
    let workdir = WorkDir::new(&cli.outdir);
    let faa_dir = cli.faa_dir.unwrap_or_else(|| workdir.faa_dir());
    let clusters_file = cli
        .clusters
        .unwrap_or_else(|| workdir.clusters_file(&cli.inflation));
    let extension = cli
        .extension
        .or(config.archive_extension)
        .unwrap_or_else(|| String::from("faa"));
    let duplicates = if cli.reject_duplicates || config.reject_duplicates == Some(true) {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Warn
    };
    let stages = match (cli.no_align, cli.no_hmm) {
        (true, _) => Stages::ArchivesOnly,
        (false, true) => Stages::Align,
        (false, false) => Stages::AlignAndBuild,
    };
    ExtractOptions {
        workdir,
        faa_dir,
        clusters_file,
        extension,
        duplicates,
        stages,
        aligner: tool_path(ALIGNER, config.muscle_bin_dir.as_deref()),
        hmm_builder: tool_path(HMM_BUILDER, config.hmmbuild_bin_dir.as_deref()),
    }
}

pub fn run() -> Result<(), OgError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    if cli.no_align && cli.no_hmm {
        warn!("--no-hmm is redundant with --no-align");
    }
    let config = load_config(&cli)?;
    let opts = options(cli, config);
    info!(
        "Extracting groups from {} into {}",
        opts.clusters_file.display(),
        opts.workdir.root().display()
    );

    let report = run_pipeline(&opts)?;
    println!(
        "{} groups, {} sequences, {} alignments, {} HMMs",
        report.groups.clusters, report.groups.records, report.alignments, report.hmms
    );
    Ok(())
}
