// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::{debug, info};

use crate::errors::OgError;

pub const ALIGNER: &str = "muscle";
pub const HMM_BUILDER: &str = "hmmbuild";

/// Path to an external program: `<bin_dir>/<name>` if a directory is configured, otherwise the
/// bare name (resolved through PATH).
pub fn tool_path(name: &str, bin_dir: Option<&Path>) -> PathBuf {
    match bin_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// An external command that is run to completion before anything else happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        ToolCommand {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: Into<OsString>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Spawns the program, waits for it to exit, and fails unless it exited successfully.
    pub fn run(&self) -> Result<(), OgError> {
        debug!("Running {:?} {:?}", self.program, self.args);
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(OgError::at(&self.program))?;
        if !status.success() {
            return Err(OgError::Tool {
                program: self.program.display().to_string(),
                status,
            });
        }
        Ok(())
    }
}

// File name up to the first '.', e.g. "group_00001" for "group_00001.faa".
fn group_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((stem, _)) => String::from(stem),
        None => name,
    }
}

/// `<aligned_dir>/<stem>.aln`, where the archive's alignment is written.
pub fn alignment_path(archive: &Path, aligned_dir: &Path) -> PathBuf {
    aligned_dir.join(format!("{}.aln", group_stem(archive)))
}

/// `muscle -in <archive> -out <aligned_dir>/<stem>.aln`
pub fn align_command(aligner: &Path, archive: &Path, aligned_dir: &Path) -> ToolCommand {
    let aln = alignment_path(archive, aligned_dir);
    ToolCommand::new(aligner)
        .arg("-in")
        .arg(archive)
        .arg("-out")
        .arg(aln)
}

/// `hmmbuild <hmm_dir>/<stem>.hmm <alignment>`
pub fn hmmbuild_command(builder: &Path, alignment: &Path, hmm_dir: &Path) -> ToolCommand {
    let hmm = hmm_dir.join(format!("{}.hmm", group_stem(alignment)));
    ToolCommand::new(builder).arg(hmm).arg(alignment)
}

/// Aligns the given archives, one at a time, into `aligned_dir`. Returns the alignment paths in
/// the same order.
pub fn align_groups(
    aligner: &Path,
    archives: &[PathBuf],
    aligned_dir: &Path,
) -> Result<Vec<PathBuf>, OgError> {
    info!("Aligning {} groups...", archives.len());
    let mut alignments = Vec::with_capacity(archives.len());
    for archive in archives {
        align_command(aligner, archive, aligned_dir).run()?;
        alignments.push(alignment_path(archive, aligned_dir));
    }
    Ok(alignments)
}

/// Builds a profile HMM for each of the given alignments. Returns the number of models.
pub fn build_hmms(builder: &Path, alignments: &[PathBuf], hmm_dir: &Path) -> Result<usize, OgError> {
    info!("Building {} hmms...", alignments.len());
    for aln in alignments {
        hmmbuild_command(builder, aln, hmm_dir).run()?;
    }
    Ok(alignments.len())
}
