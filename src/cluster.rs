// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::{debug, info};

use crate::errors::OgError;
use crate::index::{IndexEntry, SequenceIndex};
use crate::seq::fasta::write_fasta_record;

/// One line of the clustering file, i.e. one ortholog group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// 1-based line number in the clustering file; also the group number.
    pub line: usize,
    pub members: Vec<String>,
}

impl Cluster {
    pub fn label(&self) -> String {
        group_label(self.line)
    }
}

#[derive(Debug, Default)]
pub struct MaterializeSummary {
    pub clusters: usize,
    pub records: usize,
    pub archives: Vec<PathBuf>,
}

/// `group_` followed by the 1-based group number, zero-padded to at least five digits.
pub fn group_label(number: usize) -> String {
    format!("group_{:05}", number)
}

/// Reads one cluster per line. Blank lines are rejected: they would shift the group numbering.
pub fn read_clusters<P: AsRef<Path>>(path: P) -> Result<Vec<Cluster>, OgError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(OgError::at(path))?;
    let mut clusters = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let l = line.map_err(OgError::at(path))?;
        let members: Vec<String> = l.split_whitespace().map(String::from).collect();
        if members.is_empty() {
            return Err(OgError::Format(format!(
                "{}: clustering line {} is empty",
                path.display(),
                i + 1
            )));
        }
        clusters.push(Cluster {
            line: i + 1,
            members,
        });
    }
    Ok(clusters)
}

fn resolve<'a>(index: &'a SequenceIndex, cluster: &Cluster) -> Result<Vec<&'a IndexEntry>, OgError> {
    cluster
        .members
        .iter()
        .map(|id| {
            index.get(id).ok_or_else(|| OgError::UnknownId {
                id: id.clone(),
                label: cluster.label(),
                line: cluster.line,
            })
        })
        .collect()
}

fn write_archive(path: &Path, cluster: &Cluster, entries: &[&IndexEntry]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for (id, entry) in cluster.members.iter().zip(entries) {
        write_fasta_record(&mut out, id, &entry.sequence)?;
    }
    out.flush()
}

/// Writes one archive per cluster into `archive_dir` (as `<label>.<extension>`) and the
/// tab-separated description report to `report_path`.
///
/// Every member of every cluster is looked up before anything is written, so an unknown ID
/// leaves the output location untouched. Once lookups succeed, any report from a previous run
/// is removed before the first archive is written; the new report is assembled under a
/// `.partial` name and only moved into place once all archives are written.
pub fn materialize_clusters(
    index: &SequenceIndex,
    clusters: &[Cluster],
    archive_dir: &Path,
    report_path: &Path,
    extension: &str,
) -> Result<MaterializeSummary, OgError> {
    let resolved: Vec<Vec<&IndexEntry>> = clusters
        .iter()
        .map(|c| resolve(index, c))
        .collect::<Result<_, _>>()?;

    // A stale report must not sit next to freshly written archives if this run aborts.
    match fs::remove_file(report_path) {
        Ok(()) => debug!("Removed previous report {}", report_path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(OgError::at(report_path)(e)),
    }

    let partial = partial_path(report_path);
    let mut report = BufWriter::new(File::create(&partial).map_err(OgError::at(&partial))?);
    let mut summary = MaterializeSummary::default();

    for (cluster, entries) in clusters.iter().zip(&resolved) {
        let label = cluster.label();
        let archive = archive_dir.join(format!("{}.{}", label, extension));
        debug!("Writing {} ({} members)", archive.display(), entries.len());
        write_archive(&archive, cluster, entries).map_err(OgError::at(&archive))?;

        writeln!(
            report,
            "{}\t{}",
            label,
            entries.iter().map(|e| e.description.as_str()).join("\t")
        )
        .map_err(OgError::at(&partial))?;

        summary.clusters += 1;
        summary.records += entries.len();
        summary.archives.push(archive);
    }

    report.flush().map_err(OgError::at(&partial))?;
    drop(report);
    fs::rename(&partial, report_path).map_err(OgError::at(report_path))?;

    info!(
        "Wrote {} group archives ({} sequences) and {}",
        summary.clusters,
        summary.records,
        report_path.display()
    );
    Ok(summary)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}
