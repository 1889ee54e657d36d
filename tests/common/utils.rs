// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use ogextract::{
    index::DuplicatePolicy,
    pipeline::{ExtractOptions, Stages},
    workdir::WorkDir,
};

// A scratch pipeline directory with faa/ and mcl/clusters.2.txt filled in.
#[allow(dead_code)]
pub fn with_workdir(faa: &[(&str, &str)], clusters: &str) -> (TempDir, WorkDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let wd = WorkDir::new(dir.path());
    fs::create_dir_all(wd.faa_dir()).expect("faa dir");
    for (name, contents) in faa {
        fs::write(wd.faa_dir().join(name), contents).expect("write faa");
    }
    let clusters_file = wd.clusters_file("2");
    fs::create_dir_all(clusters_file.parent().unwrap()).expect("mcl dir");
    fs::write(&clusters_file, clusters).expect("write clusters");
    (dir, wd)
}

#[allow(dead_code)]
pub fn archives_only(wd: &WorkDir) -> ExtractOptions {
    ExtractOptions {
        workdir: wd.clone(),
        faa_dir: wd.faa_dir(),
        clusters_file: wd.clusters_file("2"),
        extension: String::from("faa"),
        duplicates: DuplicatePolicy::Warn,
        stages: Stages::ArchivesOnly,
        aligner: PathBuf::from("muscle"),
        hmm_builder: PathBuf::from("hmmbuild"),
    }
}

// Sorted file names in a directory.
#[allow(dead_code)]
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// IDs of the records in a FastA file, in order.
#[allow(dead_code)]
pub fn archive_ids(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read archive")
        .lines()
        .filter_map(|l| l.strip_prefix('>'))
        .map(String::from)
        .collect()
}

// Executable shell script standing in for an external tool.
#[cfg(unix)]
#[allow(dead_code)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write script");
    let mut perms = fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod");
    path
}
