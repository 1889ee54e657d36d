// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io, path::PathBuf, process::ExitStatus};

#[derive(Debug)]
pub enum OgError {
    Io(io::Error),
    File {
        path: PathBuf,
        source: io::Error,
    },
    Format(String),
    UnknownId {
        id: String,
        label: String,
        line: usize,
    },
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
    Tool {
        program: String,
        status: ExitStatus,
    },
}

impl OgError {
    // Attaches the offending path to an I/O error; use as `.map_err(OgError::at(&path))`.
    pub fn at<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> OgError {
        let path = path.into();
        move |source| OgError::File { path, source }
    }
}

// These allow conversion to OgError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for OgError {
    fn from(e: io::Error) -> Self {
        OgError::Io(e)
    }
}

impl From<String> for OgError {
    fn from(s: String) -> Self {
        OgError::Format(s)
    }
}

impl From<regex::Error> for OgError {
    fn from(e: regex::Error) -> Self {
        OgError::Format(e.to_string())
    }
}

impl From<serde_json::Error> for OgError {
    fn from(e: serde_json::Error) -> Self {
        OgError::Format(format!("invalid config: {}", e))
    }
}

impl fmt::Display for OgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OgError::Io(e) => write!(f, "I/O error: {}", e),
            OgError::File { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            OgError::Format(msg) => write!(f, "Format error: {}", msg),
            OgError::UnknownId { id, label, line } => write!(
                f,
                "Unknown identifier '{}' in {} (clustering line {})",
                id, label, line
            ),
            OgError::DuplicateId { id, first, second } => write!(
                f,
                "Duplicate identifier '{}' (in {} and {})",
                id,
                first.display(),
                second.display()
            ),
            OgError::Tool { program, status } => write!(f, "{} failed ({})", program, status),
        }
    }
}

impl std::error::Error for OgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OgError::Io(e) => Some(e),
            OgError::File { source, .. } => Some(source),
            _ => None,
        }
    }
}
