//! get transcription factor peak sequences from a fa genome using a peak table
//! Pablo Salazar Mendez, 2025
//!
//! Error kinds raised along the genome -> peaks -> sequences -> fasta pipeline.

use thiserror::Error;

use std::path::PathBuf;

/// Result alias used by every stage of the pipeline
pub type Result<T> = std::result::Result<T, PeakError>;

#[derive(Debug, Error)]
pub enum PeakError {
    /// An input path does not point to an existing file
    #[error("ERROR: file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The content of an input file does not follow the expected layout
    #[error("ERROR: invalid format in {}: {msg}", path.display())]
    Format { path: PathBuf, msg: String },

    /// A peak does not overlap the genome at all
    #[error("ERROR: locus ({start}, {end}) is not available in the genome (len={len})")]
    OutOfRange { start: usize, end: usize, len: usize },

    /// The output directory is missing; it is never created on the fly
    #[error("ERROR: output directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("ERROR: cannot read or write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lower-level failure while reading or tokenizing the peak table
    #[error("ERROR: failed to process peak table {}: {source}", path.display())]
    Processing {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PeakError {
    pub(crate) fn format<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        PeakError::Format {
            path: path.into(),
            msg: msg.into(),
        }
    }
}
