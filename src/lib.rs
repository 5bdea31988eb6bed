//! get transcription factor peak sequences from a fa genome using a peak table
//! Pablo Salazar Mendez, 2025
//!
//! Given a single-sequence genome and a table of transcription factor (TF) binding
//! peaks, extracts the bound sequence of every peak and writes one `<TF>.fna`
//! file per TF. Peaks are inclusive on both ends and zero-based.
//!
//! # Usage
//!
//! ```bash
//! Usage: tfpeaks [OPTIONS] --genoma <GENOME> --picos <PEAKS> --salida <OUTDIR>
//!
//! Options:
//!   -g, --genoma <GENOME>    Path to genome FASTA file (.fa, .fna or .fa.gz)
//!   -p, --picos <PEAKS>      Path to peak table with TF_name, Peak_start and Peak_end columns (TSV or CSV)
//!   -s, --salida <OUTDIR>    Existing output directory for the per-TF FASTA files
//!   -L, --level <LEVEL>      Logging verbosity level [default: info]
//!   -h, --help               Print help
//!   -V, --version            Print version
//! ```

pub mod cli;
pub mod consts;
pub mod core;
pub mod error;
pub mod extract;
pub mod fasta;
pub mod genome;
pub mod peaks;

pub use cli::Args;
pub use crate::core::tfpeaks;
pub use error::{PeakError, Result};
pub use extract::{SequenceMap, extract_sequences, slice_peak};
pub use fasta::write_fasta_per_tf;
pub use genome::load_genome;
pub use peaks::{Delimiter, Peak, PeakMap, detect_delimiter, read_peaks};
