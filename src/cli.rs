//! get transcription factor peak sequences from a fa genome using a peak table
//! Pablo Salazar Mendez, 2025
//!
//! Reads a single-sequence genome (fa, fa.gz) and a tab or comma delimited
//! table of TF peaks, and writes one FASTA file per transcription factor

use clap::Parser;
use log::Level;

use std::{fmt, path::PathBuf};

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// Path to genome FASTA file (.fa, .fna or .fa.gz)
    #[arg(short = 'g', long = "genoma", alias = "genome")]
    pub genome: PathBuf,

    /// Path to peak table with TF_name, Peak_start and Peak_end columns (TSV or CSV)
    #[arg(short = 'p', long = "picos", alias = "peaks")]
    pub peaks: PathBuf,

    /// Existing output directory for the per-TF FASTA files
    #[arg(short = 's', long = "salida", alias = "outdir")]
    pub outdir: PathBuf,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the Args struct as a comma-separated string of key=value pairs.
///
/// # Example
///
/// ```rust,ignore
/// use tfpeaks::Args;
/// let args = Args::parse();
/// println!("{}", args);
/// ```
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "genome={}, peaks={}, outdir={}, level={}",
            self.genome.display(),
            self.peaks.display(),
            self.outdir.display(),
            self.level,
        )
    }
}
