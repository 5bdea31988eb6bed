//! get transcription factor peak sequences from a fa genome using a peak table
//! Pablo Salazar Mendez, 2025
//!
//! Fixed names and markers shared by the readers and the writer.

/// Marker that opens every FASTA header line
pub const FASTA_HEADER: u8 = b'>';

/// Columns every peak table must carry, in any order
pub const TF_NAME: &str = "TF_name";
pub const PEAK_START: &str = "Peak_start";
pub const PEAK_END: &str = "Peak_end";
pub const REQUIRED_COLUMNS: [&str; 3] = [TF_NAME, PEAK_START, PEAK_END];

/// Number of leading lines inspected when guessing the table delimiter
pub const DELIMITER_SNIFF_LINES: usize = 5;

/// Extension of every per-TF output file
pub const FASTA_EXTENSION: &str = "fna";
