use crate::{
    consts::FASTA_HEADER,
    error::{PeakError, Result},
};

use flate2::read::MultiGzDecoder;
use log::info;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Opens a file for buffered reading, decompressing it when it ends in `.gz`.
pub(crate) fn open_reader(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;

    let reader: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(reader)
}

/// Loads a FASTA genome as a single sequence.
///
/// Every line after the first header is stripped and concatenated in file order.
/// Interior headers are skipped, so multi-record files collapse into one sequence.
///
/// # Errors
///
/// - `NotFound` if `path` is not a regular file
/// - `Format` if the first line is not a header or no sequence follows it
/// - `Io` on any read failure
///
/// # Example
///
/// ```rust,ignore
/// let genome = tfpeaks::load_genome("genome.fa")?;
/// assert!(!genome.is_empty());
/// ```
pub fn load_genome<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PeakError::NotFound(path.to_path_buf()));
    }

    info!("Reading genome from file {}", path.display());

    let io_err = |source| PeakError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = open_reader(path).map_err(io_err)?;
    let mut line = Vec::new();

    reader.read_until(b'\n', &mut line).map_err(io_err)?;
    if line.first() != Some(&FASTA_HEADER) {
        return Err(PeakError::format(
            path,
            "first line is not a FASTA header ('>')",
        ));
    }

    let mut genome = Vec::new();
    loop {
        line.clear();
        let bytes_read = reader.read_until(b'\n', &mut line).map_err(io_err)?;

        if bytes_read == 0 {
            break;
        }

        if line[0] == FASTA_HEADER {
            continue;
        }

        genome.extend_from_slice(line.trim_ascii());
    }

    if genome.is_empty() {
        return Err(PeakError::format(path, "genome empty"));
    }

    info!("Read {} bases from file {}", genome.len(), path.display());

    Ok(genome)
}
