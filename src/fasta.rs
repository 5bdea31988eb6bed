use crate::{
    consts::FASTA_EXTENSION,
    error::{PeakError, Result},
    extract::SequenceMap,
};

use log::info;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes one `<TF>.fna` file per TF into `outdir`.
///
/// Each sequence becomes a `>{TF}_peak={i}_len={len}` record, `i` starting at 1
/// for every file. Existing files are overwritten; a failure stops the remaining
/// writes and leaves already written files in place.
///
/// Returns the number of files written.
pub fn write_fasta_per_tf<P: AsRef<Path>>(sequences: &SequenceMap, outdir: P) -> Result<usize> {
    let outdir = outdir.as_ref();
    if !outdir.is_dir() {
        return Err(PeakError::DirectoryNotFound(outdir.to_path_buf()));
    }

    for (tf, seqs) in sequences {
        let path = outdir.join(format!("{}.{}", tf, FASTA_EXTENSION));
        let io_err = |source| PeakError::Io {
            path: path.clone(),
            source,
        };

        let mut writer = BufWriter::new(File::create(&path).map_err(io_err)?);
        write_records(&mut writer, tf, seqs).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        info!("Wrote {} peaks to {}", seqs.len(), path.display());
    }

    info!("FASTA files available in {}", outdir.display());

    Ok(sequences.len())
}

fn write_records<W: Write>(writer: &mut W, tf: &str, seqs: &[Vec<u8>]) -> std::io::Result<()> {
    for (idx, seq) in seqs.iter().enumerate() {
        writeln!(writer, ">{}_peak={}_len={}", tf, idx + 1, seq.len())?;
        writer.write_all(seq)?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}
