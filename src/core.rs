use crate::{
    cli::Args,
    error::Result,
    extract::extract_sequences,
    fasta::write_fasta_per_tf,
    genome::load_genome,
    peaks::read_peaks,
};

use log::info;

/// Runs the whole pipeline: genome and peaks in, one FASTA per TF out.
///
/// Returns the number of FASTA files written to `args.outdir`.
pub fn tfpeaks(args: Args) -> Result<usize> {
    let Args {
        genome,
        peaks,
        outdir,
        ..
    } = args;

    let genome = load_genome(&genome)?;
    let peaks = read_peaks(&peaks)?;

    info!("Extracting peak sequences for {} TFs", peaks.len());
    let sequences = extract_sequences(&peaks, &genome)?;

    write_fasta_per_tf(&sequences, &outdir)
}
