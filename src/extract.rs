use crate::{
    error::{PeakError, Result},
    peaks::{Peak, PeakMap},
};

use indexmap::IndexMap;
use log::{debug, info};

/// TF name -> extracted sequences, one per peak and in the same order.
pub type SequenceMap = IndexMap<String, Vec<Vec<u8>>>;

/// Slices a peak out of the genome, both ends inclusive.
///
/// A peak running past the end of the genome is truncated to the available
/// bases; only a peak starting at or after the genome end is rejected.
///
/// # Example
///
/// ```rust,ignore
/// let seq = slice_peak(b"ACGTACGT", &Peak::new(2, 5))?;
/// assert_eq!(seq, b"GTAC");
/// ```
pub fn slice_peak<'a>(genome: &'a [u8], peak: &Peak) -> Result<&'a [u8]> {
    let stop = peak.end.saturating_add(1).min(genome.len());

    match genome.get(peak.start..stop) {
        Some(seq) if !seq.is_empty() => {
            if peak.end >= genome.len() {
                debug!(
                    "Peak {} truncated to genome length {}",
                    peak,
                    genome.len()
                );
            }
            Ok(seq)
        }
        _ => Err(PeakError::OutOfRange {
            start: peak.start,
            end: peak.end,
            len: genome.len(),
        }),
    }
}

/// Extracts the sequence of every peak of every TF.
///
/// TF order and peak order are kept from `peaks`; the first peak outside the
/// genome aborts the whole extraction.
pub fn extract_sequences(peaks: &PeakMap, genome: &[u8]) -> Result<SequenceMap> {
    let sequences = peaks
        .iter()
        .map(|(tf, intervals)| -> Result<(String, Vec<Vec<u8>>)> {
            let seqs = intervals
                .iter()
                .map(|peak| slice_peak(genome, peak).map(<[u8]>::to_vec))
                .collect::<Result<Vec<_>>>()?;

            Ok((tf.clone(), seqs))
        })
        .collect::<Result<SequenceMap>>()?;

    info!("Extracted sequences for {} TFs", sequences.len());

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENOME: &[u8] = b"ACGTACGT";

    #[test]
    fn test_slice_is_inclusive() {
        let seq = slice_peak(GENOME, &Peak::new(2, 5)).unwrap();
        assert_eq!(seq, b"GTAC");
    }

    #[test]
    fn test_zero_length_interval_yields_one_base() {
        let seq = slice_peak(GENOME, &Peak::new(3, 3)).unwrap();
        assert_eq!(seq, b"T");
    }

    #[test]
    fn test_overrun_is_truncated() {
        let seq = slice_peak(GENOME, &Peak::new(6, 100)).unwrap();
        assert_eq!(seq, b"GT");

        let seq = slice_peak(GENOME, &Peak::new(0, usize::MAX)).unwrap();
        assert_eq!(seq, GENOME);
    }

    #[test]
    fn test_start_past_genome_is_out_of_range() {
        for peak in [Peak::new(8, 8), Peak::new(20, 30)] {
            match slice_peak(GENOME, &peak) {
                Err(PeakError::OutOfRange { start, end, len }) => {
                    assert_eq!((start, end, len), (peak.start, peak.end, 8));
                }
                other => panic!("expected OutOfRange for {}, got {:?}", peak, other),
            }
        }
    }

    #[test]
    fn test_extract_keeps_order() {
        let mut peaks = PeakMap::new();
        peaks.insert("B".to_string(), vec![Peak::new(4, 5), Peak::new(0, 1)]);
        peaks.insert("A".to_string(), vec![Peak::new(7, 7)]);

        let sequences = extract_sequences(&peaks, GENOME).unwrap();

        assert_eq!(sequences.keys().collect::<Vec<_>>(), ["B", "A"]);
        assert_eq!(sequences["B"], vec![b"AC".to_vec(), b"AC".to_vec()]);
        assert_eq!(sequences["A"], vec![b"T".to_vec()]);
    }
}
