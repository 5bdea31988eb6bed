use crate::{
    consts::{DELIMITER_SNIFF_LINES, PEAK_END, PEAK_START, REQUIRED_COLUMNS, TF_NAME},
    error::{PeakError, Result},
    genome::open_reader,
};

use indexmap::IndexMap;
use log::{debug, info};

use std::{fmt, io::Read, path::Path};

/// A TF binding interval, in genome coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    pub start: usize,
    pub end: usize,
}

impl Peak {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// TF name -> peaks, in order of first appearance in the table.
pub type PeakMap = IndexMap<String, Vec<Peak>>;

/// Field separator of a peak table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }
}

/// Guesses the delimiter from the first lines of a table.
///
/// The character with the strictly higher count wins; a tie (including
/// no delimiter at all) returns `None`.
///
/// # Example
///
/// ```rust,ignore
/// let lines = ["TF_name,Peak_start,Peak_end", "A,1,2"];
/// assert_eq!(detect_delimiter(lines), Some(Delimiter::Comma));
/// ```
pub fn detect_delimiter<'a, I>(lines: I) -> Option<Delimiter>
where
    I: IntoIterator<Item = &'a str>,
{
    let (tabs, commas) = lines
        .into_iter()
        .take(DELIMITER_SNIFF_LINES)
        .fold((0usize, 0usize), |(tabs, commas), line| {
            (
                tabs + line.matches('\t').count(),
                commas + line.matches(',').count(),
            )
        });

    match tabs.cmp(&commas) {
        std::cmp::Ordering::Greater => Some(Delimiter::Tab),
        std::cmp::Ordering::Less => Some(Delimiter::Comma),
        std::cmp::Ordering::Equal => None,
    }
}

/// Reads a tab or comma delimited peak table and groups its intervals by TF.
///
/// The header must name `TF_name`, `Peak_start` and `Peak_end`; other columns
/// are ignored. Fields may be quoted. Coordinates may be written as decimals
/// and are truncated.
///
/// # Errors
///
/// - `NotFound` if `path` is not a regular file
/// - `Format` for an empty table, an undetermined delimiter, missing columns,
///   empty or path-like TF names, unparsable or negative coordinates,
///   `Peak_end < Peak_start` or a header without data rows
/// - `Processing` if the file cannot be read
pub fn read_peaks<P: AsRef<Path>>(path: P) -> Result<PeakMap> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PeakError::NotFound(path.to_path_buf()));
    }

    info!("Reading peaks from file {}", path.display());

    let mut content = String::new();
    open_reader(path)
        .and_then(|mut reader| reader.read_to_string(&mut content))
        .map_err(|source| PeakError::Processing {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

    if content.trim().is_empty() {
        return Err(PeakError::format(path, "peak table is empty"));
    }

    let delimiter = detect_delimiter(content.lines())
        .ok_or_else(|| PeakError::format(path, "undetermined delimiter"))?;
    debug!("Detected {:?} delimiter in {}", delimiter, path.display());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let processing_err = |source| PeakError::Processing {
        path: path.to_path_buf(),
        source,
    };

    let header = reader.headers().map_err(processing_err)?.clone();
    let column = |name: &str| header.iter().position(|field| field == name);
    let (Some(tf_idx), Some(start_idx), Some(end_idx)) =
        (column(TF_NAME), column(PEAK_START), column(PEAK_END))
    else {
        return Err(PeakError::format(
            path,
            format!("missing required columns, expected {:?}", REQUIRED_COLUMNS),
        ));
    };

    let mut peaks = PeakMap::new();
    let mut n_peaks = 0;

    for record in reader.records() {
        let record = record.map_err(processing_err)?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let lineno = record.position().map_or(0, |pos| pos.line());
        let field = |i: usize| {
            record.get(i).ok_or_else(|| {
                PeakError::format(path, format!("line {}: missing column {}", lineno, i + 1))
            })
        };

        // names are kept verbatim, they only need to be usable as file names
        let tf = field(tf_idx)?;
        if tf.trim().is_empty() {
            return Err(PeakError::format(path, format!("line {}: empty {}", lineno, TF_NAME)));
        }
        if tf.contains(['/', '\\']) {
            return Err(PeakError::format(
                path,
                format!("line {}: {} {} contains a path separator", lineno, TF_NAME, tf),
            ));
        }

        let start = parse_coordinate(field(start_idx)?)
            .ok_or_else(|| bad_coordinate(path, lineno, PEAK_START))?;
        let end = parse_coordinate(field(end_idx)?)
            .ok_or_else(|| bad_coordinate(path, lineno, PEAK_END))?;

        if end < start {
            return Err(PeakError::format(
                path,
                format!("{} is lower than {} for TF {}", PEAK_END, PEAK_START, tf),
            ));
        }

        peaks
            .entry(tf.to_string())
            .or_default()
            .push(Peak::new(start, end));
        n_peaks += 1;
    }

    if peaks.is_empty() {
        return Err(PeakError::format(path, "header present, no data"));
    }

    info!(
        "Read {} peaks for {} TFs from file {}",
        n_peaks,
        peaks.len(),
        path.display()
    );

    Ok(peaks)
}

/// Parses a coordinate as a float and truncates it toward zero.
fn parse_coordinate(field: &str) -> Option<usize> {
    let value = field.trim().parse::<f64>().ok()?;

    if !value.is_finite() || value.trunc() < 0.0 {
        return None;
    }

    Some(value.trunc() as usize)
}

fn bad_coordinate(path: &Path, lineno: u64, column: &str) -> PeakError {
    PeakError::format(
        path,
        format!("line {}: {} is not a non-negative number", lineno, column),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_prefers_majority() {
        let csv = ["TF_name,Peak_start,Peak_end", "A,1,2\tx"];
        assert_eq!(detect_delimiter(csv), Some(Delimiter::Comma));

        let tsv = ["TF_name\tPeak_start\tPeak_end", "A\t1\t2"];
        assert_eq!(detect_delimiter(tsv), Some(Delimiter::Tab));
    }

    #[test]
    fn test_detect_delimiter_tie_is_undetermined() {
        assert_eq!(detect_delimiter(["a\tb,c"]), None);
        assert_eq!(detect_delimiter(["abc", "def"]), None);
    }

    #[test]
    fn test_detect_delimiter_only_sniffs_first_lines() {
        let lines = ["a\tb", "", "", "", "", "a,b,c,d"];
        assert_eq!(detect_delimiter(lines), Some(Delimiter::Tab));
    }

    #[test]
    fn test_parse_coordinate_truncates_decimals() {
        assert_eq!(parse_coordinate("2.9"), Some(2));
        assert_eq!(parse_coordinate("10"), Some(10));
        assert_eq!(parse_coordinate("-0.5"), Some(0));
        assert_eq!(parse_coordinate("-3"), None);
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate("inf"), None);
    }
}
