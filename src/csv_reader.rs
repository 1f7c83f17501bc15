//! Delimited file reading: whole-file load, line split, per-line tokenize

use crate::config::CsvConfig;
use crate::csv::{FieldTokenizer, LineSplitter, Record};
use crate::error::{CsvError, Result};
use std::path::Path;
use std::vec::IntoIter;
use tracing::debug;

/// Reader over the records of a delimited text body.
///
/// The whole input is loaded into memory and split into non-empty lines up
/// front; each call to [`read_row`](CsvReader::read_row) tokenizes the next
/// line.
///
/// # Examples
///
/// ```no_run
/// use qualcsv::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
///
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     println!("{:?}", row);
/// }
/// ```
///
/// # With Headers
///
/// ```
/// use qualcsv::{CsvConfig, CsvReader};
///
/// let text = "Id,Name\r\n1,Alice\r\n2,Bob\r\n";
/// let mut reader = CsvReader::from_text(text, CsvConfig::default())
///     .unwrap()
///     .has_header(true);
///
/// let rows: Vec<_> = reader.rows().collect::<Result<_, _>>().unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(reader.headers(), Some(&["Id".to_string(), "Name".to_string()][..]));
/// ```
pub struct CsvReader {
    lines: IntoIter<String>,
    tokenizer: FieldTokenizer,
    row_count: u64,
    has_header: bool,
    headers: Vec<String>,
}

impl CsvReader {
    /// Open a file with the default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, CsvConfig::default())
    }

    /// Open a file with an explicit configuration
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: CsvConfig) -> Result<Self> {
        let path_ref = path.as_ref();
        let text = read_to_string(path_ref)?;
        debug!("Loaded {} bytes from {}", text.len(), path_ref.display());
        Self::from_text(&text, config)
    }

    /// Build a reader over in-memory text
    pub fn from_text(text: &str, config: CsvConfig) -> Result<Self> {
        let lines = LineSplitter::new(config.line_terminator).split(text);
        Self::from_lines(lines, config)
    }

    /// Build a reader over lines that are already split
    pub fn from_lines(lines: Vec<String>, config: CsvConfig) -> Result<Self> {
        config.validate()?;
        debug!("Reader ready with {} lines", lines.len());
        Ok(CsvReader {
            lines: lines.into_iter(),
            tokenizer: FieldTokenizer::new(config),
            row_count: 0,
            has_header: false,
            headers: Vec::new(),
        })
    }

    /// Indicate that the first row contains headers (builder pattern)
    ///
    /// When set to `true`, the first row will be stored and accessible via `headers()`.
    /// The iterator will skip the header row.
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Get header row if available
    ///
    /// Returns `Some(&[String])` once the header row has been read, `None` otherwise.
    pub fn headers(&self) -> Option<&[String]> {
        if self.headers.is_empty() {
            None
        } else {
            Some(&self.headers)
        }
    }

    /// Lines not yet tokenized
    pub fn remaining_lines(&self) -> &[String] {
        self.lines.as_slice()
    }

    /// Read a single row, header included
    ///
    /// Returns `Ok(None)` when all lines are consumed.
    pub fn read_row(&mut self) -> Result<Option<Record>> {
        let line = match self.lines.next() {
            Some(line) => line,
            None => return Ok(None),
        };

        let fields = self.tokenizer.parse_line(&line);

        if self.has_header && self.row_count == 0 {
            self.headers = fields.clone();
        }

        self.row_count += 1;
        Ok(Some(fields))
    }

    /// Get iterator over rows
    pub fn rows(&mut self) -> CsvRowIterator<'_> {
        CsvRowIterator { reader: self }
    }

    /// Collect all remaining rows (header skipped when `has_header` is set)
    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        self.rows().collect()
    }

    /// Get the number of rows read so far, header included
    pub fn row_count(&self) -> u64 {
        self.row_count
    }
}

/// Iterator over CSV rows
pub struct CsvRowIterator<'a> {
    reader: &'a mut CsvReader,
}

impl<'a> Iterator for CsvRowIterator<'a> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.has_header && self.reader.row_count == 0 {
            // Consume the header row
            match self.reader.read_row() {
                Ok(Some(_)) => {}
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        }

        self.reader.read_row().transpose()
    }
}

/// Read a whole file into a string
pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    std::fs::read_to_string(path_ref).map_err(|e| {
        CsvError::ReadError(format!("Failed to read {}: {}", path_ref.display(), e))
    })
}

/// Read a file and split it into its non-empty lines
pub fn parse_file<P: AsRef<Path>>(path: P, config: &CsvConfig) -> Result<Vec<String>> {
    let text = read_to_string(path)?;
    Ok(LineSplitter::new(config.line_terminator).split(&text))
}

/// Tokenize every line into a record, keeping line order
pub fn parse_records<I, S>(lines: I, config: &CsvConfig) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokenizer = FieldTokenizer::new(*config);
    lines
        .into_iter()
        .map(|line| tokenizer.parse_line(line.as_ref()))
        .collect()
}

/// Tokenize lines on the rayon pool, keeping line order
#[cfg(feature = "parallel")]
pub fn parse_records_par<S>(lines: &[S], config: &CsvConfig) -> Vec<Record>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    let tokenizer = FieldTokenizer::new(*config);
    lines
        .par_iter()
        .map(|line| tokenizer.parse_line(line.as_ref()))
        .collect()
}

/// Read a file and tokenize every line into a record
pub fn read_records<P: AsRef<Path>>(path: P, config: &CsvConfig) -> Result<Vec<Record>> {
    config.validate()?;
    let lines = parse_file(path, config)?;
    Ok(parse_records(&lines, config))
}
