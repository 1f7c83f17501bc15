//! Delimited record writing to a file, stdout or any `io::Write`

use crate::config::CsvConfig;
use crate::csv::RecordEncoder;
use crate::error::{CsvError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where written records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Process standard output
    Stdout,
    /// A file, created or truncated on open
    File(PathBuf),
}

impl OutputTarget {
    /// Open the target as a boxed writer
    pub fn open(&self, config: CsvConfig) -> Result<CsvWriter<Box<dyn Write>>> {
        let sink: Box<dyn Write> = match self {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::File(path) => Box::new(create_file(path)?),
        };
        CsvWriter::from_writer(sink, config)
    }
}

/// Writes records as delimiter-joined lines.
///
/// Every line, the last one included, ends with the configured line
/// terminator. Fields are not quoted or escaped.
///
/// # Examples
///
/// ```no_run
/// use qualcsv::{CsvConfig, CsvWriter};
///
/// let mut writer = CsvWriter::create("output.csv", CsvConfig::default()).unwrap();
/// writer.write_row(["Name", "Age", "City"]).unwrap();
/// writer.write_row(["Alice", "30", "NYC"]).unwrap();
/// writer.save().unwrap();
/// ```
pub struct CsvWriter<W: Write> {
    sink: W,
    encoder: RecordEncoder,
    line_ending: &'static str,
    row_count: u64,
    buffer: String,
}

impl CsvWriter<BufWriter<File>> {
    /// Create (or truncate) a file and write records into it
    pub fn create<P: AsRef<Path>>(path: P, config: CsvConfig) -> Result<Self> {
        let file = create_file(path.as_ref())?;
        CsvWriter::from_writer(file, config)
    }
}

impl CsvWriter<Stdout> {
    /// Write records to standard output
    pub fn stdout(config: CsvConfig) -> Result<Self> {
        CsvWriter::from_writer(io::stdout(), config)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any writer
    pub fn from_writer(sink: W, config: CsvConfig) -> Result<Self> {
        config.validate()?;
        Ok(CsvWriter {
            sink,
            encoder: RecordEncoder::new(config.delimiter),
            line_ending: config.line_terminator.as_str(),
            row_count: 0,
            buffer: String::with_capacity(1024),
        })
    }

    /// Write a row of strings
    pub fn write_row<I, S>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Reuse buffer
        self.buffer.clear();
        self.encoder.encode_row(data, &mut self.buffer);
        self.buffer.push_str(self.line_ending);

        self.sink
            .write_all(self.buffer.as_bytes())
            .map_err(|e| CsvError::WriteError(format!("Failed to write row: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write multiple rows at once
    pub fn write_rows_batch<I, R, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row_data in rows {
            self.write_row(row_data)?;
        }
        Ok(())
    }

    /// Get the number of rows written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush and close the output. Consumes the writer.
    pub fn save(self) -> Result<()> {
        self.into_inner().map(|_| ())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.sink
            .flush()
            .map_err(|e| CsvError::WriteError(format!("Failed to flush output: {}", e)))?;
        debug!("Wrote {} rows", self.row_count);
        Ok(self.sink)
    }
}

/// Write all records to a target in one call
pub fn write_records<I, R, S>(target: &OutputTarget, records: I, config: CsvConfig) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = target.open(config)?;
    writer.write_rows_batch(records)?;
    writer.save()
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        CsvError::WriteError(format!("Failed to create {}: {}", path.display(), e))
    })?;
    debug!("Writing to {}", path.display());
    Ok(BufWriter::new(file))
}
