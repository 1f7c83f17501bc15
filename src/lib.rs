//! # qualcsv
//!
//! Reader and writer for delimited text records with a configurable
//! delimiter and text qualifier.
//!
//! The core is [`FieldTokenizer`], a single-line scanner that splits on the
//! delimiter only outside qualified spans. Tokenizing is best-effort: it
//! never fails, and qualifier characters stay in the emitted fields unless
//! stripping is switched on in [`CsvConfig`].
//!
//! ## Reading
//!
//! ```
//! use qualcsv::{CsvConfig, CsvReader};
//!
//! let text = "Id,Text\r\n1,\"Commas, inside\"\r\n";
//! let mut reader = CsvReader::from_text(text, CsvConfig::default()).unwrap();
//! let rows = reader.read_all().unwrap();
//!
//! assert_eq!(rows[1], vec!["1", "\"Commas, inside\""]);
//! ```
//!
//! ## Writing
//!
//! ```no_run
//! use qualcsv::{CsvConfig, OutputTarget};
//!
//! let mut writer = OutputTarget::Stdout.open(CsvConfig::default()).unwrap();
//! writer.write_row(["Name", "Age"]).unwrap();
//! writer.save().unwrap();
//! ```
//!
//! Configuration is a plain value handed to each component; there is no
//! process-wide state, so differently configured tokenizers can run side by
//! side.

pub mod config;
pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;

pub use config::{CsvConfig, LineTerminator, QualifierMode};
pub use csv::{FieldTokenizer, LineSplitter, Record, RecordEncoder};
pub use csv_reader::{parse_file, parse_records, read_records, read_to_string, CsvReader};
pub use csv_writer::{write_records, CsvWriter, OutputTarget};
pub use error::{CsvError, Result};

#[cfg(feature = "parallel")]
pub use csv_reader::parse_records_par;
