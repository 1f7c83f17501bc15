//! Tokenizer, reader and writer configuration

use crate::error::{CsvError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sequence separating records in a text body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineTerminator {
    /// Carriage return + line feed (`\r\n`)
    #[default]
    CrLf,
    /// Line feed only (`\n`)
    Lf,
}

impl LineTerminator {
    /// The terminator as it appears in text
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Lf => "\n",
        }
    }
}

/// How the text qualifier is interpreted while scanning a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QualifierMode {
    /// Every qualifier flips the "inside qualified span" state.
    /// Two adjacent qualifiers are a double flip.
    #[default]
    Toggle,
    /// Inside a qualified span, two adjacent qualifiers are one escaped
    /// literal qualifier and leave the span open.
    Doubled,
}

/// Delimiter, qualifier and line handling shared by the tokenizer, reader
/// and writer.
///
/// A config is a plain value: build it once and hand it to every component
/// that needs it.
///
/// # Examples
///
/// ```
/// use qualcsv::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';').text_qualifier('\'');
/// assert_eq!(config.delimiter, ';');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvConfig {
    /// Field separator
    pub delimiter: char,
    /// Quote character that opens and closes a qualified span
    pub text_qualifier: char,
    /// Record separator used for splitting input and terminating output lines
    pub line_terminator: LineTerminator,
    /// How qualifiers inside a qualified span are read
    pub qualifier_mode: QualifierMode,
    /// Remove one enclosing pair of qualifiers from emitted fields
    pub strip_qualifiers: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            text_qualifier: '"',
            line_terminator: LineTerminator::CrLf,
            qualifier_mode: QualifierMode::Toggle,
            strip_qualifiers: false,
        }
    }
}

impl CsvConfig {
    /// Default configuration: `,` delimiter, `"` qualifier, CRLF records
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the text qualifier (builder pattern)
    pub fn text_qualifier(mut self, qualifier: char) -> Self {
        self.text_qualifier = qualifier;
        self
    }

    /// Set the record separator (builder pattern)
    pub fn line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    /// Set the qualifier interpretation (builder pattern)
    pub fn qualifier_mode(mut self, mode: QualifierMode) -> Self {
        self.qualifier_mode = mode;
        self
    }

    /// Strip the enclosing qualifier pair from fields (builder pattern)
    pub fn strip_qualifiers(mut self, strip: bool) -> Self {
        self.strip_qualifiers = strip;
        self
    }

    /// Check that the delimiter and qualifier can be told apart from each
    /// other and from the record separator.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.text_qualifier {
            return Err(CsvError::InvalidConfig(format!(
                "delimiter and text qualifier are both {:?}",
                self.delimiter
            )));
        }

        for (name, ch) in [
            ("delimiter", self.delimiter),
            ("text qualifier", self.text_qualifier),
        ] {
            if ch == '\r' || ch == '\n' {
                return Err(CsvError::InvalidConfig(format!(
                    "{} cannot be a line break character ({:?})",
                    name, ch
                )));
            }
        }

        Ok(())
    }
}
