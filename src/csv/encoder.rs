//! Record encoding: fields joined by the delimiter

/// Joins fields with a delimiter.
///
/// Fields are written as-is. No quoting or escaping is applied, so a field
/// that came out of the tokenizer with its qualifiers still attached is
/// written back with them.
pub struct RecordEncoder {
    delimiter: char,
}

impl RecordEncoder {
    /// Create a new encoder for the given delimiter
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Encode entire row into buffer
    pub fn encode_row<I, S>(&self, fields: I, buffer: &mut String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                buffer.push(self.delimiter);
            }
            buffer.push_str(field.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(delimiter: char, fields: &[&str]) -> String {
        let mut buffer = String::new();
        RecordEncoder::new(delimiter).encode_row(fields, &mut buffer);
        buffer
    }

    #[test]
    fn test_simple_fields() {
        assert_eq!(encode(',', &["a", "b", "c"]), "a,b,c");
    }

    #[test]
    fn test_qualified_field_written_verbatim() {
        assert_eq!(encode(',', &[r#""a,b""#, "c"]), r#""a,b",c"#);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(encode(',', &["a", "", "c"]), "a,,c");
        assert_eq!(encode(',', &["", "", ""]), ",,");
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(encode(',', &[]), "");
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(encode('\t', &["a", "b"]), "a\tb");
    }
}
