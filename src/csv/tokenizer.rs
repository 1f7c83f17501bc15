//! Single-line field tokenizer with qualified-span tracking

use crate::config::{CsvConfig, QualifierMode};
use tracing::trace;

/// Splits one line into fields.
///
/// The scanner walks the line left to right. A text qualifier flips the
/// "inside qualified span" state; a delimiter outside a span ends the
/// current field. Field text is taken verbatim between boundaries and
/// trimmed, so qualifier characters stay in the output unless
/// qualifier stripping is switched on in [`CsvConfig`].
///
/// Tokenizing never fails. Unbalanced qualifiers leave the scanner inside a
/// span until the end of the line, which swallows any later delimiters.
///
/// # Examples
///
/// ```
/// use qualcsv::{CsvConfig, FieldTokenizer};
///
/// let tokenizer = FieldTokenizer::new(CsvConfig::default());
/// assert_eq!(
///     tokenizer.parse_line(r#"a,"b,c",d"#),
///     vec!["a", r#""b,c""#, "d"]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldTokenizer {
    config: CsvConfig,
}

/// Raw scan result: trimmed field slices plus the span state at end of line
struct Scan<'a> {
    fields: Vec<&'a str>,
    inside: bool,
}

impl FieldTokenizer {
    /// Create a tokenizer for the given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// The configuration this tokenizer was built with
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Parse a line into owned fields.
    ///
    /// An empty line yields a single empty field. A line ending in an
    /// unqualified delimiter yields no trailing empty field.
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        let scan = self.scan(line);
        if scan.inside {
            trace!("line ends inside a qualified span: {}", line);
        }
        scan.fields
            .into_iter()
            .map(|field| self.finish_field(field))
            .collect()
    }

    /// Split a line into trimmed field slices without qualifier processing.
    ///
    /// Boundaries and trimming are identical to [`parse_line`](Self::parse_line);
    /// qualifier stripping and unescaping are skipped.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.scan(line).fields
    }

    /// Whether the scanner is still inside a qualified span after the last
    /// character, i.e. the line has an odd number of qualifiers.
    pub fn ends_inside_span(&self, line: &str) -> bool {
        self.scan(line).inside
    }

    fn scan<'a>(&self, line: &'a str) -> Scan<'a> {
        let delimiter = self.config.delimiter;
        let qualifier = self.config.text_qualifier;

        let mut fields = Vec::new();
        let mut inside = false;
        let mut segment_start = 0;

        for (pos, ch) in line.char_indices() {
            // Qualifier wins when it equals the delimiter
            if ch == qualifier {
                inside = !inside;
            } else if ch == delimiter && !inside {
                let end = pos + ch.len_utf8();
                let field = line[segment_start..end].trim_matches(|c| c == ' ' || c == delimiter);
                fields.push(field);
                segment_start = end;
            }
        }

        // Trailing field uses a full whitespace trim
        if segment_start != line.len() || fields.is_empty() {
            fields.push(line[segment_start..].trim());
        }

        Scan { fields, inside }
    }

    fn finish_field(&self, field: &str) -> String {
        let mut text = match self.config.qualifier_mode {
            QualifierMode::Toggle => field.to_string(),
            QualifierMode::Doubled => self.collapse_doubled(field),
        };

        if self.config.strip_qualifiers {
            let q = self.config.text_qualifier;
            let q_len = q.len_utf8();
            if text.len() >= 2 * q_len && text.starts_with(q) && text.ends_with(q) {
                text = text[q_len..text.len() - q_len].to_string();
            }
        }

        text
    }

    /// Replace each doubled qualifier inside a qualified span with a single
    /// literal qualifier. Span state matches the boundary scan: a doubled
    /// qualifier flips twice there, so boundaries are unaffected.
    fn collapse_doubled(&self, field: &str) -> String {
        let q = self.config.text_qualifier;
        let mut out = String::with_capacity(field.len());
        let mut inside = false;
        let mut chars = field.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == q {
                if inside && chars.peek() == Some(&q) {
                    chars.next();
                    out.push(q);
                    continue;
                }
                inside = !inside;
            }
            out.push(ch);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> FieldTokenizer {
        FieldTokenizer::new(CsvConfig::default())
    }

    #[test]
    fn test_simple() {
        assert_eq!(tokenizer().parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_keeps_qualifiers() {
        assert_eq!(
            tokenizer().parse_line(r#"a,"b,c",d"#),
            vec!["a", r#""b,c""#, "d"]
        );
    }

    #[test]
    fn test_weird_embedded_quotes() {
        let header = tokenizer().parse_line("Id,StringColumn,StringWithQuotes,Number1,Number2,Number3");
        let row = tokenizer().parse_line(r#"1,test string,"Commas, "In Text" are weird",10,20,30"#);

        assert_eq!(header.len(), 6);
        assert_eq!(row.len(), header.len());
        assert_eq!(row[1], "test string");
        assert_eq!(row[2], r#""Commas, "In Text" are weird""#);
        assert_eq!(row[5], "30");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(tokenizer().parse_line(""), vec![""]);
    }

    #[test]
    fn test_whitespace_only_line() {
        assert_eq!(tokenizer().parse_line("   "), vec![""]);
    }

    #[test]
    fn test_trailing_delimiter_drops_empty_field() {
        assert_eq!(tokenizer().parse_line("a,b,"), vec!["a", "b"]);
        assert_eq!(tokenizer().parse_line(","), vec![""]);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(tokenizer().parse_line("a,,c"), vec!["a", "", "c"]);
        assert_eq!(tokenizer().parse_line(",,"), vec!["", ""]);
    }

    #[test]
    fn test_trimming() {
        assert_eq!(tokenizer().parse_line("  a , b ,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_inner_fields_trim_only_spaces() {
        // Tabs survive on inner fields, the last field gets a full trim
        assert_eq!(tokenizer().parse_line("\ta\t,\tb\t"), vec!["\ta\t", "b"]);
    }

    #[test]
    fn test_spaces_around_quoted_field_trimmed() {
        assert_eq!(tokenizer().parse_line(r#"" a ", b"#), vec![r#"" a ""#, "b"]);
        assert_eq!(tokenizer().parse_line(r#" " a ",b"#), vec![r#"" a ""#, "b"]);
    }

    #[test]
    fn test_unbalanced_qualifier_swallows_rest() {
        assert_eq!(tokenizer().parse_line(r#"a,"b,c"#), vec!["a", r#""b,c"#]);
        assert!(tokenizer().ends_inside_span(r#"a,"b,c"#));
    }

    #[test]
    fn test_doubled_qualifier_is_double_toggle() {
        assert_eq!(
            tokenizer().parse_line(r#""say ""hi""",x"#),
            vec![r#""say ""hi""""#, "x"]
        );
        assert!(!tokenizer().ends_inside_span(r#""""#));
    }

    #[test]
    fn test_custom_delimiter_and_qualifier() {
        let tokenizer = FieldTokenizer::new(CsvConfig::default().delimiter(';').text_qualifier('\''));
        assert_eq!(
            tokenizer.parse_line("a;'b;c';\"d\""),
            vec!["a", "'b;c'", "\"d\""]
        );
    }

    #[test]
    fn test_multibyte_delimiter() {
        let tokenizer = FieldTokenizer::new(CsvConfig::default().delimiter('§'));
        assert_eq!(tokenizer.parse_line("ä§\"ö§ü\"§é"), vec!["ä", "\"ö§ü\"", "é"]);
    }

    #[test]
    fn test_qualifier_equal_to_delimiter_never_splits() {
        let tokenizer = FieldTokenizer::new(CsvConfig::default().text_qualifier(','));
        assert_eq!(tokenizer.parse_line("a,b,c"), vec!["a,b,c"]);
    }

    #[test]
    fn test_split_borrows() {
        let line = String::from("x, y ,z");
        let fields: Vec<&str> = tokenizer().split(&line);
        assert_eq!(fields, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_strip_qualifiers() {
        let tokenizer = FieldTokenizer::new(CsvConfig::default().strip_qualifiers(true));
        assert_eq!(
            tokenizer.parse_line(r#""a,b",c,"",""#),
            vec!["a,b", "c", "", "\""]
        );
    }

    #[test]
    fn test_doubled_mode_collapses_escaped_qualifiers() {
        let tokenizer = FieldTokenizer::new(
            CsvConfig::default()
                .qualifier_mode(QualifierMode::Doubled)
                .strip_qualifiers(true),
        );
        assert_eq!(
            tokenizer.parse_line(r#""say ""hi""",x,"""""#),
            vec![r#"say "hi""#, "x", "\""]
        );
    }

    #[test]
    fn test_doubled_mode_without_strip_keeps_outer_qualifiers() {
        let tokenizer = FieldTokenizer::new(CsvConfig::default().qualifier_mode(QualifierMode::Doubled));
        assert_eq!(tokenizer.parse_line(r#""a""b",c"#), vec![r#""a"b""#, "c"]);
    }

    #[test]
    fn test_doubled_mode_same_field_count() {
        let line = r#"1,"x "" y",""""",z"#;
        let toggle = tokenizer().parse_line(line);
        let doubled = FieldTokenizer::new(CsvConfig::default().qualifier_mode(QualifierMode::Doubled))
            .parse_line(line);
        assert_eq!(toggle.len(), doubled.len());
    }
}
