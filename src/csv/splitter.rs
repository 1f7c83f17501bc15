//! Record splitting over a whole text body

use crate::config::LineTerminator;

/// Splits text into non-empty lines on a fixed terminator.
///
/// Empty lines produced by consecutive terminators, or by a trailing
/// terminator, are dropped. A bare `\n` inside CRLF text is not a break.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSplitter {
    terminator: LineTerminator,
}

impl LineSplitter {
    /// Create a splitter for the given terminator
    pub fn new(terminator: LineTerminator) -> Self {
        Self { terminator }
    }

    /// Iterate over the non-empty lines of `text`
    pub fn lines<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(self.terminator.as_str())
            .filter(|line| !line.is_empty())
    }

    /// Collect the non-empty lines of `text` into owned strings
    pub fn split(&self, text: &str) -> Vec<String> {
        self.lines(text).map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf() {
        let splitter = LineSplitter::default();
        assert_eq!(splitter.split("a,b\r\nc,d"), vec!["a,b", "c,d"]);
    }

    #[test]
    fn test_trailing_and_repeated_terminators() {
        let splitter = LineSplitter::default();
        assert_eq!(
            splitter.split("a\r\n\r\nb\r\n\r\n"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_bare_lf_is_content_in_crlf_mode() {
        let splitter = LineSplitter::new(LineTerminator::CrLf);
        assert_eq!(splitter.split("a\nb\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_lf() {
        let splitter = LineSplitter::new(LineTerminator::Lf);
        assert_eq!(splitter.split("a\n\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(LineSplitter::default().split("").is_empty());
    }

    #[test]
    fn test_whitespace_line_kept() {
        assert_eq!(LineSplitter::default().split(" \r\nx"), vec![" ", "x"]);
    }
}
