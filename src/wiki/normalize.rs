//! Line normalization: tab expansion, trimming and indent measurement.

/// Columns a tab expands to unless configured otherwise.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Splits `input` into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// Like `str::lines`, a final terminator does not produce a trailing empty
/// line.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..end];
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// One input line, prepared for classification.
///
/// `text` keeps the original indentation (with tabs expanded) for indent
/// measurement and for verbatim text blocks; `trimmed` is what the grammar
/// classifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: usize,
    text: String,
    trimmed_range: (usize, usize),
}

impl Line {
    /// Normalizes a raw line. `number` is 1-based.
    pub fn new(number: usize, raw: &str, tab_width: usize) -> Self {
        let text = if raw.contains('\t') {
            raw.replace('\t', &" ".repeat(tab_width))
        } else {
            raw.to_string()
        };
        let start = text.len() - text.trim_start().len();
        let end = text.trim_end().len().max(start);
        Self {
            number,
            text,
            trimmed_range: (start, end),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the tab-expanded line, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the line with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        &self.text[self.trimmed_range.0..self.trimmed_range.1]
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Returns the number of leading spaces, or `None` for a blank line.
    pub fn indent(&self) -> Option<usize> {
        if self.is_blank() {
            return None;
        }
        Some(self.text.bytes().take_while(|b| *b == b' ').count())
    }
}
