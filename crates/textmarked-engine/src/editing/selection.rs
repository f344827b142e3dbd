use std::str::FromStr;

use crate::editing::document::{Document, Line, slice_chars};

/// A raw selection endpoint, as reported by the input layer.
///
/// Ordering is by line, then offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 0-based line index
    pub line: usize,
    /// Char offset within the line
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("Expected <line>:<offset>, got {0:?}")]
    MissingSeparator(String),
    #[error("Invalid number in position {input:?}: {source}")]
    InvalidNumber {
        input: String,
        source: std::num::ParseIntError,
    },
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `line:offset`, both 0-based
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, offset) = s
            .split_once(':')
            .ok_or_else(|| ParsePositionError::MissingSeparator(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|source| ParsePositionError::InvalidNumber {
                    input: s.to_string(),
                    source,
                })
        };

        Ok(Self::new(parse(line)?, parse(offset)?))
    }
}

/// A normalized selection over a document.
///
/// Only [`compute_selection`] builds one, so `start_offset <= end_offset`
/// always holds and `lines` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    start_line: usize,
    end_line: usize,
    start_offset: usize,
    end_offset: usize,
    /// Snapshot of the spanned lines, in document order.
    lines: Vec<Line>,
    raw_text: String,
}

impl Selection {
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Selected text for single-line selections; the spanned lines joined
    /// with `\n` for multi-line ones.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn is_caret(&self) -> bool {
        self.start_offset == self.end_offset
    }

    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }
}

/// Normalize raw anchor/focus endpoints into a [`Selection`].
///
/// Returns `None` when there is nothing actionable:
/// - either endpoint names a line the document does not have
/// - a caret sits at offset 0 of a non-empty line, where a command would
///   otherwise overwrite the whole line
pub fn compute_selection(anchor: Position, focus: Position, doc: &Document) -> Option<Selection> {
    let (start, end) = if anchor <= focus {
        (anchor, focus)
    } else {
        (focus, anchor)
    };

    if end.line >= doc.line_count() {
        log::debug!(
            "selection {}:{}..{}:{} is outside a {}-line document",
            start.line,
            start.offset,
            end.line,
            end.offset,
            doc.line_count()
        );
        return None;
    }

    let lines = doc.lines()[start.line..=end.line].to_vec();
    let mut start_offset = anchor.offset.min(focus.offset);
    let mut end_offset = anchor.offset.max(focus.offset);

    let raw_text = if let [line] = lines.as_slice() {
        let len = line.char_len();
        start_offset = start_offset.min(len);
        end_offset = end_offset.min(len);

        if end_offset == 0 && !line.is_blank() {
            log::debug!("caret at column 0 of non-empty line {}", line.index);
            return None;
        }

        slice_chars(&line.text, start_offset, end_offset).to_string()
    } else {
        lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    log::debug!(
        "selected lines {}..={} offsets {}..{}",
        start.line,
        end.line,
        start_offset,
        end_offset
    );

    Some(Selection {
        start_line: start.line,
        end_line: end.line,
        start_offset,
        end_offset,
        lines,
        raw_text,
    })
}
