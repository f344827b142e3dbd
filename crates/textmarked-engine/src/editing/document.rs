/// A single line of the document.
///
/// `index` is positional, not an identity: it is rewritten whenever lines are
/// inserted or removed before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub index: usize,
    pub text: String,
}

impl Line {
    /// Length of the line in chars (the unit all offsets use)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Core document structure: an ordered line sequence.
///
/// ## Invariants
/// - There is always at least one line; the empty document is one empty line
/// - `lines[i].index == i` for every line
/// - The plain-text serialization is the lines joined with `\n`
///
/// ## Usage Pattern
///
/// ```rust
/// # use textmarked_engine::editing::Document;
/// let doc = Document::from_text("# Title\r\nbody");
///
/// assert_eq!(doc.line_count(), 2);
/// assert_eq!(doc.line(0).map(|l| l.text.as_str()), Some("# Title"));
/// assert_eq!(doc.text(), "# Title\nbody");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Ordered lines, reindexed after every structural edit
    pub(crate) lines: Vec<Line>,
    /// Version counter incremented on each edit (enables change detection)
    pub(crate) version: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl Document {
    /// Create a new document from raw text, splitting on `\n`
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text)
                .enumerate()
                .map(|(index, text)| Line { index, text })
                .collect(),
            version: 0,
        }
    }

    /// Get the document's plain-text serialization
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Overwrite the text of an existing line. Returns false when out of range.
    pub(crate) fn set_line_text(&mut self, index: usize, text: String) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.text = text;
                true
            }
            None => false,
        }
    }

    /// Insert lines so the first of them lands at `at` (clamped to the end).
    pub(crate) fn insert_lines<I>(&mut self, at: usize, texts: I)
    where
        I: IntoIterator<Item = String>,
    {
        let at = at.min(self.lines.len());
        let new_lines = texts.into_iter().map(|text| Line { index: 0, text });
        self.lines.splice(at..at, new_lines);
        self.reindex_from(at);
    }

    pub(crate) fn insert_line(&mut self, at: usize, text: String) {
        self.insert_lines(at, std::iter::once(text));
    }

    /// Replace the whole content, keeping the version history.
    pub(crate) fn replace_text(&mut self, text: &str) {
        let next = Self::from_text(text);
        self.lines = next.lines;
    }

    pub(crate) fn bump_version(&mut self) -> u64 {
        self.version += 1;
        self.version
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, line) in self.lines.iter_mut().enumerate().skip(start) {
            line.index = index;
        }
    }
}

/// Split raw text into owned lines, dropping a trailing `\r` from each.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
}

/// Byte index of the `char_idx`-th char, clamped to the end of `s`.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Chars in `[start, end)` of `s`, clamped to its length.
pub(crate) fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    let from = byte_index(s, start);
    let to = byte_index(s, end).max(from);
    &s[from..to]
}

/// Replace the chars in `[start, end)` of `s` with `value`.
pub(crate) fn splice_chars(s: &str, start: usize, end: usize, value: &str) -> String {
    let from = byte_index(s, start);
    let to = byte_index(s, end).max(from);

    let mut out = String::with_capacity(s.len() - (to - from) + value.len());
    out.push_str(&s[..from]);
    out.push_str(value);
    out.push_str(&s[to..]);
    out
}
