use crate::editing::document::split_lines;
use crate::editing::{
    Document, FormatCommand, Patch, Position, Selection, apply_format, compute_selection,
};
use crate::options::EditorOptions;

/// Reasons an edit coming from the host was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Line breaks are not allowed by the editor options")]
    MultilineCommit,
    #[error("Clipboard is disabled by the editor options")]
    ClipboardDisabled,
    #[error("No selection captured")]
    NoSelection,
}

/// An editing session: one document, at most one captured selection, and
/// the options that govern both.
///
/// Selections are one-shot: a successful [`Session::apply`] consumes the
/// captured selection, so the host must call [`Session::select`] again
/// before the next command.
#[derive(Debug, Clone)]
pub struct Session {
    document: Document,
    selection: Option<Selection>,
    options: EditorOptions,
}

impl Session {
    pub fn new(text: &str, options: EditorOptions) -> Self {
        Self {
            document: Document::from_text(text),
            selection: None,
            options,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Commands to offer, in toolbar order
    pub fn commands(&self) -> &[FormatCommand] {
        &self.options.allowed_commands
    }

    /// Capture a selection from raw endpoints.
    ///
    /// Replaces whatever was captured before; a rejected selection leaves
    /// nothing captured.
    pub fn select(&mut self, anchor: Position, focus: Position) -> Option<&Selection> {
        self.selection = compute_selection(anchor, focus, &self.document);
        self.selection.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Apply a command over the captured selection.
    ///
    /// A command missing from the allowed list, or a call with nothing
    /// captured, is a no-op that keeps the current selection.
    pub fn apply(&mut self, command: FormatCommand) -> Option<Patch> {
        if !self.options.allows(command) {
            log::debug!("{command} is not enabled for this editor");
            return None;
        }

        let patch = apply_format(command, self.selection.as_ref(), &mut self.document)?;
        self.selection = None;
        Some(patch)
    }

    /// Replace the document with raw edited text from the input layer.
    ///
    /// With multiline commits disabled, text with more lines than the
    /// document is refused. Only the count is compared: an edit that joins
    /// two lines and breaks another keeps the count and is accepted.
    pub fn ingest(&mut self, text: &str) -> Result<Patch, EditError> {
        let incoming = split_lines(text).count();

        if !self.options.allow_multiline_commit && incoming > self.document.line_count() {
            log::warn!(
                "rejected edit adding {} line(s)",
                incoming - self.document.line_count()
            );
            return Err(EditError::MultilineCommit);
        }

        self.document.replace_text(text);
        self.selection = None;

        Ok(Patch {
            changed: 0..self.document.line_count(),
            version: self.document.bump_version(),
        })
    }

    /// Insert a plain-text clipboard payload below the captured selection.
    pub fn paste(&mut self, payload: &str) -> Result<Patch, EditError> {
        if !self.options.clipboard_enabled {
            log::warn!("rejected paste of {} bytes", payload.len());
            return Err(EditError::ClipboardDisabled);
        }

        let selection = self.selection.as_ref().ok_or(EditError::NoSelection)?;
        let at = (selection.end_line() + 1).min(self.document.line_count());

        let lines: Vec<String> = split_lines(payload).collect();
        let count = lines.len();
        self.document.insert_lines(at, lines);

        Ok(Patch {
            changed: at..at + count,
            version: self.document.bump_version(),
        })
    }

    /// Text of the captured selection, for a copy or cut.
    pub fn copy(&self) -> Result<String, EditError> {
        if !self.options.clipboard_enabled {
            return Err(EditError::ClipboardDisabled);
        }

        self.selection
            .as_ref()
            .map(|selection| selection.raw_text().to_string())
            .ok_or(EditError::NoSelection)
    }

    /// Clear the document back to one empty line, as a form reset does.
    pub fn reset(&mut self) -> Patch {
        self.document.replace_text("");
        self.selection = None;

        Patch {
            changed: 0..1,
            version: self.document.bump_version(),
        }
    }

    /// Plain-text serialization, for persisting into the host's store
    pub fn text(&self) -> String {
        self.document.text()
    }

    pub fn render(&self) -> String {
        crate::render::render(&self.document.text())
    }
}
