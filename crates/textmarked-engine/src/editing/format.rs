use std::ops::Range;

use crate::editing::document::{Document, slice_chars, splice_chars};
use crate::editing::{FormatCommand, Patch, Selection};

/// Apply a formatting command over a selection.
///
/// Returns `None` and leaves the document untouched when there is no
/// selection, or when the selection names lines the document no longer has.
/// Otherwise the document is rewritten in place and its version bumped.
///
/// ## Single-line selections
///
/// The command's markup is built from the selected text, then:
/// 1. a non-empty range `[start, end)` is replaced by the markup
/// 2. a caret past column 0 gets the markup on a new line below it
/// 3. a caret at column 0 (an empty line) has its line replaced
///
/// `HorizontalRule` always replaces the whole line.
///
/// ## Multi-line selections
///
/// Only the list-like commands rewrite lines; the rest pass them through.
/// Padding commands then bracket the block with one blank line on each side.
pub fn apply_format(
    command: FormatCommand,
    selection: Option<&Selection>,
    doc: &mut Document,
) -> Option<Patch> {
    let selection = selection?;

    if selection.end_line() >= doc.line_count() {
        log::debug!(
            "{command}: selection ends at line {} but document has {} lines",
            selection.end_line(),
            doc.line_count()
        );
        return None;
    }

    let changed = if selection.is_multiline() {
        apply_multi_line(command, selection, doc)
    } else {
        apply_single_line(command, selection, doc)
    };

    let version = doc.bump_version();
    log::debug!("{command}: changed lines {changed:?}, version {version}");

    Some(Patch { changed, version })
}

fn apply_single_line(
    command: FormatCommand,
    selection: &Selection,
    doc: &mut Document,
) -> Range<usize> {
    let index = selection.start_line();
    let (start, end) = (selection.start_offset(), selection.end_offset());
    let markup = command.markup(slice_chars(&doc.lines[index].text, start, end));

    if command.replaces_line() {
        doc.set_line_text(index, markup);
        return index..index + 1;
    }

    if start < end {
        let spliced = splice_chars(&doc.lines[index].text, start, end, &markup);
        doc.set_line_text(index, spliced);
        index..index + 1
    } else if end > 0 {
        doc.insert_line(index + 1, markup);
        index + 1..index + 2
    } else {
        doc.set_line_text(index, markup);
        index..index + 1
    }
}

fn apply_multi_line(
    command: FormatCommand,
    selection: &Selection,
    doc: &mut Document,
) -> Range<usize> {
    let (first, last) = (selection.start_line(), selection.end_line());

    // Transform the document's current text; the selection only names the lines
    for (i, index) in (first..=last).enumerate() {
        if let Some(text) = command.markup_line(&doc.lines[index].text, i + 1) {
            doc.set_line_text(index, text);
        }
    }

    if !command.pads_block() {
        return first..last + 1;
    }

    // After first, then before, so `first` is still valid for the second insert
    doc.insert_line(last + 1, String::new());
    doc.insert_line(first, String::new());
    first..last + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{Position, compute_selection};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn format(
        text: &str,
        cmd: FormatCommand,
        anchor: (usize, usize),
        focus: (usize, usize),
    ) -> (Document, Option<Patch>) {
        let mut doc = Document::from_text(text);
        let sel = compute_selection(
            Position::new(anchor.0, anchor.1),
            Position::new(focus.0, focus.1),
            &doc,
        );
        let patch = apply_format(cmd, sel.as_ref(), &mut doc);
        (doc, patch)
    }

    fn texts(doc: &Document) -> Vec<&str> {
        doc.lines().iter().map(|l| l.text.as_str()).collect()
    }

    #[rstest]
    #[case(FormatCommand::Bold, "**", "**")]
    #[case(FormatCommand::Italic, "_", "_")]
    #[case(FormatCommand::Code, "`", "`")]
    fn wraps_selected_range(
        #[case] cmd: FormatCommand,
        #[case] open: &str,
        #[case] close: &str,
        #[values((0, 4), (4, 10), (2, 3), (0, 19), (10, 19))] range: (usize, usize),
    ) {
        let text = "The quick brown fox";
        let (s, e) = range;
        let (doc, patch) = format(text, cmd, (0, s), (0, e));

        let expected = format!("{}{open}{}{close}{}", &text[..s], &text[s..e], &text[e..]);
        assert_eq!(doc.text(), expected);
        assert_eq!(patch.map(|p| p.changed), Some(0..1));
    }

    #[test]
    fn heading_on_empty_line() {
        let (doc, _) = format("", FormatCommand::Heading, (0, 0), (0, 0));
        assert_eq!(doc.text(), "# ");
    }

    #[rstest]
    #[case(FormatCommand::Bold, "** **")]
    #[case(FormatCommand::Link, "[title](https://www.example.com)")]
    #[case(FormatCommand::Image, "![alt text](image.jpg)")]
    #[case(FormatCommand::OrderedList, "1. ")]
    fn caret_on_empty_line_uses_defaults(#[case] cmd: FormatCommand, #[case] expected: &str) {
        let (doc, _) = format("before\n\nafter", cmd, (1, 0), (1, 0));
        assert_eq!(texts(&doc), vec!["before", expected, "after"]);
    }

    #[test]
    fn caret_mid_line_inserts_new_line() {
        let (doc, patch) = format("Some text\nnext", FormatCommand::Link, (0, 4), (0, 4));

        assert_eq!(
            texts(&doc),
            vec!["Some text", "[title](https://www.example.com)", "next"]
        );
        assert_eq!(patch.unwrap().changed, 1..2);
        assert_eq!(doc.lines()[2].index, 2);
    }

    #[test]
    fn heading_over_whole_line() {
        let (doc, _) = format("The Raven", FormatCommand::Heading, (0, 9), (0, 0));
        assert_eq!(doc.text(), "# The Raven");
    }

    #[test]
    fn horizontal_rule_replaces_whole_line() {
        let (doc, _) = format("keep\nreplace me\nkeep", FormatCommand::HorizontalRule, (1, 2), (1, 5));
        assert_eq!(texts(&doc), vec!["keep", "---", "keep"]);
    }

    #[test]
    fn bold_is_not_idempotent() {
        let (doc, _) = format("**x**", FormatCommand::Bold, (0, 0), (0, 5));
        assert_eq!(doc.text(), "****x****");
    }

    #[test]
    fn ordered_list_over_three_lines() {
        let (doc, patch) = format("a\nb\nc", FormatCommand::OrderedList, (0, 0), (2, 1));

        assert_eq!(texts(&doc), vec!["", "1. a", "2. b", "3. c", ""]);
        assert_eq!(patch.unwrap().changed, 0..5);
    }

    #[test]
    fn ordered_list_ignores_existing_numbering() {
        let (doc, _) = format("7. a\n9. b", FormatCommand::OrderedList, (0, 0), (1, 1));
        assert_eq!(texts(&doc), vec!["", "1. 7. a", "2. 9. b", ""]);
    }

    #[test]
    fn multiline_block_is_padded_in_place() {
        let (doc, patch) = format(
            "intro\nx\ny\noutro",
            FormatCommand::UnorderedList,
            (1, 0),
            (2, 1),
        );

        assert_eq!(texts(&doc), vec!["intro", "", "- x", "- y", "", "outro"]);
        assert_eq!(patch.unwrap().changed, 1..5);
        for (i, line) in doc.lines().iter().enumerate() {
            assert_eq!(line.index, i);
        }
    }

    #[test]
    fn blockquote_over_lines() {
        let (doc, _) = format("one\ntwo", FormatCommand::Blockquote, (1, 3), (0, 0));
        assert_eq!(texts(&doc), vec!["", "> one", "> two", ""]);
    }

    #[rstest]
    #[case(FormatCommand::Heading)]
    #[case(FormatCommand::Bold)]
    #[case(FormatCommand::Italic)]
    #[case(FormatCommand::Code)]
    #[case(FormatCommand::Link)]
    #[case(FormatCommand::Image)]
    fn other_commands_pass_multiline_through(#[case] cmd: FormatCommand) {
        let (doc, patch) = format("a\nb", cmd, (0, 0), (1, 1));

        assert_eq!(doc.text(), "a\nb");
        let patch = patch.unwrap();
        assert_eq!(patch.changed, 0..2);
        assert_eq!(patch.version, 1);
    }

    #[test]
    fn horizontal_rule_pads_multiline_without_rewriting() {
        let (doc, _) = format("a\nb", FormatCommand::HorizontalRule, (0, 0), (1, 1));
        assert_eq!(texts(&doc), vec!["", "a", "b", ""]);
    }

    #[test]
    fn no_selection_is_a_no_op() {
        let mut doc = Document::from_text("abc");
        assert!(apply_format(FormatCommand::Bold, None, &mut doc).is_none());
        assert_eq!(doc.text(), "abc");
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn stale_selection_is_a_no_op() {
        let long = Document::from_text("a\nb\nc");
        let sel = compute_selection(Position::new(2, 0), Position::new(2, 1), &long);
        assert!(sel.is_some());

        let mut short = Document::from_text("a");
        assert!(apply_format(FormatCommand::Bold, sel.as_ref(), &mut short).is_none());
        assert_eq!(short.text(), "a");
    }

    #[test]
    fn multiline_transform_reads_current_document_text() {
        let old = Document::from_text("a\nb\nc");
        let sel = compute_selection(Position::new(0, 0), Position::new(1, 1), &old);

        let mut current = Document::from_text("x\ny\nz");
        apply_format(FormatCommand::UnorderedList, sel.as_ref(), &mut current).unwrap();

        assert_eq!(texts(&current), vec!["", "- x", "- y", "", "z"]);
    }

    #[test]
    fn unicode_offsets_are_chars() {
        let (doc, _) = format("café au lait", FormatCommand::Italic, (0, 0), (0, 4));
        assert_eq!(doc.text(), "_café_ au lait");
    }
}
