/*!
 * # Editing Core Module
 *
 * Line-oriented editing model behind the formatting toolbar.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: the line sequence
 * - The document is an ordered `Vec<Line>`; its serialization is derived on demand
 * - Line indices are positional and reindexed after every structural edit
 * - Offsets within a line are char offsets, never bytes
 *
 * ### 2. Selections as index arithmetic
 * - Raw anchor/focus `Position`s are normalized into a `Selection`
 * - Inverted selections are swapped so `start_offset <= end_offset`
 * - A `Selection` can only be built by the tracker, so it always refers to real lines
 *
 * ### 3. Command-Based Formatting
 * - All formatting goes through the closed `FormatCommand` enum
 * - Each command maps to an entry of a static dispatch table of pure transforms
 * - Single-line and multi-line selections follow different policies
 *
 * ### 4. One-shot sessions
 * - `Session` owns the document, the captured selection and the options
 * - A successful command consumes the captured selection
 *
 * ## Module Structure
 *
 * - **`document`**: `Document` and `Line` types
 * - **`selection`**: `Position`, `Selection` and `compute_selection`
 * - **`commands`**: `FormatCommand` and its dispatch table
 * - **`format`**: `apply_format`, the single-line and multi-line policies
 * - **`session`**: `Session` handle and edit-ingestion policy
 * - **`patch`**: Edit result metadata
 *
 * ## Usage Pattern
 *
 * ```rust
 * use textmarked_engine::editing::*;
 * use textmarked_engine::EditorOptions;
 *
 * let mut session = Session::new("Hello world", EditorOptions::default());
 *
 * // 1. Capture a selection over "world"
 * session.select(Position::new(0, 6), Position::new(0, 11));
 *
 * // 2. Apply a command (consumes the selection)
 * let patch = session.apply(FormatCommand::Bold);
 * assert!(patch.is_some());
 *
 * // 3. Read the serialization back
 * assert_eq!(session.text(), "Hello **world**");
 * ```
 */

pub mod commands;
pub mod document;
pub mod format;
pub mod patch;
pub mod selection;
pub mod session;

// Public API re-exports
pub use commands::{FormatCommand, ParseCommandError};
pub use document::{Document, Line};
pub use format::apply_format;
pub use patch::Patch;
pub use selection::{ParsePositionError, Position, Selection, compute_selection};
pub use session::{EditError, Session};
