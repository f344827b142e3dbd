pub mod editing;
pub mod options;
pub mod render;

// Re-export key types for easier usage
pub use editing::{
    commands::*, document::*, format::apply_format, patch::Patch, selection::*, session::*,
};
pub use options::{EditorOptions, OptionsError};
pub use render::{ListKind, render};
