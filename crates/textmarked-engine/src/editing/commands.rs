use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formatting commands offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatCommand {
    Heading,
    Bold,
    Italic,
    Blockquote,
    #[serde(rename = "Ordered-List", alias = "OrderedList")]
    OrderedList,
    #[serde(rename = "Unordered-List", alias = "UnorderedList")]
    UnorderedList,
    Code,
    #[serde(rename = "Horizontal-Rule", alias = "HorizontalRule")]
    HorizontalRule,
    Link,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown format command: {0}")]
pub struct ParseCommandError(pub String);

/// One entry of the dispatch table.
struct Rule {
    command: FormatCommand,
    /// Markup for a single-line selection, given the selected text.
    single: fn(&str) -> String,
    /// Per-line markup across a multi-line selection, given the line text
    /// and a 1-based counter. `None` means the line is left as is.
    multi: Option<fn(&str, usize) -> String>,
    /// Bracket a multi-line application with blank lines.
    pads_block: bool,
    /// The single-line markup replaces the whole line, ignoring offsets.
    replaces_line: bool,
}

/// Indexed in `FormatCommand::ALL` order.
static RULES: [Rule; 10] = [
    Rule {
        command: FormatCommand::Heading,
        single: heading,
        multi: None,
        pads_block: false,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::Bold,
        single: bold,
        multi: None,
        pads_block: false,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::Italic,
        single: italic,
        multi: None,
        pads_block: false,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::Blockquote,
        single: blockquote,
        multi: Some(blockquote_line),
        pads_block: true,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::OrderedList,
        single: ordered,
        multi: Some(ordered_line),
        pads_block: true,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::UnorderedList,
        single: unordered,
        multi: Some(unordered_line),
        pads_block: true,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::Code,
        single: code,
        multi: None,
        pads_block: false,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::HorizontalRule,
        single: horizontal_rule,
        multi: None,
        pads_block: true,
        replaces_line: true,
    },
    Rule {
        command: FormatCommand::Link,
        single: link,
        multi: None,
        pads_block: false,
        replaces_line: false,
    },
    Rule {
        command: FormatCommand::Image,
        single: image,
        multi: None,
        pads_block: false,
        replaces_line: false,
    },
];

impl FormatCommand {
    /// Every command, in default toolbar order.
    pub const ALL: [FormatCommand; 10] = [
        FormatCommand::Heading,
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::Blockquote,
        FormatCommand::OrderedList,
        FormatCommand::UnorderedList,
        FormatCommand::Code,
        FormatCommand::HorizontalRule,
        FormatCommand::Link,
        FormatCommand::Image,
    ];

    /// Display name, as shown on the toolbar button
    pub fn name(self) -> &'static str {
        match self {
            FormatCommand::Heading => "Heading",
            FormatCommand::Bold => "Bold",
            FormatCommand::Italic => "Italic",
            FormatCommand::Blockquote => "Blockquote",
            FormatCommand::OrderedList => "Ordered-List",
            FormatCommand::UnorderedList => "Unordered-List",
            FormatCommand::Code => "Code",
            FormatCommand::HorizontalRule => "Horizontal-Rule",
            FormatCommand::Link => "Link",
            FormatCommand::Image => "Image",
        }
    }

    fn rule(self) -> &'static Rule {
        &RULES[self as usize]
    }

    /// Markup for a single-line selection whose selected text is `value`.
    pub fn markup(self, value: &str) -> String {
        (self.rule().single)(value)
    }

    /// Markup for one line of a multi-line selection, or `None` when the
    /// command passes lines through unchanged.
    pub fn markup_line(self, text: &str, counter: usize) -> Option<String> {
        self.rule().multi.map(|transform| transform(text, counter))
    }

    /// Whether a multi-line application is bracketed with blank lines
    pub fn pads_block(self) -> bool {
        self.rule().pads_block
    }

    /// Whether the single-line markup replaces the whole line
    pub fn replaces_line(self) -> bool {
        self.rule().replaces_line
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatCommand {
    type Err = ParseCommandError;

    /// Case-insensitive; `-`, `_` and spaces are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        FormatCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name().replace('-', "").eq_ignore_ascii_case(&key))
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

fn heading(value: &str) -> String {
    format!("# {value}")
}

fn bold(value: &str) -> String {
    format!("**{}**", or_default(value, " "))
}

fn italic(value: &str) -> String {
    format!("_{}_", or_default(value, " "))
}

fn blockquote(value: &str) -> String {
    blockquote_line(value, 1)
}

fn blockquote_line(text: &str, _counter: usize) -> String {
    format!("> {text}")
}

/// The counter is always 1 in single-line form
fn ordered(value: &str) -> String {
    ordered_line(value, 1)
}

fn ordered_line(text: &str, counter: usize) -> String {
    format!("{counter}. {text}")
}

fn unordered(value: &str) -> String {
    unordered_line(value, 1)
}

fn unordered_line(text: &str, _counter: usize) -> String {
    format!("- {text}")
}

fn code(value: &str) -> String {
    format!("`{}`", or_default(value, " "))
}

fn horizontal_rule(_value: &str) -> String {
    "---".to_string()
}

fn link(value: &str) -> String {
    format!("[{}](https://www.example.com)", or_default(value, "title"))
}

fn image(value: &str) -> String {
    format!("![{}](image.jpg)", or_default(value, "alt text"))
}
