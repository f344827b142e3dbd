//! # Markup Rendering
//!
//! Line-oriented conversion of the editor's markup dialect into an HTML
//! fragment.
//!
//! ## Rendering Phases
//!
//! 1. **Line Classification** (`classify`): each raw line is tagged as an
//!    ordered item, an unordered item, or neither
//! 2. **Line Substitution** (`render_line`): the construct table is applied
//!    in order, one substitution per construct per line
//! 3. **Grouping** (`render`): runs of same-kind items are wrapped in
//!    `<ol>`/`<ul>`
//!
//! ## Key Invariants
//!
//! - Rendering never fails; text no construct matches passes through verbatim
//! - Images are substituted before links, so `![..](..)` never becomes an `<a>`
//! - Captured text is not HTML-escaped
//! - Items of one run are concatenated; every other line boundary is a `\n`

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Kind of a list item line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>",
            ListKind::Unordered => "<ul>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered => "</ul>",
        }
    }
}

/// One row of the construct table.
struct Substitution {
    construct: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

const ORDERED_ITEM: &str = r"^ ?\d+\. (.*)$";
const UNORDERED_ITEM: &str = r"^ ?- (.*)$";

/// Construct table, in application order.
fn substitutions() -> &'static [Substitution] {
    static TABLE: OnceLock<Vec<Substitution>> = OnceLock::new();

    TABLE.get_or_init(|| {
        [
            ("heading", r"^# (.*)$", "<h1>$1</h1>"),
            ("bold", r"\*\*(.+?)\*\*", "<strong>$1</strong>"),
            ("italic", r"\*([^*]+)\*|_([^_]+)_", "<em>$1$2</em>"),
            ("blockquote", r"^> (.*)$", "<blockquote>$1</blockquote>"),
            ("code", r"`([^`]+)`", "<code>$1</code>"),
            ("horizontal rule", r"^---$", "<hr>"),
            ("image", r"!\[([^\]]*)\]\(([^)]*)\)", r#"<img src="$2" alt="$1">"#),
            ("link", r"\[([^\]]*)\]\(([^)]*)\)", r#"<a href="$2">$1</a>"#),
            ("ordered item", ORDERED_ITEM, "<li>$1</li>"),
            ("unordered item", UNORDERED_ITEM, "<li>$1</li>"),
        ]
        .into_iter()
        .map(|(construct, pattern, replacement)| Substitution {
            construct,
            pattern: Regex::new(pattern).expect("Invalid markup regex"),
            replacement,
        })
        .collect()
    })
}

fn ordered_item() -> &'static Regex {
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    ORDERED.get_or_init(|| Regex::new(ORDERED_ITEM).expect("Invalid list regex"))
}

fn unordered_item() -> &'static Regex {
    static UNORDERED: OnceLock<Regex> = OnceLock::new();
    UNORDERED.get_or_init(|| Regex::new(UNORDERED_ITEM).expect("Invalid list regex"))
}

/// Classify a raw line as a list item, or `None`.
pub fn classify(line: &str) -> Option<ListKind> {
    if ordered_item().is_match(line) {
        Some(ListKind::Ordered)
    } else if unordered_item().is_match(line) {
        Some(ListKind::Unordered)
    } else {
        None
    }
}

/// Apply the construct table to a single line.
pub fn render_line(line: &str) -> String {
    let mut out = line.to_string();

    for sub in substitutions() {
        let replaced = match sub.pattern.replace(&out, sub.replacement) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(replaced) => replaced,
        };
        log::trace!("{}: {out:?} -> {replaced:?}", sub.construct);
        out = replaced;
    }

    out
}

/// Render markup source to an HTML fragment.
///
/// ```rust
/// # use textmarked_engine::render;
/// assert_eq!(render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(render("# Title\nbody"), "<h1>Title</h1>\nbody");
/// ```
pub fn render(source: &str) -> String {
    let lines: Vec<&str> = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    // Pass one: classify every raw line
    let kinds: Vec<Option<ListKind>> = lines.iter().map(|line| classify(line)).collect();

    // Pass two: substitute, then open/close runs at their boundaries
    let mut html = String::with_capacity(source.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        let kind = kinds[i];
        let prev = i.checked_sub(1).and_then(|p| kinds[p]);
        let next = kinds.get(i + 1).copied().flatten();

        if i > 0 && (kind.is_none() || prev != kind) {
            html.push('\n');
        }

        if let Some(kind) = kind
            && prev != Some(kind)
        {
            html.push_str(kind.open_tag());
        }

        html.push_str(&render_line(line));

        if let Some(kind) = kind
            && next != Some(kind)
        {
            html.push_str(kind.close_tag());
        }
    }

    html
}
