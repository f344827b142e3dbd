use textmarked_engine::render;

fn fixture(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    md.trim_end().to_string()
}

#[test]
fn raven_document() {
    let html = render(&fixture("raven"));
    insta::assert_snapshot!("raven", html);
}

#[test]
fn raven_document_fragments() {
    let html = render(&fixture("raven"));

    for expected in [
        "<h1>The Raven</h1>",
        "<code>stories</code>",
        r#"<a href="https://en.wikipedia.org/wiki/Psychopomp">psychopomps</a>"#,
        "<strong>material world</strong>",
        "<em>world of spirits</em>",
        r#"<img src="raven-head.jpg" alt="Raven">"#,
    ] {
        assert!(html.contains(expected), "missing {expected} in:\n{html}");
    }
}

/// Rendering twice gives the same output: no state leaks between calls
#[test]
fn render_is_pure() {
    let md = fixture("raven");
    let first = render(&md);
    let _ = render("- a\n- b\n1. c");
    assert_eq!(render(&md), first);
}

#[test]
fn empty_document() {
    assert_eq!(render(""), "");
}
