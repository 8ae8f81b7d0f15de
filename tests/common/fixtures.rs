use serde_json::{Value, json};

/// A paragraph chunk in wire form.
pub fn paragraph(content: &str) -> Value {
    json!({ "type": "paragraph", "paragraph": content })
}

/// A split chunk in wire form.
pub fn split(direction: &str, children: Vec<Value>) -> Value {
    json!({ "type": "node", "direction": direction, "children": children })
}

/// A page carrying only the given headings and a one-paragraph body.
pub fn titled_page(h1: Option<&str>, h2: Option<&str>, h3: Option<&str>, body: &str) -> Value {
    let mut page = json!({ "chunk": paragraph(body) });
    for (key, value) in [("h1", h1), ("h2", h2), ("h3", h3)] {
        if let Some(text) = value {
            page[key] = json!(text);
        }
    }
    page
}

/// Four pages walking down the heading levels, then restating nothing.
pub fn three_level_deck() -> Value {
    json!([
        titled_page(Some("X"), None, None, "intro"),
        titled_page(None, Some("Y"), None, "section"),
        titled_page(None, None, Some("Z"), "detail"),
        { "chunk": paragraph("tail") }
    ])
}

/// A two-chapter talk with split layouts and page options.
pub fn conference_deck() -> Value {
    json!([
        {
            "h1": "Rust at Scale",
            "layout": "centered",
            "chunk": paragraph("<p>Lessons from production</p>")
        },
        {
            "h1": "Rust at Scale",
            "h2": "Why Rust",
            "chunk": split("horizontal", vec![
                paragraph("<ul><li>Safety</li></ul>"),
                paragraph("<ul><li>Speed</li></ul>")
            ])
        },
        {
            "h2": "Why Rust",
            "h3": "Benchmarks",
            "styles": { "background-color": "#101820" },
            "chunk": split("vertical", vec![
                paragraph("<p>Latency</p>"),
                split("horizontal", vec![paragraph("<p>p50</p>"), paragraph("<p>p99</p>")])
            ])
        },
        {
            "h1": "Migration",
            "chunk": paragraph("<p>Step by step</p>")
        }
    ])
}
