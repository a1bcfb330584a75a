//! Plain-text extraction from HTML.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text is never visible.
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

/// Elements that may hold the main documentation content.
const CONTENT_ELEMENTS: &str = "main, article, div";

/// Class substrings marking an element as main documentation content.
const CONTENT_CLASS_HINTS: [&str; 4] = ["content", "main", "doc", "page"];

/// Extracts all visible text of a document as a single flattened string.
///
/// Text under `<script>` and `<style>` is dropped. Lines are trimmed and split on
/// runs of two spaces, and the non-empty fragments are joined with single spaces.
///
/// # Examples
///
/// ```
/// # use docs_ltx::extract_text;
/// let html = "<html><body><h1>Title</h1>\n<p>Some   text</p><script>ignored()</script></body></html>";
/// assert_eq!(extract_text(html), "Title Some text");
/// ```
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let text = visible_text(document.root_element(), "");
    normalize_fragments(&text, " ")
}

/// Extracts the text of the main documentation content, one fragment per line.
///
/// Every `<main>`, `<article>` or `<div>` whose class attribute contains `content`,
/// `main`, `doc` or `page` contributes its text, in document order. Nested matches
/// contribute again. Without any match the `<body>` is used, and when the body has no
/// visible text the whole document (so a `<title>` in `<head>` still counts).
///
/// Unlike [`extract_text`], line boundaries between text nodes are kept, so headings
/// and paragraphs stay on their own lines.
pub fn extract_main_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut areas: Vec<ElementRef<'_>> = match Selector::parse(CONTENT_ELEMENTS) {
        Ok(selector) => document.select(&selector).filter(|e| has_content_class(*e)).collect(),
        Err(_) => Vec::new(),
    };

    if areas.is_empty() {
        let body = Selector::parse("body")
            .ok()
            .and_then(|selector| document.select(&selector).next())
            .filter(|body| !visible_text(*body, "").trim().is_empty());
        areas.push(body.unwrap_or_else(|| document.root_element()));
    }

    let mut extracted = String::new();
    for area in areas {
        extracted.push_str(&visible_text(area, "\n"));
        extracted.push('\n');
    }

    normalize_fragments(&extracted, "\n")
}

fn has_content_class(element: ElementRef<'_>) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| CONTENT_CLASS_HINTS.iter().any(|hint| class.contains(hint)))
}

/// Concatenates the text nodes under `root` that are not inside a hidden element.
fn visible_text(root: ElementRef<'_>, separator: &str) -> String {
    root.descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
            })
        })
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Trims every line, splits lines on double spaces and joins the non-empty fragments.
fn normalize_fragments(text: &str, joiner: &str) -> String {
    text.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(joiner)
}
