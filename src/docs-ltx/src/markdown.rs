//! Markdown cleanup of extracted text.

use std::sync::LazyLock;

use regex::Regex;

static EXCESS_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| compile(r"\n\s*\n\s*\n"));
static IMAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"!\[([^\]]*)\]\([^)]+\)"));
static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"\[([^\]]*)\]\([^)]+\)"));
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]+>"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Cleans markdown-ish text for harvesting.
///
/// In order: runs of blank lines collapse into one, images are removed, links are
/// replaced by their text, leftover HTML tags are stripped and the result is trimmed.
/// Images go before links: the link rule would otherwise match inside `![alt](url)`
/// and leave `!alt` behind. A badge link, whose text was an image, is left with empty
/// text and disappears entirely.
///
/// # Examples
///
/// ```
/// # use docs_ltx::clean_markdown;
/// assert_eq!(clean_markdown("See [Docs](http://x) and ![img](http://y) here"), "See Docs and  here");
/// ```
pub fn clean_markdown(content: &str) -> String {
    let content = EXCESS_BLANK_LINES.replace_all(content, "\n\n");
    let content = IMAGE.replace_all(&content, "");
    let content = LINK.replace_all(&content, "$1");
    let content = HTML_TAG.replace_all(&content, "");
    content.trim().to_string()
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_links_and_images() {
        assert_eq!(
            clean_markdown("See [Docs](http://x) and ![img](http://y) here"),
            "See Docs and  here"
        );
        assert_eq!(clean_markdown("![](http://y)[a](b)"), "a");
    }

    #[test]
    fn test_badge_links_disappear() {
        assert_eq!(
            clean_markdown("Build [![CI](https://ci/badge.svg)](https://ci/run) ok"),
            "Build  ok"
        );
        assert_eq!(clean_markdown("[![npm](https://img/npm.svg)](https://npm/pkg)"), "");
    }

    #[test]
    fn test_collapses_blank_lines() {
        let text = "first\n\n\n\nsecond\n \n\t\nthird";
        assert_eq!(clean_markdown(text), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_strips_html_tags() {
        assert_eq!(
            clean_markdown("  <div class=\"x\">kept <b>bold</b></div>  "),
            "kept bold"
        );
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let text = indoc! {"
            # Specification

            **Items** are the atomic unit of context.

            POST /v1/responses creates a response.
        "};
        let once = clean_markdown(text);
        assert_eq!(clean_markdown(&once), once);

        let messy = "a\n\n\n\n[b](c) <i>d</i> ![e](f)";
        let once = clean_markdown(messy);
        assert_eq!(clean_markdown(&once), once);
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_markdown(""), "");
        assert_eq!(clean_markdown(" \n\n\n "), "");
    }
}
