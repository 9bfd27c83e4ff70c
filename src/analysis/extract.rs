//! Best-effort structure extraction from semi-structured HTML and Markdown.
//!
//! These are isolated pure functions with a documented, literal fallback
//! ordering. They deliberately stay regex-based; the source material does
//! not warrant a full parser.

use regex::Regex;
use std::sync::LazyLock;

const UNTITLED: &str = "Untitled Article";
const MAX_FIRST_LINE_TITLE: usize = 100;

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap());

static OG_TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*property=["']og:title["'][^>]*content=["']([^"']+)["']"#).unwrap()
});

static MARKDOWN_IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\(([^)\s]+)\)").unwrap());

/// Extract an article title. For HTML, tries `<title>`, then `<h1>`, then an
/// `og:title` meta tag. Falls back to the first content line when it is
/// shorter than 100 characters, else a generic title.
pub fn extract_title(content: &str, is_html: bool) -> String {
    if is_html {
        let tag_match = TITLE_REGEX
            .captures(content)
            .or_else(|| H1_REGEX.captures(content))
            .or_else(|| OG_TITLE_REGEX.captures(content));

        if let Some(captures) = tag_match
            && let Some(matched) = captures.get(1)
        {
            let title = matched.as_str().trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }
    }

    let first_line = content.lines().next().unwrap_or("").trim();
    if !first_line.is_empty() && first_line.len() < MAX_FIRST_LINE_TITLE {
        return first_line.to_string();
    }

    UNTITLED.to_string()
}

/// Collect every `![alt](url)` image URL from the converted Markdown.
/// Newlines are collapsed first so images split across lines still match.
pub fn extract_images(markdown: &str) -> Vec<String> {
    let collapsed = markdown.replace('\n', "");
    MARKDOWN_IMAGE_REGEX
        .captures_iter(&collapsed)
        .filter_map(|captures| captures.get(1))
        .map(|matched| matched.as_str().to_string())
        .collect()
}
