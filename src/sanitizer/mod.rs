//! Pattern-based HTML sanitization applied before any article content is
//! embedded in a prompt.
//!
//! This is a best-effort defense against script payloads and prompt
//! injection riding along in fetched pages, not a security boundary: it
//! strips dangerous blocks with regexes and does not validate
//! well-formedness. Upgrading to a real HTML parser is deliberately out of
//! scope while the conversion step is delegated to a model.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap());

static STYLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").unwrap());

static IFRAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<iframe\b.*?</iframe\s*>").unwrap());

static OBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<object\b.*?</object\s*>").unwrap());

static EMBED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<embed\b.*?</embed\s*>").unwrap());

// <embed> is a void element in practice; the paired form above only catches
// explicitly closed blocks.
static EMBED_VOID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<embed\b[^>]*>").unwrap());

static EVENT_HANDLER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s+on\w+\s*=\s*("[^"]*"|'[^']*'|[^>\s]*)"#).unwrap());

static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Strip script/style/iframe/object/embed blocks, inline `on*=` event
/// handlers, and HTML comments from `html`.
pub fn sanitize_html(html: &str) -> String {
    let sanitized = SCRIPT_REGEX.replace_all(html, "");
    let sanitized = STYLE_REGEX.replace_all(&sanitized, "");
    let sanitized = IFRAME_REGEX.replace_all(&sanitized, "");
    let sanitized = OBJECT_REGEX.replace_all(&sanitized, "");
    let sanitized = EMBED_REGEX.replace_all(&sanitized, "");
    let sanitized = EMBED_VOID_REGEX.replace_all(&sanitized, "");
    let sanitized = EVENT_HANDLER_REGEX.replace_all(&sanitized, "");
    let sanitized = COMMENT_REGEX.replace_all(&sanitized, "");
    sanitized.into_owned()
}
