//! Publisher identification.
//!
//! The source of an article is derived once per request and never mutated
//! afterward: from the explicit request URL when one was given, else from an
//! `og:url` meta tag in the raw HTML, else a fixed unknown-source fallback.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

const FALLBACK_DOMAIN: &str = "unknown-source.com";
const FALLBACK_NAME: &str = "Unknown Source";

static OG_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*property=["']og:url["'][^>]*content=["']([^"']+)["']"#).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIdentity {
    pub domain: String,
    pub name: String,
}

impl SourceIdentity {
    pub fn unknown() -> Self {
        Self {
            domain: FALLBACK_DOMAIN.to_string(),
            name: FALLBACK_NAME.to_string(),
        }
    }

    /// Derive the publisher identity for a request. `explicit_url` wins;
    /// otherwise the raw HTML is scanned for an `og:url` meta tag.
    pub fn derive(explicit_url: Option<&str>, is_html: bool, raw_content: &str) -> Self {
        if let Some(url) = explicit_url
            && let Some(identity) = Self::from_url_str(url)
        {
            return identity;
        }

        if is_html
            && let Some(captures) = OG_URL_REGEX.captures(raw_content)
            && let Some(matched) = captures.get(1)
            && let Some(identity) = Self::from_url_str(matched.as_str())
        {
            return identity;
        }

        Self::unknown()
    }

    fn from_url_str(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let domain = parsed.host_str()?.to_string();
        let name = name_from_domain(&domain);
        Some(Self { domain, name })
    }
}

/// Title-case the domain's first label: `www.example-news.com` becomes
/// `Example News`.
fn name_from_domain(domain: &str) -> String {
    // Hosts from `Url` are already lowercased.
    let stripped = domain.strip_prefix("www.").unwrap_or(domain);
    let first_label = stripped.split('.').next().unwrap_or(stripped);

    first_label
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
