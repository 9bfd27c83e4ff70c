//! Normalization of raw model output into stable result payloads.
//!
//! Models are instructed to return bare JSON but routinely wrap it in code
//! fences anyway, omit fields, or return prose. Each decode function strips
//! fence markers, parses, and substitutes documented defaults on failure so
//! that one failed analysis dimension never blocks the others. Decoding is
//! deterministic: identical model output yields identical payloads.

use crate::analysis::types::{ImageDescription, PoliticalCategory, SourceBias, SourceReliability};
use serde::Deserialize;

/// Remove Markdown code-fence delimiters (```json, ```md, bare ```) from
/// model output. A fenced payload must normalize to the same object as the
/// unwrapped JSON.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```md", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn default_rating() -> f64 {
    0.5
}

fn default_political_score() -> f64 {
    50.0
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FactualityPayload {
    #[serde(default)]
    pub article: FactualityAssessment,
    #[serde(default)]
    pub source: FactualitySourceAssessment,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FactualityAssessment {
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default, rename = "ratingLabel")]
    pub rating_label: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FactualitySourceAssessment {
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default, rename = "ratingLabel")]
    pub rating_label: Option<String>,
}

impl Default for FactualityAssessment {
    fn default() -> Self {
        Self {
            rating: 0.5,
            rating_label: Some("Mixed Factuality".to_string()),
            sources: Vec::new(),
        }
    }
}

impl Default for FactualitySourceAssessment {
    fn default() -> Self {
        Self {
            rating: 0.5,
            rating_label: Some("Mixed Factuality".to_string()),
        }
    }
}

impl Default for FactualityPayload {
    fn default() -> Self {
        Self {
            article: FactualityAssessment::default(),
            source: FactualitySourceAssessment::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PoliticalPayload {
    #[serde(default)]
    pub article: PoliticalWire,
    #[serde(default)]
    pub source: PoliticalWire,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PoliticalWire {
    #[serde(default = "default_political_score")]
    pub score: f64,
    #[serde(default)]
    pub category: PoliticalCategory,
    #[serde(default)]
    pub reasoning: String,
}

impl Default for PoliticalWire {
    fn default() -> Self {
        Self {
            score: 50.0,
            category: PoliticalCategory::Centrist,
            reasoning: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SentimentPayload {
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub entities: Vec<SentimentEntity>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SentimentEntity {
    pub name: String,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CredibilityPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub reliability: SourceReliability,
    #[serde(default)]
    pub bias: SourceBias,
    #[serde(default = "default_rating")]
    pub credibility: f64,
    #[serde(default)]
    pub reasoning: String,
}

impl Default for CredibilityPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            reliability: SourceReliability::MixedReliability,
            bias: SourceBias::None,
            credibility: 0.5,
            reasoning: String::new(),
        }
    }
}

/// Parse a factuality response, falling back to the documented default
/// payload (rating 0.5, "Mixed Factuality", no sources) when the output is
/// not valid JSON.
pub fn decode_factuality(text: &str) -> FactualityPayload {
    serde_json::from_str(&strip_code_fences(text)).unwrap_or_default()
}

/// Parse a political-leaning response; any failure degrades to Centrist /
/// score 50 for both the article and the source.
pub fn decode_political(text: &str) -> PoliticalPayload {
    serde_json::from_str(&strip_code_fences(text)).unwrap_or_default()
}

/// Parse a sentiment response. Missing fields default to a neutral overall
/// score and no entities; duplicate entity names pass through untouched.
pub fn decode_sentiment(text: &str) -> SentimentPayload {
    serde_json::from_str(&strip_code_fences(text)).unwrap_or_default()
}

/// Parse a source-credibility response. The caller substitutes the derived
/// publisher identity for an empty name/url.
pub fn decode_credibility(text: &str) -> CredibilityPayload {
    serde_json::from_str(&strip_code_fences(text)).unwrap_or_default()
}

/// Parse image descriptions; unparseable output means no descriptions.
pub fn decode_image_descriptions(text: &str) -> Vec<ImageDescription> {
    serde_json::from_str(&strip_code_fences(text)).unwrap_or_default()
}

/// Append the grounded provider's out-of-band citation URLs to the parsed
/// factuality sources. The structured citation list is more reliable than
/// whatever URLs the model chose to cite inline, so this merge always runs;
/// a missing `sources` field has already decoded to an empty array.
pub fn merge_citations(payload: &mut FactualityPayload, citations: &[String]) {
    payload
        .article
        .sources
        .extend(citations.iter().cloned());
}
