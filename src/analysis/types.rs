//! Wire types for the analysis endpoint.
//!
//! Field names follow the public JSON contract (camelCase). All entities are
//! plain data created fresh per request; nothing here has a lifecycle beyond
//! one request/response cycle.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// The article: a URL (when `isUrl`), raw HTML, or plain text treated as
    /// already-Markdown.
    pub content: String,
    pub is_html: bool,
    #[serde(default)]
    pub is_url: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResults {
    pub factuality: Factuality,
    pub source: SourceCredibility,
    pub political_leaning: PoliticalLeaning,
    pub sentiment: Sentiment,
    pub article: Article,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_descriptions: Option<Vec<ImageDescription>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Factuality {
    pub article: ArticleFactuality,
    pub source: SourceFactuality,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleFactuality {
    /// Factuality score in [0, 1].
    pub confidence: f64,
    /// Supporting citations, including any merged from the grounded
    /// provider's side channel.
    pub sources: Vec<String>,
    /// Text label for the factuality rating.
    pub rating: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SourceFactuality {
    pub confidence: f64,
    pub rating: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SourceCredibility {
    pub name: String,
    pub url: String,
    pub reliability: SourceReliability,
    pub bias: SourceBias,
    /// Overall credibility in [0, 1].
    pub credibility: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PoliticalLeaning {
    pub article: PoliticalAssessment,
    pub source: PoliticalAssessment,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PoliticalAssessment {
    /// 0 = Far Left, 100 = Far Right.
    pub score: f64,
    pub category: PoliticalCategory,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Sentiment {
    pub overall: OverallSentiment,
    pub entities: Vec<EntitySentiment>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OverallSentiment {
    /// Sentiment in [-1, 1].
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntitySentiment {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Article {
    pub title: String,
    /// The converted (or passed-through) Markdown.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ImageDescription {
    pub url: String,
    pub description: String,
}

/// Political spectrum bands at 20-point intervals. Unknown labels from the
/// model decode to `Centrist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PoliticalCategory {
    #[serde(rename = "Far Left")]
    FarLeft,
    #[serde(rename = "Center-Left")]
    CenterLeft,
    #[serde(rename = "Center-Right")]
    CenterRight,
    #[serde(rename = "Far Right")]
    FarRight,
    #[serde(other)]
    Centrist,
}

impl Default for PoliticalCategory {
    fn default() -> Self {
        Self::Centrist
    }
}

/// Six-level reliability scale. Unknown labels decode to `MixedReliability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SourceReliability {
    #[serde(rename = "Very Reliable")]
    VeryReliable,
    Reliable,
    #[serde(rename = "Mostly Reliable")]
    MostlyReliable,
    #[serde(rename = "Somewhat Unreliable")]
    SomewhatUnreliable,
    Unreliable,
    #[serde(rename = "Mixed Reliability", other)]
    MixedReliability,
}

impl Default for SourceReliability {
    fn default() -> Self {
        Self::MixedReliability
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SourceBias {
    Biased,
    Unbiased,
    #[serde(other)]
    None,
}

impl Default for SourceBias {
    fn default() -> Self {
        Self::None
    }
}
