use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info, instrument};
use utoipa::ToSchema;

use crate::{
    analysis::{
        extract,
        reliability::reliability_label,
        source::SourceIdentity,
        types::{
            AnalysisRequest, AnalysisResults, Article, ArticleFactuality, EntitySentiment,
            Factuality, OverallSentiment, PoliticalAssessment, PoliticalLeaning, Sentiment,
            SourceCredibility, SourceFactuality,
        },
    },
    app_state::AppState,
    fetcher,
    llm::CompletionRequest,
    normalizer, prompts, sanitizer,
};

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct LivenessResponse {
    pub message: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/endpoint",
    tag = "analysis",
    responses((status = 200, description = "Liveness payload", body = LivenessResponse))
)]
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "News analysis API endpoint".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/api/endpoint",
    tag = "analysis",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Aggregated analysis", body = AnalysisResults),
        (status = 400, description = "Malformed input, failed fetch, or failed conversion", body = ErrorResponse),
        (status = 500, description = "Failed sentiment or factuality extraction", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn analyze(State(state): State<AppState>, body: String) -> Response {
    // Parse the body by hand: every error path must answer with a JSON
    // `{error}` body, and the framework's built-in rejection does not.
    let mut payload: AnalysisRequest = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(err) => {
            error!(error = %err, "malformed request body");
            return error_response(StatusCode::BAD_REQUEST, "Failed to process request");
        }
    };

    if payload.content.trim().is_empty() && !(payload.is_url && payload.url.is_some()) {
        return error_response(StatusCode::BAD_REQUEST, "Missing content");
    }

    // Acquire and convert. Raw text is treated as already-Markdown.
    let article_markdown = if payload.is_html {
        if payload.is_url
            && let Some(url) = payload.url.clone()
        {
            info!(url = %url, "server-side fetching URL");
            match fetcher::fetch(&url).await {
                Ok(page) => {
                    info!(bytes = page.body_utf8.len(), "fetched article body");
                    payload.content = page.body_utf8;
                }
                Err(err) => {
                    error!(error = %err, "URL fetch failed");
                    return error_response(StatusCode::BAD_REQUEST, err.caller_message());
                }
            }
        }

        let sanitized = sanitizer::sanitize_html(&payload.content);
        let prompt = prompts::markdown_conversion(&sanitized);
        match state
            .general
            .complete(CompletionRequest::with_web_search(prompt))
            .await
        {
            Ok(completion) => normalizer::strip_code_fences(&completion.text),
            Err(err) => {
                error!(error = %err, "HTML to Markdown conversion failed");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "Failed to convert HTML to Markdown",
                );
            }
        }
    } else {
        payload.content.clone()
    };

    if article_markdown.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Failed to convert HTML to Markdown");
    }

    let identity = SourceIdentity::derive(
        if payload.is_url {
            payload.url.as_deref()
        } else {
            None
        },
        payload.is_html,
        &payload.content,
    );

    let article = article_markdown.as_str();
    let images = extract::extract_images(article);

    // Fan out the scoring calls; none depends on another's result, only on
    // the already-produced Markdown. Each is awaited to completion or
    // failure independently; a failure is absorbed below.
    let credibility_task = async {
        state
            .grounded
            .complete(CompletionRequest::with_web_search(
                prompts::source_credibility(article, &identity.name, &identity.domain),
            ))
            .await
            .ok()
    };
    let sentiment_task = async {
        state
            .general
            .complete(CompletionRequest::new(prompts::sentiment(article)))
            .await
            .ok()
    };
    let factuality_task = async {
        state
            .grounded
            .complete(CompletionRequest::with_web_search(prompts::factuality(
                article,
                &identity.name,
                &identity.domain,
            )))
            .await
            .ok()
    };
    let political_task = async {
        state
            .grounded
            .complete(CompletionRequest::with_web_search(
                prompts::political_leaning(article, &identity.name, &identity.domain),
            ))
            .await
            .ok()
    };
    let images_task = async {
        if images.is_empty() {
            None
        } else {
            state
                .general
                .complete(CompletionRequest::new(prompts::image_descriptions(&images)))
                .await
                .ok()
        }
    };

    let (credibility_raw, sentiment_raw, factuality_raw, political_raw, images_raw) = tokio::join!(
        credibility_task,
        sentiment_task,
        factuality_task,
        political_task,
        images_task
    );

    // Sentiment and factuality are the required dimensions; everything else
    // degrades to defaults.
    let Some(sentiment_raw) = sentiment_raw else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze sentiment");
    };
    let Some(factuality_raw) = factuality_raw else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to analyze factuality",
        );
    };

    let sentiment = normalizer::decode_sentiment(&sentiment_raw.text);
    let mut factuality = normalizer::decode_factuality(&factuality_raw.text);
    normalizer::merge_citations(&mut factuality, &factuality_raw.citations);
    let political = political_raw
        .map(|completion| normalizer::decode_political(&completion.text))
        .unwrap_or_default();
    let credibility = credibility_raw
        .map(|completion| normalizer::decode_credibility(&completion.text))
        .unwrap_or_default();
    let image_descriptions = images_raw
        .map(|completion| normalizer::decode_image_descriptions(&completion.text))
        .filter(|descriptions| !descriptions.is_empty());

    let results = AnalysisResults {
        factuality: Factuality {
            article: ArticleFactuality {
                confidence: factuality.article.rating,
                rating: factuality
                    .article
                    .rating_label
                    .unwrap_or_else(|| reliability_label(factuality.article.rating).to_string()),
                sources: factuality.article.sources,
            },
            source: SourceFactuality {
                confidence: factuality.source.rating,
                rating: factuality
                    .source
                    .rating_label
                    .unwrap_or_else(|| reliability_label(factuality.source.rating).to_string()),
            },
        },
        source: SourceCredibility {
            name: if credibility.name.is_empty() {
                identity.name.clone()
            } else {
                credibility.name
            },
            url: if credibility.url.is_empty() {
                identity.domain.clone()
            } else {
                credibility.url
            },
            reliability: credibility.reliability,
            bias: credibility.bias,
            credibility: credibility.credibility,
            reasoning: credibility.reasoning,
        },
        political_leaning: PoliticalLeaning {
            article: PoliticalAssessment {
                score: political.article.score,
                category: political.article.category,
                reasoning: political.article.reasoning,
            },
            source: PoliticalAssessment {
                score: political.source.score,
                category: political.source.category,
                reasoning: political.source.reasoning,
            },
        },
        sentiment: Sentiment {
            overall: OverallSentiment {
                score: sentiment.overall_score,
            },
            entities: sentiment
                .entities
                .into_iter()
                .map(|entity| EntitySentiment {
                    name: entity.name,
                    score: entity.score,
                })
                .collect(),
        },
        article: Article {
            title: extract::extract_title(&payload.content, payload.is_html),
            content: article_markdown,
            url: if payload.is_url {
                payload.url.clone()
            } else if payload.is_html {
                Some(identity.domain.clone())
            } else {
                None
            },
        },
        image_descriptions,
    };

    (StatusCode::OK, Json(results)).into_response()
}
