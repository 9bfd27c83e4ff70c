mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use helpers::{ScriptedProvider, test_app};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const SENTIMENT_JSON: &str = r#"{
    "overall_score": 0.3,
    "entities": [
        {"name": "President Smith", "score": 0.7},
        {"name": "Opposition Party", "score": -0.6}
    ]
}"#;

const FACTUALITY_JSON: &str = r#"{
    "article": {"rating": 0.82, "ratingLabel": "Mostly Factual", "sources": ["https://primary.example"]},
    "source": {"rating": 0.9, "ratingLabel": "Very Factual"}
}"#;

const POLITICAL_JSON: &str = r#"{
    "article": {"score": 35, "category": "Center-Left", "reasoning": "framing"},
    "source": {"score": 48, "category": "Centrist", "reasoning": "outlet history"}
}"#;

const CREDIBILITY_JSON: &str = r#"{
    "name": "Example News", "url": "example-news.com",
    "reliability": "Reliable", "bias": "Unbiased",
    "credibility": 0.85, "reasoning": "established outlet"
}"#;

const IMAGES_JSON: &str = r#"[{"url": "https://img.example/1.jpg", "description": "A news photo."}]"#;

const ARTICLE_MARKDOWN: &str = "# Headline\n\n![photo](https://img.example/1.jpg)\n\nBody paragraph.";

fn scripted_general() -> ScriptedProvider {
    ScriptedProvider::new()
        .respond(
            "converting an article",
            &format!("```md\n{}\n```", ARTICLE_MARKDOWN),
        )
        .respond("for sentiment", SENTIMENT_JSON)
        .respond("list of image URLs", IMAGES_JSON)
}

fn scripted_grounded() -> ScriptedProvider {
    ScriptedProvider::new()
        .respond_with_citations(
            "for factuality",
            FACTUALITY_JSON,
            &["https://cite-1.example", "https://cite-2.example"],
        )
        .respond("political leaning", POLITICAL_JSON)
        .respond("credibility", CREDIBILITY_JSON)
}

fn post_body(json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/endpoint")
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_liveness() {
    let app = test_app(ScriptedProvider::new(), ScriptedProvider::new());
    let request = Request::builder()
        .method("GET")
        .uri("/api/endpoint")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "News analysis API endpoint");
}

#[tokio::test]
async fn test_malformed_body_returns_400_with_json_error() {
    let app = test_app(ScriptedProvider::new(), ScriptedProvider::new());
    let response = app.oneshot(post_body("this is not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Failed to process request");
}

#[tokio::test]
async fn test_full_html_analysis() {
    let app = test_app(scripted_general(), scripted_grounded());

    let html = r#"<html><head>
        <title>Foo Bar</title>
        <meta property="og:url" content="https://www.example-news.com/a" />
        <script>tracker()</script>
        </head><body><p>Story text</p></body></html>"#;
    let request_json = serde_json::json!({
        "content": html,
        "isHtml": true,
    });

    let response = app
        .oneshot(post_body(&request_json.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    // Article block: converted Markdown (fences stripped), title from
    // <title>, url from the og:url-derived domain.
    assert_eq!(body["article"]["content"], ARTICLE_MARKDOWN);
    assert_eq!(body["article"]["title"], "Foo Bar");
    assert_eq!(body["article"]["url"], "www.example-news.com");

    // Factuality: model label kept, side-channel citations appended after
    // the model's own sources.
    assert_eq!(body["factuality"]["article"]["confidence"], 0.82);
    assert_eq!(body["factuality"]["article"]["rating"], "Mostly Factual");
    assert_eq!(
        body["factuality"]["article"]["sources"],
        serde_json::json!([
            "https://primary.example",
            "https://cite-1.example",
            "https://cite-2.example"
        ])
    );
    assert_eq!(body["factuality"]["source"]["rating"], "Very Factual");

    assert_eq!(body["politicalLeaning"]["article"]["score"], 35.0);
    assert_eq!(body["politicalLeaning"]["article"]["category"], "Center-Left");
    assert_eq!(body["politicalLeaning"]["source"]["category"], "Centrist");

    assert_eq!(body["source"]["name"], "Example News");
    assert_eq!(body["source"]["reliability"], "Reliable");
    assert_eq!(body["source"]["bias"], "Unbiased");

    assert_eq!(body["sentiment"]["overall"]["score"], 0.3);
    assert_eq!(body["sentiment"]["entities"][1]["score"], -0.6);

    // The Markdown contains an image, so descriptions were fetched and
    // awaited before responding.
    assert_eq!(
        body["imageDescriptions"][0]["url"],
        "https://img.example/1.jpg"
    );
}

#[tokio::test]
async fn test_url_input_is_fetched_server_side() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/story"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(
                    "<html><head><title>Fetched Story</title></head><body>text</body></html>"
                        .as_bytes(),
                )
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let app = test_app(scripted_general(), scripted_grounded());
    let url = format!("{}/story", mock_server.uri());
    let request_json = serde_json::json!({
        "content": "",
        "isHtml": true,
        "isUrl": true,
        "url": url,
    });

    let response = app
        .oneshot(post_body(&request_json.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    // Title comes from the fetched HTML; the article url echoes the request.
    assert_eq!(body["article"]["title"], "Fetched Story");
    assert_eq!(body["article"]["url"], url);
}

#[tokio::test]
async fn test_fetch_error_surfaces_upstream_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let app = test_app(scripted_general(), scripted_grounded());
    let request_json = serde_json::json!({
        "content": "",
        "isHtml": true,
        "isUrl": true,
        "url": format!("{}/gone", mock_server.uri()),
    });

    let response = app
        .oneshot(post_body(&request_json.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Failed to fetch URL: 404 Not Found");
}

#[tokio::test]
async fn test_conversion_failure_is_400() {
    let general = ScriptedProvider::new().fail("converting an article");
    let app = test_app(general, scripted_grounded());
    let request_json = serde_json::json!({
        "content": "<p>some html</p>",
        "isHtml": true,
    });

    let response = app
        .oneshot(post_body(&request_json.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Failed to convert HTML to Markdown");
}

#[tokio::test]
async fn test_factuality_failure_is_500() {
    let grounded = ScriptedProvider::new()
        .fail("for factuality")
        .respond("political leaning", POLITICAL_JSON)
        .respond("credibility", CREDIBILITY_JSON);
    let app = test_app(scripted_general(), grounded);
    let request_json = serde_json::json!({
        "content": "Plain text article body.",
        "isHtml": false,
    });

    let response = app
        .oneshot(post_body(&request_json.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Failed to analyze factuality");
}

#[tokio::test]
async fn test_scoring_calls_fan_out_before_any_resolves() {
    let general = scripted_general();
    let timeline = general.timeline();
    let grounded = scripted_grounded().with_timeline(timeline.clone());
    let app = test_app(general, grounded);

    // Plain text: no conversion call, no images, exactly the four scoring
    // calls go through the fan-out.
    let request_json = serde_json::json!({
        "content": "Plain text article body.",
        "isHtml": false,
    });

    let response = app
        .oneshot(post_body(&request_json.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let timings = timeline.lock().unwrap();
    assert_eq!(timings.len(), 4);
    let latest_start = timings.iter().map(|timing| timing.started).max().unwrap();
    let earliest_finish = timings.iter().map(|timing| timing.finished).min().unwrap();
    assert!(
        latest_start < earliest_finish,
        "all scoring calls must be dispatched before any resolves"
    );
}
