//! Prompt construction for each analysis task.
//!
//! Builders only assemble strings: the content they embed is already
//! sanitized, and no validation or retrying happens here. Every scoring
//! prompt inlines an explicit schema example and ends with the shared
//! JSON-only directive so fence-stripping in the normalizer is the only
//! cleanup the response should ever need.

/// Shared closing directive for every prompt that must return JSON.
pub const JSON_ONLY: &str = r#"Only return the JSON, do not include any additional text or explanation.
Do not wrap the response in ``` code blocks."#;

/// Instructions for extracting an article from (possibly truncated) HTML and
/// converting it to Markdown.
pub fn markdown_conversion(html: &str) -> String {
    format!(
        r#"You have been tasked with extracting and converting an article from a potentially incomplete HTML document.
Your job is to perform a comprehensive extraction of the main article content from this HTML and convert it to well-formatted Markdown.

IMPORTANT INSTRUCTIONS:
1. Focus on identifying and extracting ALL main article content, even if the HTML appears incomplete
2. Look for content within article tags, main tags, or divs with class/id containing terms like "content", "article", "story", "body"
3. Extract ALL text content you can find related to the main article - DO NOT STOP EARLY
4. Include EVERY paragraph, heading, list, table, blockquote, and content element that appears to be part of the article
5. Preserve ALL images (convert to markdown format: ![alt text](image URL)) and their captions
6. Maintain formatting like bold, italic, underline, and links
7. Exclude navigation elements, headers, footers, sidebars, ads, and other non-article content
8. If the article appears to be truncated, note this at the end
9. Convert ALL headings to proper markdown format (# for h1, ## for h2, etc.)

Your goal is to produce complete, well-structured Markdown that contains the ENTIRE article content, including ALL paragraphs, sections, images, and formatted text.

~~~
{html}
~~~

Return ONLY the converted Markdown with no additional text, explanation, or commentary."#,
        html = html
    )
}

/// Sentiment scoring: one overall score plus per-entity scores, all in [-1, 1].
pub fn sentiment(article: &str) -> String {
    format!(
        r#"You have been tasked with analyzing the following article for sentiment.
Your job is to analyse the article and provide a sentiment score between -1 and 1,
with higher scores indicating more positive sentiment.

You should provide a sentiment score for the entire article, as well as individual
scores for any relevant entities (people, organizations, policies, events).

You should return the data in the following json format:
{{
    "overall_score": 0.5,
    "entities": [
        {{
            "name": "President Smith",
            "score": 0.7
        }},
        {{
            "name": "New Policy",
            "score": -0.5
        }}
    ]
}}

~~~
{article}
~~~

{json_only}"#,
        article = article,
        json_only = JSON_ONLY
    )
}

/// Factuality scoring for both the article and its publisher.
pub fn factuality(article: &str, source_name: &str, source_domain: &str) -> String {
    format!(
        r#"You have been tasked with analyzing an article and its publisher for factuality.
The article was published by {source_name} ({source_domain}).

Please examine the article for:
1. Verifiable claims and statements
2. Referenced sources or citations
3. Consistency with known facts
4. Presence of misleading or incorrect information
5. Use of reliable primary sources

Separately assess the publisher's overall track record for factual reporting.

You should return the data in the following json format:
{{
    "article": {{
        "rating": a number between 0 and 1 representing the factuality score, with higher values indicating more factual content,
        "ratingLabel": one of ["Very Factual", "Mostly Factual", "Mixed Factuality", "Somewhat Unfactual", "Not Factual"],
        "sources": an array of URLs or citations that support the factual claims in the article - find at least 3-5 sources if possible
    }},
    "source": {{
        "rating": a number between 0 and 1 representing the publisher's factuality track record,
        "ratingLabel": one of ["Very Factual", "Mostly Factual", "Mixed Factuality", "Somewhat Unfactual", "Not Factual"]
    }}
}}

~~~
{article}
~~~

{json_only}"#,
        article = article,
        source_name = source_name,
        source_domain = source_domain,
        json_only = JSON_ONLY
    )
}

/// Political-leaning scoring for both the article and its publisher.
pub fn political_leaning(article: &str, source_name: &str, source_domain: &str) -> String {
    format!(
        r#"You have been tasked with analyzing an article for political leaning.
The article was published by {source_name} ({source_domain}).
Your job is to carefully and objectively analyze the article's content, language,
framing of issues, and overall perspective to determine its position on the
political spectrum, and to separately assess the publisher's general leaning.

Please analyze the article for:
1. Word choice and framing that indicates political perspective
2. Which issues are emphasized and how they are presented
3. Treatment of different political groups, policies, or figures
4. Overall narrative and perspective on political matters
5. Any explicit or implicit bias toward particular ideologies

Provide political leaning scores on a scale from 0 to 100, where:
- 0-20: Far Left (strongly progressive/socialist perspective)
- 21-40: Center-Left (liberal/progressive perspective)
- 41-60: Centrist (balanced perspective with minimal bias)
- 61-80: Center-Right (conservative perspective)
- 81-100: Far Right (strongly conservative/nationalist perspective)

Return your analysis in the following JSON format:
{{
    "article": {{
        "score": a number between 0 and 100 indicating the political leaning of this article,
        "category": one of ["Far Left", "Center-Left", "Centrist", "Center-Right", "Far Right"],
        "reasoning": a brief explanation of why you assigned this score, highlighting key indicators in the text
    }},
    "source": {{
        "score": a number between 0 and 100 indicating the publisher's general political leaning,
        "category": one of ["Far Left", "Center-Left", "Centrist", "Center-Right", "Far Right"],
        "reasoning": a brief explanation of the publisher's typical leaning
    }}
}}

~~~
{article}
~~~

{json_only}"#,
        article = article,
        source_name = source_name,
        source_domain = source_domain,
        json_only = JSON_ONLY
    )
}

/// Source credibility: reputation of the publishing outlet itself.
pub fn source_credibility(article: &str, source_name: &str, source_domain: &str) -> String {
    format!(
        r#"You have been tasked with assessing the credibility of the news outlet {source_name} ({source_domain}),
which published the article below. Research the outlet's reputation, editorial standards,
history of corrections, and known bias.

You should return the data in the following json format:
{{
    "name": the outlet's common name,
    "url": the outlet's primary domain,
    "reliability": one of ["Very Reliable", "Reliable", "Mostly Reliable", "Mixed Reliability", "Somewhat Unreliable", "Unreliable"],
    "bias": one of ["None", "Biased", "Unbiased"],
    "credibility": a number between 0 and 1 representing overall credibility,
    "reasoning": a brief explanation of the assessment
}}

~~~
{article}
~~~

{json_only}"#,
        article = article,
        source_name = source_name,
        source_domain = source_domain,
        json_only = JSON_ONLY
    )
}

/// Descriptions for the images referenced by the converted Markdown.
pub fn image_descriptions(image_urls: &[String]) -> String {
    let urls = image_urls.join("\n");
    format!(
        r#"You have been given a list of image URLs that appear in a news article.
For each URL, provide a one-sentence description of what the image most likely
depicts based on the URL, filename, and any path context.

You should return the data in the following json format:
[
    {{
        "url": "https://example.com/images/photo.jpg",
        "description": "A photo accompanying the article."
    }}
]

~~~
{urls}
~~~

{json_only}"#,
        urls = urls,
        json_only = JSON_ONLY
    )
}
