use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use copyfix_service_cli::{
    ai::split_tips_intro, find_tone, heuristics, scrape::guess_components, GeneratedCopy,
    SiteCopy, TONE_OPTIONS,
};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzePayload {
    pub url: String,
    pub tone: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub original: SiteCopy,
    pub improved: GeneratedCopy,
    pub mistakes: Vec<&'static str>,
    /// Lead-in line the model put before the numbered tips, if any.
    pub tips_intro: Option<String>,
    pub tips: Vec<String>,
    /// Plain-text block the page offers as improved_website_copy.txt.
    pub download: String,
}

/// GET /api/tones
pub async fn tone_options() -> impl IntoResponse {
    Json(json!({ "tones": TONE_OPTIONS }))
}

/// POST /api/analyze
///
/// Runs the whole pipeline inline: fetch, guess, heuristics, rewrite,
/// tips. A new request recomputes everything.
pub async fn analyze_site(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AnalyzePayload>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let tone = find_tone(&payload.tone).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": format!("Unknown tone '{}'", payload.tone) })),
        )
    })?;

    tracing::info!(url = %payload.url, tone, "analyzing site");

    let text = state.scraper.fetch_text(&payload.url).await;
    if text.is_error() {
        tracing::warn!(url = %payload.url, "scrape failed");
        return Err((StatusCode::BAD_GATEWAY, Json(json!({ "message": text.flat }))));
    }

    let original = guess_components(&text.lines);
    let mistakes = heuristics::copy_mistakes(&text.lines);

    let improved = state
        .generator
        .improve_copy(&text.flat, tone)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "copy rewrite failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "message": e.to_string() })),
            )
        })?;

    // Tips failures degrade to an inline warning so the rest still renders.
    let tips = match state.generator.improvement_tips(&text.flat, tone).await {
        Ok(tips) => tips,
        Err(e) => vec![format!("⚠️ Could not generate suggestions: {}", e)],
    };
    let (tips_intro, tips) = split_tips_intro(tips);

    let download = improved.improved_block();
    Ok((
        StatusCode::OK,
        Json(AnalyzeResponse {
            original,
            improved,
            mistakes,
            tips_intro,
            tips,
            download,
        }),
    ))
}
