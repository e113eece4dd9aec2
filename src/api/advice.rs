// src/api/advice.rs
// The /advice endpoint: validate, digest the profile, compose the persona
// prompt, make one collaborator call, relay the answer.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::PROTOCOL_VERSION;
use crate::api::error::{ApiError, ApiResult};
use crate::persona::CoachPersona;
use crate::profile::ProfileSummary;
use crate::prompt::{ResponseMode, build_system_prompt};
use crate::state::AppState;

/// How much of the composed instruction is echoed back for diagnostics.
const SYSTEM_SNIPPET_LEN: usize = 120;

/// Placeholder when the upstream answers without usable text.
const NO_ANSWER: &str = "No answer generated.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskCoachRequest {
    #[serde(default)]
    pub question: Option<String>,
    // Optional in the wire type so a missing profile is a 400, not a
    // deserialization failure.
    #[serde(default)]
    pub profile: Option<ProfileSummary>,
    #[serde(default)]
    pub persona_id: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskCoachResponse {
    pub answer: String,
    pub version: String,
    pub mode: ResponseMode,
    pub system_snippet: String,
}

pub async fn ask_coach(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskCoachRequest>,
) -> ApiResult<Json<AskCoachResponse>> {
    let question = request.question.as_deref().map(str::trim).unwrap_or("");
    if question.is_empty() {
        return Err(ApiError::bad_request("Missing 'question' or 'profile'"));
    }
    let profile: &ProfileSummary = request
        .profile
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("Missing 'question' or 'profile'"))?;

    let theme = profile.resolve_theme();
    let digest = profile.digest();
    let mode = ResponseMode::from_request(request.mode.as_deref());
    let persona = CoachPersona::lookup(request.persona_id.as_deref());

    let system_prompt = build_system_prompt(theme, persona, mode);
    let digest_json = serde_json::to_string(&digest)
        .map_err(|e| ApiError::internal(format!("failed to serialize profile digest: {e}")))?;
    let user_content = format!("Profile (JSON): {digest_json}\n\nQuestion: {question}");

    info!(
        client = profile.display_name(),
        persona = %persona,
        style = persona.label(),
        mode = %mode,
        "advice request"
    );

    let answer = state
        .provider
        .generate(&system_prompt, &user_content)
        .await?
        .unwrap_or_else(|| NO_ANSWER.to_string());

    let system_snippet: String = system_prompt.chars().take(SYSTEM_SNIPPET_LEN).collect();

    Ok(Json(AskCoachResponse {
        answer,
        version: PROTOCOL_VERSION.to_string(),
        mode,
        system_snippet,
    }))
}

/// Explicit preflight response so CORS probes from the Expo web client get
/// the 204 they expect.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
