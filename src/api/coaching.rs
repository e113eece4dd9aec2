// src/api/coaching.rs
// Profile-driven pickers the home screen offers next to the ask box:
// "expand a skill" and "challenge of the day". Randomness is injected so
// the selection logic stays deterministic under test.

use axum::Json;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::profile::ProfileSummary;

#[derive(Debug, Deserialize)]
pub struct PickerRequest {
    #[serde(default)]
    pub profile: Option<ProfileSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpandedSkill {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct DailyChallenge {
    pub challenge: String,
}

/// Picks one key trait at random and expands it into a short reflection.
pub fn expand_skill<R: Rng + ?Sized>(profile: &ProfileSummary, rng: &mut R) -> ExpandedSkill {
    match profile.key_traits.choose(rng) {
        Some(t) => ExpandedSkill {
            title: t.trait_name.clone(),
            body: t
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| {
                    format!(
                        "Consider where \"{}\" shows up in your week. Note one concrete behavior that demonstrates it.",
                        t.trait_name
                    )
                }),
        },
        None => ExpandedSkill {
            title: "No traits found".to_string(),
            body: "Your profile doesn't include keyTraits yet. Add keyTraits[] with { trait, description } objects.".to_string(),
        },
    }
}

/// Builds a one-day challenge from the profile, preferring leadership
/// anchors, then education keys, then caution areas, then key traits.
pub fn daily_challenge<R: Rng + ?Sized>(profile: &ProfileSummary, rng: &mut R) -> String {
    if let Some(anchor) = profile.leadership_anchors.choose(rng) {
        return format!(
            "Demonstrate \"{anchor}\" today: choose one decision or meeting and make a clear move that reflects it. Block 15 minutes to prep."
        );
    }
    if let Some(edu) = profile.education_keys.choose(rng) {
        return format!(
            "Practice \"{edu}\": identify one moment today to apply it intentionally. Write what you'll do in 1 sentence and schedule it."
        );
    }
    if let Some(caution) = profile.caution_areas.choose(rng) {
        return format!(
            "Balance your caution area (\"{}\"): define a small guardrail you'll use in the next meeting, then reflect for 2 minutes after.",
            caution.area
        );
    }
    if let Some(t) = profile.key_traits.choose(rng) {
        return format!(
            "Apply \"{}\" on a live task: spend 15 minutes using it to move something forward, then capture one takeaway.",
            t.trait_name
        );
    }
    "Pick one small improvement you can ship before noon. Make it visible, even if rough.".to_string()
}

pub async fn expand_skill_handler(
    Json(request): Json<PickerRequest>,
) -> ApiResult<Json<ExpandedSkill>> {
    let profile = request
        .profile
        .ok_or_else(|| ApiError::bad_request("Missing 'profile'"))?;
    Ok(Json(expand_skill(&profile, &mut rand::rng())))
}

pub async fn daily_challenge_handler(
    Json(request): Json<PickerRequest>,
) -> ApiResult<Json<DailyChallenge>> {
    let profile = request
        .profile
        .ok_or_else(|| ApiError::bad_request("Missing 'profile'"))?;
    Ok(Json(DailyChallenge {
        challenge: daily_challenge(&profile, &mut rand::rng()),
    }))
}
