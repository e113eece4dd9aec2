// src/profile.rs
// Profile snapshot types mirroring the KnowingMe JSON the app ships with.
// The server never stores a profile; every request carries its own copy.

use serde::{Deserialize, Serialize};

/// Theme used when the profile carries neither `coreTheme` nor `theme`.
pub const DEFAULT_THEME: &str = "Focusing on both creative and tangible solutions";

// Digest caps keep the forwarded prompt a bounded size. Truncation always
// takes the prefix of each list.
const KEY_TRAIT_CAP: usize = 6;
const ANCHOR_CAP: usize = 5;
const CAUTION_CAP: usize = 3;

/// Read-only personality snapshot supplied by the caller per request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSummary {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub core_theme: Option<String>,
    pub theme: Option<String>,
    pub motivations: Option<String>,
    pub abilities: Option<String>,
    pub personality: Option<String>,
    pub key_traits: Vec<KeyTrait>,
    pub leadership_anchors: Vec<String>,
    pub caution_areas: Vec<CautionArea>,
    pub education_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyTrait {
    #[serde(rename = "trait")]
    pub trait_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CautionArea {
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The trimmed subset of the profile forwarded to the model as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDigest {
    pub core_theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
    pub key_traits: Vec<KeyTrait>,
    pub leadership_anchors: Vec<String>,
    pub caution_areas: Vec<CautionArea>,
    pub education_keys: Vec<String>,
}

impl ProfileSummary {
    /// First non-blank of `coreTheme` then `theme`, else the fixed default.
    pub fn resolve_theme(&self) -> &str {
        first_filled(&[&self.core_theme, &self.theme]).unwrap_or(DEFAULT_THEME)
    }

    /// First non-blank of `name` then `fullName`, else "Unknown".
    pub fn display_name(&self) -> &str {
        first_filled(&[&self.name, &self.full_name]).unwrap_or("Unknown")
    }

    /// Builds the trimmed digest: free-text fields copied verbatim, lists
    /// capped to their fixed prefixes.
    pub fn digest(&self) -> ProfileDigest {
        ProfileDigest {
            core_theme: self.resolve_theme().to_string(),
            motivations: self.motivations.clone(),
            abilities: self.abilities.clone(),
            personality: self.personality.clone(),
            key_traits: self.key_traits.iter().take(KEY_TRAIT_CAP).cloned().collect(),
            leadership_anchors: self
                .leadership_anchors
                .iter()
                .take(ANCHOR_CAP)
                .cloned()
                .collect(),
            caution_areas: self.caution_areas.iter().take(CAUTION_CAP).cloned().collect(),
            education_keys: self.education_keys.clone(),
        }
    }
}

fn first_filled<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|v| v.as_deref())
        .find(|s| !s.trim().is_empty())
}
