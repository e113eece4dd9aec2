// src/prompt/mod.rs
// System-prompt assembly for coach replies.

pub mod builder;

pub use builder::build_system_prompt;

use serde::{Deserialize, Serialize};

/// Reply formatting requested by the client. A structured reply opens a
/// conversation; a free reply continues one. The caller decides which turn
/// this is; the server never infers conversation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    Structured,
    Free,
}

impl ResponseMode {
    /// Maps the caller-supplied mode string. Only the exact value "free"
    /// selects free mode; anything else, including absence, is structured.
    pub fn from_request(value: Option<&str>) -> Self {
        match value {
            Some("free") => ResponseMode::Free,
            _ => ResponseMode::Structured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMode::Structured => "structured",
            ResponseMode::Free => "free",
        }
    }
}

impl std::fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_free_selects_free_mode() {
        assert_eq!(ResponseMode::from_request(Some("free")), ResponseMode::Free);
        assert_eq!(ResponseMode::from_request(None), ResponseMode::Structured);
        assert_eq!(
            ResponseMode::from_request(Some("FREE")),
            ResponseMode::Structured
        );
        assert_eq!(
            ResponseMode::from_request(Some("casual")),
            ResponseMode::Structured
        );
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ResponseMode::Structured).unwrap(),
            "\"structured\""
        );
        assert_eq!(serde_json::to_string(&ResponseMode::Free).unwrap(), "\"free\"");
    }
}
