// src/api/mod.rs
// HTTP surface: advice endpoint, profile-driven pickers, error envelope,
// and router composition.

pub mod advice;
pub mod coaching;
pub mod error;
pub mod router;

pub use error::{ApiError, ApiResult};

/// Protocol tag echoed in every advice response and stamped on the
/// `x-api-version` header. Bump on deploys that change the prompt contract.
pub const PROTOCOL_VERSION: &str = "ask-coach:2026-08-14-01";
