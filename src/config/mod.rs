// src/config/mod.rs
// All tunables load from the environment (.env supported). The API key is
// deliberately not here: it is read per request by the OpenAI client so its
// absence surfaces as a request error, not a boot failure.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct CoachConfig {
    // ── OpenAI Configuration
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with inline comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            clean_val.parse::<T>().unwrap_or(default)
        }
        Err(_) => default,
    }
}

impl CoachConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com/v1".to_string()),
            model: env_var_or("COACH_MODEL", "gpt-4o-mini".to_string()),
            temperature: env_var_or("COACH_TEMPERATURE", 0.6),
            host: env_var_or("COACH_HOST", "0.0.0.0".to_string()),
            port: env_var_or("COACH_PORT", 8787),
            log_level: env_var_or("COACH_LOG_LEVEL", "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<CoachConfig> = Lazy::new(CoachConfig::from_env);
