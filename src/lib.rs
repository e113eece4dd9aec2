// src/lib.rs

pub mod api;
pub mod config;
pub mod llm;
pub mod persona;
pub mod profile;
pub mod prompt;
pub mod state;
