//! Prompt Debugger
//!
//! Diagnoses why a conversational agent produced an unwanted response by
//! sending its configuration, transcript, and the defective exchange to an
//! LLM analyzer and reading back a structured diagnosis.
//!
//! # Features
//!
//! - Two analyzer backends: Anthropic Messages and OpenAI Chat Completions
//! - JSON-only output enforced by prompt wording or native JSON mode
//! - Strict diagnosis extraction with schema-complete fallbacks
//! - In-memory, deduplicated request history with replay
//!
//! # Quick Start
//!
//! ```bash
//! OPENAI_API_KEY=sk-xxx ./prompt-debugger < request.json
//! ```
//!
//! # Architecture
//!
//! ```text
//! AnalysisRequest ──▶ prompts::render ──▶ ProviderAdapter ──▶ Anthropic / OpenAI
//!                                                │
//!       Diagnosis ◀── analysis::extract ◀────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod history;
pub mod prompts;
pub mod providers;
pub mod session;
pub mod traits;

mod text;

#[cfg(test)]
mod test_utils;
