//! Prompt Debugger binary entry point.
//!
//! Reads one analysis request as JSON from stdin and writes the diagnosis
//! as JSON to stdout. All logs go to stderr.
//!
//! Coverage is excluded because the main function needs live API keys.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Read;

use prompt_debugger::analysis::{AnalysisOrchestrator, AnalysisRequest};
use prompt_debugger::config::{Config, DEFAULT_LOG_LEVEL};
use prompt_debugger::error::AppError;
use prompt_debugger::session::DebugSession;
use tracing_subscriber::EnvFilter;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Load config first so LOG_LEVEL from .env applies
    let config = Config::from_env();
    let filter = config
        .as_ref()
        .map_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL), Config::log_filter);

    // Initialize logging to stderr only (stdout carries the diagnosis)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let result = match &config {
        Ok(config) => run(config).await,
        Err(e) => Err(e.clone().into()),
    };
    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(config: &Config) -> Result<(), AppError> {
    tracing::info!(
        providers = ?config.configured_providers(),
        timeout_ms = config.request_timeout_ms,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| AppError::Input {
            message: format!("failed to read stdin: {e}"),
        })?;
    let request: AnalysisRequest = serde_json::from_str(&input).map_err(|e| AppError::Input {
        message: format!("request is not a valid analysis request: {e}"),
    })?;

    let mut session = DebugSession::new(AnalysisOrchestrator::from_config(config)?);
    let outcome = session.submit(request).await?;
    if !outcome.is_complete() {
        tracing::warn!(status = ?outcome.status, "Analysis degraded");
    }

    let output = serde_json::to_string_pretty(&outcome.diagnosis).map_err(|e| AppError::Output {
        message: format!("failed to encode diagnosis: {e}"),
    })?;
    println!("{output}");
    Ok(())
}
