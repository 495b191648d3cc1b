//! Integration tests for the prompt debugger.
//!
//! These tests verify end-to-end workflows including:
//! - Session submit, history, and replay
//! - Real adapters against mocked backends
//! - Validation before any backend call

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use prompt_debugger::analysis::{
    AnalysisOrchestrator, AnalysisRequest, BotType, ConversationTurn, Diagnosis,
};
use prompt_debugger::error::{ProviderError, ValidationError};
use prompt_debugger::prompts::render;
use prompt_debugger::providers::{
    AnthropicAdapter, ClientConfig, ModelCatalog, ModelInfo, OpenAiAdapter, Provider,
};
use prompt_debugger::session::DebugSession;
use prompt_debugger::traits::{JsonMode, ProviderAdapter, ProviderCall};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

/// Adapter that records calls and answers with a fixed response.
struct SpyAdapter {
    provider: Provider,
    response: Result<String, ProviderError>,
    calls: AtomicUsize,
    last_call: Mutex<Option<ProviderCall>>,
}

impl SpyAdapter {
    fn new(provider: Provider, response: Result<String, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            provider,
            response,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_call(&self) -> Option<ProviderCall> {
        self.last_call.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl ProviderAdapter for SpyAdapter {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn invoke(&self, call: ProviderCall) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().expect("lock poisoned") = Some(call);
        self.response.clone()
    }
}

fn m1_catalog() -> ModelCatalog {
    ModelCatalog::empty().with_model(Provider::Anthropic, ModelInfo::new("m1", "Model One"))
}

fn x_request(provider: Provider, model: &str) -> AnalysisRequest {
    AnalysisRequest::new(provider, model)
        .with_system_prompt("x")
        .with_behavioral_guidelines("x")
        .with_defective_user_message("x")
        .with_defective_agent_response("x")
        .with_defective_description("x")
        .with_agent_interpretation("x")
        .with_expected_behavior("x")
}

fn realistic_request(provider: Provider, model: &str) -> AnalysisRequest {
    let mut request = AnalysisRequest::new(provider, model)
        .with_bot_type(BotType::Text)
        .with_system_prompt("You are a support agent for an airline. Be concise.")
        .with_behavioral_guidelines("1. Never promise refunds.\n2. Escalate billing disputes.")
        .with_defective_user_message("My flight was cancelled, do I get my money back?")
        .with_defective_agent_response("Yes, you'll get a full refund within 24 hours.")
        .with_defective_description("The agent promised a refund it cannot grant.")
        .with_agent_interpretation("Reassure the customer at all costs.")
        .with_expected_behavior("Explain the refund policy and offer escalation.");
    request.push_exchange("Hi", "Hello! How can I help?");
    request.push_exchange("I have a question about flight AB123", "");
    request
}

fn diagnosis_json() -> serde_json::Value {
    json!({
        "error_source_analysis": {
            "system_prompt_error": "The system prompt never mentions refund limits.",
            "behavioral_guidelines_error": "Guideline 1 is not reinforced with an alternative action."
        },
        "prompt_suggestions": {
            "system_prompt_modifications": "Add: refunds are decided by the billing team only.",
            "behavioral_guidelines_modifications": "Add: when asked about refunds, explain the policy and escalate."
        },
        "agent_interpretation_change": "The agent would defer refund decisions instead of promising them."
    })
}

fn all_none() -> String {
    json!({
        "error_source_analysis": {"system_prompt_error": "none", "behavioral_guidelines_error": "none"},
        "prompt_suggestions": {"system_prompt_modifications": "none", "behavioral_guidelines_modifications": "none"},
        "agent_interpretation_change": "none"
    })
    .to_string()
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[tokio::test]
async fn test_all_none_scenario() {
    let spy = SpyAdapter::new(Provider::Anthropic, Ok(all_none()));
    let orchestrator = AnalysisOrchestrator::new()
        .with_catalog(m1_catalog())
        .with_adapter(spy.clone());

    let diagnosis = orchestrator
        .analyze(&x_request(Provider::Anthropic, "m1"))
        .await
        .unwrap();

    assert_eq!(diagnosis.leaves(), ["none"; 5]);
    assert_eq!(spy.calls(), 1);
}

#[tokio::test]
async fn test_not_json_scenario_keeps_history() {
    let spy = SpyAdapter::new(Provider::Anthropic, Ok("not json".to_string()));
    let orchestrator = AnalysisOrchestrator::new()
        .with_catalog(m1_catalog())
        .with_adapter(spy);
    let mut session = DebugSession::new(orchestrator);

    let request = x_request(Provider::Anthropic, "m1");
    let outcome = session.submit(request.clone()).await.unwrap();

    assert_eq!(outcome.diagnosis, Diagnosis::fallback());
    assert!(!outcome.is_complete());
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().get(0).unwrap().request, request);
}

#[tokio::test]
async fn test_empty_field_rejected_before_dispatch() {
    for field in [
        "system_prompt",
        "behavioral_guidelines",
        "defective_user_message",
        "defective_agent_response",
        "defective_description",
        "agent_interpretation",
        "expected_behavior",
    ] {
        let spy = SpyAdapter::new(Provider::Anthropic, Ok(all_none()));
        let orchestrator = AnalysisOrchestrator::new()
            .with_catalog(m1_catalog())
            .with_adapter(spy.clone());
        let mut session = DebugSession::new(orchestrator);

        let mut value = serde_json::to_value(x_request(Provider::Anthropic, "m1")).unwrap();
        value[field] = json!("");
        let request: AnalysisRequest = serde_json::from_value(value).unwrap();

        let err = session.submit(request).await.unwrap_err();

        assert_eq!(
            err,
            ValidationError::MissingField {
                field: field.to_string()
            }
        );
        assert_eq!(spy.calls(), 0, "adapter called for blank {field}");
        assert!(session.history().is_empty());
    }
}

#[tokio::test]
async fn test_every_outcome_yields_non_empty_leaves() {
    let responses = [
        Ok(diagnosis_json().to_string()),
        Ok("```json\n{\"agent_interpretation_change\": \"x\"}\n```".to_string()),
        Ok("{\"error_source_analysis\": {\"system_prompt_error\": ".to_string()),
        Ok("Sure! {\"agent_interpretation_change\": \"x\"}".to_string()),
        Err(ProviderError::Timeout { timeout_ms: 60_000 }),
        Err(ProviderError::NoTextPayload {
            provider: Provider::Anthropic,
        }),
    ];

    for response in responses {
        let spy = SpyAdapter::new(Provider::Anthropic, response);
        let orchestrator = AnalysisOrchestrator::new()
            .with_catalog(m1_catalog())
            .with_adapter(spy);

        let diagnosis = orchestrator
            .analyze(&x_request(Provider::Anthropic, "m1"))
            .await
            .unwrap();

        assert!(diagnosis.leaves().iter().all(|l| !l.trim().is_empty()));
    }
}

#[tokio::test]
async fn test_history_dedupes_by_value() {
    let spy = SpyAdapter::new(Provider::OpenAi, Ok(all_none()));
    let mut session = DebugSession::new(AnalysisOrchestrator::new().with_adapter(spy.clone()));

    session.submit(x_request(Provider::OpenAi, "gpt-4o")).await.unwrap();
    session.submit(x_request(Provider::OpenAi, "gpt-4o")).await.unwrap();
    assert_eq!(session.history().len(), 1);

    session.submit(x_request(Provider::OpenAi, "gpt-4")).await.unwrap();
    assert_eq!(session.history().len(), 2);

    // Duplicates are still analyzed
    assert_eq!(spy.calls(), 3);
}

#[tokio::test]
async fn test_replay_switch_provider_and_resubmit() {
    let anthropic = SpyAdapter::new(Provider::Anthropic, Ok(all_none()));
    let openai = SpyAdapter::new(Provider::OpenAi, Ok(diagnosis_json().to_string()));
    let orchestrator = AnalysisOrchestrator::new()
        .with_adapter(anthropic.clone())
        .with_adapter(openai.clone());
    let mut session = DebugSession::new(orchestrator);

    session
        .submit(realistic_request(Provider::Anthropic, "claude-3-opus-20240229"))
        .await
        .unwrap();

    let replayed = session
        .replay(0)
        .unwrap()
        .with_model(Provider::OpenAi, "gpt-4-0125-preview");
    let outcome = session.submit(replayed).await.unwrap();

    assert_eq!(
        serde_json::to_value(&outcome.diagnosis).unwrap(),
        diagnosis_json()
    );
    assert_eq!(anthropic.calls(), 1);
    assert_eq!(openai.calls(), 1);
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        openai.last_call().unwrap().json_mode,
        JsonMode::Native
    );
    assert_eq!(
        anthropic.last_call().unwrap().json_mode,
        JsonMode::Instructed
    );
}

#[tokio::test]
async fn test_push_exchange_history_reaches_prompt() {
    let spy = SpyAdapter::new(Provider::OpenAi, Ok(all_none()));
    let orchestrator = AnalysisOrchestrator::new().with_adapter(spy.clone());

    let request = realistic_request(Provider::OpenAi, "gpt-4o");
    assert_eq!(
        request.conversation_history,
        vec![
            ConversationTurn::user("Hi"),
            ConversationTurn::assistant("Hello! How can I help?"),
            ConversationTurn::user("I have a question about flight AB123"),
        ]
    );

    orchestrator.analyze(&request).await.unwrap();

    let call = spy.last_call().unwrap();
    assert_eq!(call.prompt, render(&request));
    assert!(call.prompt.contains("\"content\": \"Hello! How can I help?\""));
}

// ============================================================================
// Real Adapter Tests
// ============================================================================

#[tokio::test]
async fn test_round_trip_through_anthropic_adapter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": diagnosis_json().to_string()}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter =
        AnthropicAdapter::new("sk-ant-test", ClientConfig::anthropic().with_base_url(server.uri()))
            .unwrap();
    let mut session = DebugSession::new(AnalysisOrchestrator::new().with_adapter(Arc::new(adapter)));

    let outcome = session
        .submit(realistic_request(Provider::Anthropic, "claude-3-5-sonnet-latest"))
        .await
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(
        serde_json::to_value(&outcome.diagnosis).unwrap(),
        diagnosis_json()
    );
}

#[tokio::test]
async fn test_round_trip_through_openai_adapter_with_code_fence() {
    let server = MockServer::start().await;
    let fenced = format!("```json\n{}\n```", diagnosis_json());
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": fenced}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter =
        OpenAiAdapter::new("sk-test", ClientConfig::openai().with_base_url(server.uri())).unwrap();
    let orchestrator = AnalysisOrchestrator::new().with_adapter(Arc::new(adapter));

    let diagnosis = orchestrator
        .analyze(&realistic_request(Provider::OpenAi, "gpt-4"))
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&diagnosis).unwrap(), diagnosis_json());
}

#[tokio::test]
async fn test_backend_auth_failure_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let adapter =
        OpenAiAdapter::new("sk-bad", ClientConfig::openai().with_base_url(server.uri())).unwrap();
    let orchestrator = AnalysisOrchestrator::new().with_adapter(Arc::new(adapter));

    let outcome = orchestrator
        .analyze_outcome(&x_request(Provider::OpenAi, "gpt-4o"))
        .await
        .unwrap();

    let error = ProviderError::AuthenticationFailed {
        provider: Provider::OpenAi,
    };
    assert_eq!(outcome.diagnosis, Diagnosis::from_failure(&error));
    assert!(outcome
        .diagnosis
        .error_source_analysis
        .system_prompt_error
        .contains(&error.to_string()));
}
