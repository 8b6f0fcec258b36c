// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter implementing the [`InsightProvider`] port trait.
//!
//! Sends a single `generateContent` request per insight and returns the
//! first text part of the first candidate.
//!
//! # Credentials
//!
//! The API key is read from `GEMINI_API_KEY`, then `API_KEY`. Without a key
//! the provider fails fast with [`InsightError::MissingCredential`] and never
//! touches the network.
//!
//! [`InsightProvider`]: crate::application::port::InsightProvider

use crate::application::port::insight::{InsightError, InsightProvider};
use crate::config::InsightConfig;
use crate::domain::language::Language;
use crate::domain::menorah::Day;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

const API_KEY_HEADER: &str = "x-goog-api-key";

const USER_AGENT: &str = concat!("IcedMenorah/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateRequest {
    fn for_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

// =============================================================================
// Prompt and response handling
// =============================================================================

/// Builds the instruction sent to the model.
#[must_use]
pub fn build_prompt(day: Day, language: Language) -> String {
    format!(
        "You are a warm, learned rabbi. Give one short, uplifting sentence \
         (a spiritual thought or a historical fact) for night {day} of Hanukkah. \
         Answer only in {lang}. Reply with the sentence alone, without \
         introductions or quotation marks.",
        lang = language.english_name(),
    )
}

/// Extracts the insight text from a raw `generateContent` response body.
pub fn parse_response(body: &str) -> Result<String, InsightError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| InsightError::RemoteCallFailure(format!("invalid response: {e}")))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().find_map(|part| part.text))
        .map(|text| text.trim().trim_matches('"').trim().to_string())
        .unwrap_or_default();

    if text.is_empty() {
        Err(InsightError::EmptyResponse)
    } else {
        Ok(text)
    }
}

/// Reads the first non-blank API key from [`API_KEY_VARS`].
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

// =============================================================================
// GeminiInsightProvider
// =============================================================================

/// Builds the shared HTTP client with the request timeout applied.
fn build_client(timeout: Duration) -> Result<reqwest::Client, InsightError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| InsightError::RemoteCallFailure(format!("HTTP client setup: {e}")))
}

/// Insight provider backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiInsightProvider {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: Result<reqwest::Client, InsightError>,
}

impl GeminiInsightProvider {
    /// Creates a provider with an explicit (possibly absent) key.
    #[must_use]
    pub fn new(config: &InsightConfig, api_key: Option<String>) -> Self {
        Self {
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            model: config.model().to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client: build_client(config.timeout()),
        }
    }

    /// Creates a provider whose key comes from the environment.
    #[must_use]
    pub fn from_env(config: &InsightConfig) -> Self {
        Self::new(config, api_key_from_env())
    }

    /// Returns whether a key is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the `generateContent` call.
    #[must_use]
    pub fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl InsightProvider for GeminiInsightProvider {
    fn daily_insight(
        &self,
        day: Day,
        language: Language,
    ) -> BoxFuture<'static, Result<String, InsightError>> {
        let Some(api_key) = self.api_key.clone() else {
            return Box::pin(async { Err(InsightError::MissingCredential) });
        };
        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(error) => {
                let error = error.clone();
                return Box::pin(async move { Err(error) });
            }
        };
        let url = self.request_url();
        let request = GenerateRequest::for_prompt(build_prompt(day, language));

        Box::pin(async move {
            let response = client
                .post(&url)
                .header(API_KEY_HEADER, api_key)
                .json(&request)
                .send()
                .await
                .map_err(|e| InsightError::RemoteCallFailure(e.to_string()))?;

            if !response.status().is_success() {
                return Err(InsightError::RemoteCallFailure(format!(
                    "HTTP status: {}",
                    response.status()
                )));
            }

            let body = response
                .text()
                .await
                .map_err(|e| InsightError::RemoteCallFailure(e.to_string()))?;
            parse_response(&body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_night_and_language() {
        let prompt = build_prompt(Day::new(6).expect("valid day"), Language::Azerbaijani);
        assert!(prompt.contains("night 6"));
        assert!(prompt.contains("Azerbaijani"));
    }

    #[test]
    fn parse_response_takes_first_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  \"Every flame adds light.\"\n"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        assert_eq!(parse_response(body), Ok("Every flame adds light.".to_string()));
    }

    #[test]
    fn parse_response_skips_parts_without_text() {
        let body = r#"{"candidates": [{"content": {"parts": [{}, {"text": "second"}]}}]}"#;
        assert_eq!(parse_response(body), Ok("second".to_string()));
    }

    #[test]
    fn parse_response_empty_is_an_error() {
        assert_eq!(parse_response(r#"{"candidates": []}"#), Err(InsightError::EmptyResponse));
        assert_eq!(
            parse_response(r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#),
            Err(InsightError::EmptyResponse)
        );
        // Blocked prompts come back without candidates at all.
        assert_eq!(
            parse_response(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#),
            Err(InsightError::EmptyResponse)
        );
    }

    #[test]
    fn parse_response_rejects_garbage() {
        assert!(matches!(
            parse_response("<html>502</html>"),
            Err(InsightError::RemoteCallFailure(_))
        ));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateRequest::for_prompt("hi".into()))
            .expect("serializable");
        assert_eq!(body, serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]}));
    }

    #[test]
    fn request_url_uses_config() {
        let provider = GeminiInsightProvider::new(&InsightConfig::default(), Some("k".into()));
        assert_eq!(
            provider.request_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn client_is_built_once_and_shared() {
        let provider = GeminiInsightProvider::new(&InsightConfig::default(), Some("k".into()));
        assert!(provider.client.is_ok());

        let copy = provider.clone();
        assert!(copy.client.is_ok());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let provider = GeminiInsightProvider::new(&InsightConfig::default(), Some("  ".into()));
        assert!(!provider.has_credential());
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let provider = GeminiInsightProvider::new(&InsightConfig::default(), None);
        let result = provider.daily_insight(Day::FIRST, Language::English).await;
        assert_eq!(result, Err(InsightError::MissingCredential));
    }
}
