//! Gemini judge over the `generateContent` REST endpoint
//!
//! The request asks for a JSON response (`responseMimeType`) holding a
//! `decision` of `KEEP` or `DELETE` and a short `reason`.

use super::prompt::build_prompt;
use super::rate_limit::Pacer;
use super::traits::Judge;
use crate::config::{AccountConfig, AuditConfig, CriteriaConfig, SecretString};
use crate::domain::{AuditError, Decision, JudgeError, Record, Result, Verdict};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Judge backed by the Gemini API
pub struct GeminiJudge {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    account: AccountConfig,
    criteria: CriteriaConfig,
    pacer: Pacer,
}

impl GeminiJudge {
    /// Build a judge from the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Configuration`] if the API key or account
    /// username is missing, or if the HTTP client cannot be built.
    pub fn new(config: &AuditConfig) -> Result<Self> {
        let api_key = config
            .gemini
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().is_blank())
            .ok_or_else(|| {
                AuditError::Configuration(
                    "Gemini API key is not set (gemini.api_key or GEMINI_API_KEY)".to_string(),
                )
            })?;

        if config.account.username.trim().is_empty() {
            return Err(AuditError::Configuration(
                "Account username is not set (account.username or X_USERNAME)".to_string(),
            ));
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.gemini.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AuditError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.gemini.base_url.trim_end_matches('/'),
            config.gemini.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
            model: config.gemini.model.clone(),
            account: config.account.clone(),
            criteria: config.criteria.clone(),
            pacer: Pacer::from_secs_f64(config.gemini.rate_limit_seconds),
        })
    }

    /// Full URL of the `generateContent` call
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn generate(&self, prompt: String) -> std::result::Result<String, JudgeError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.expose_secret().as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| JudgeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JudgeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| JudgeError::InvalidResponse(format!("malformed response body: {e}")))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(JudgeError::EmptyResponse)
    }
}

#[async_trait]
impl Judge for GeminiJudge {
    async fn evaluate(&self, record: &Record) -> std::result::Result<Decision, JudgeError> {
        self.pacer.until_ready().await;

        let prompt = build_prompt(record, &self.criteria);
        tracing::debug!(record_id = %record.id, model = %self.model, "Requesting verdict");

        let text = self.generate(prompt).await?;
        let payload = parse_verdict(&text)?;
        let verdict: Verdict = payload.decision.parse().map_err(JudgeError::InvalidResponse)?;

        let decision = Decision::from_verdict(record, self.account.status_url(&record.id), verdict)
            .with_reason(payload.reason);

        tracing::debug!(
            record_id = %record.id,
            verdict = %verdict,
            reason = decision.reason.as_deref().unwrap_or(""),
            "Verdict received"
        );
        Ok(decision)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Parses the model's JSON answer, tolerating a surrounding code fence
fn parse_verdict(text: &str) -> std::result::Result<VerdictPayload, JudgeError> {
    let json = strip_code_fence(text);
    serde_json::from_str(json)
        .map_err(|e| JudgeError::InvalidResponse(format!("{e} (response: {text})")))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) up to the first newline
    let rest = match rest.split_once('\n') {
        Some((info, body)) if !info.contains('{') => body,
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Deserialize)]
struct VerdictPayload {
    decision: String,
    #[serde(default)]
    reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn config() -> AuditConfig {
        let mut config = AuditConfig::default();
        config.account.username = "jane".to_string();
        config.gemini.api_key = Some(secret_string("key".to_string()));
        config
    }

    #[test]
    fn test_endpoint_format() {
        let judge = GeminiJudge::new(&config()).unwrap();
        assert_eq!(
            judge.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(judge.name(), "gemini");
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let mut config = config();
        config.gemini.api_key = None;
        assert!(matches!(
            GeminiJudge::new(&config),
            Err(AuditError::Configuration(_))
        ));

        config.gemini.api_key = Some(secret_string("  ".to_string()));
        assert!(GeminiJudge::new(&config).is_err());
    }

    #[test]
    fn test_missing_username_rejected() {
        let mut config = config();
        config.account.username = String::new();
        let err = GeminiJudge::new(&config).err().unwrap();
        assert!(err.to_string().contains("X_USERNAME"));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```\n"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```JSON\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_verdict() {
        let payload = parse_verdict(r#"{"decision": "delete", "reason": "rude"}"#).unwrap();
        assert_eq!(payload.decision, "delete");
        assert_eq!(payload.reason, "rude");

        let payload = parse_verdict(r#"{"decision": "KEEP"}"#).unwrap();
        assert!(payload.reason.is_empty());

        assert!(matches!(
            parse_verdict("not json"),
            Err(JudgeError::InvalidResponse(_))
        ));
        assert!(parse_verdict(r#"{"reason": "no decision"}"#).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "hi".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }
}
