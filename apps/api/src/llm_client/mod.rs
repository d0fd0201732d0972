/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gemini-3-flash-preview (hardcoded; do not make configurable to prevent drift)
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-3-flash-preview";
const REQUEST_TIMEOUT_SECS: u64 = 120;
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Prompt blocked by the model: {reason}")]
    Blocked { reason: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// A document sent inline with the prompt, already transport-encoded.
#[derive(Debug, Clone, Copy)]
pub struct InlineDocument<'a> {
    pub mime_type: &'a str,
    /// Base64 payload.
    pub data: &'a str,
}

/// Everything one model call needs.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub system: &'a str,
    pub text: &'a str,
    pub document: Option<InlineDocument<'a>>,
    /// When set, the model is constrained to JSON matching this schema.
    pub response_schema: Option<&'a Value>,
}

/// The single LLM client. Wraps the Gemini `generateContent` API.
///
/// Issues exactly one HTTP request per call; callers decide whether a failure
/// is worth another attempt.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, MODEL)
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    pub async fn call(&self, prompt: &Prompt<'_>) -> Result<LlmResponse, LlmError> {
        let request_body = build_request(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(reason) = llm_response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(LlmError::Blocked { reason });
        }

        let usage = llm_response.usage_metadata.as_ref();
        debug!(
            "LLM call succeeded: prompt_tokens={}, candidate_tokens={}, finish_reason={}",
            usage.map(|u| u.prompt_token_count).unwrap_or_default(),
            usage.map(|u| u.candidates_token_count).unwrap_or_default(),
            llm_response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("none")
        );

        Ok(llm_response)
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// The prompt should carry a response schema or instruct the model to return JSON.
    pub async fn call_json<T: DeserializeOwned>(&self, prompt: &Prompt<'_>) -> Result<T, LlmError> {
        let response = self.call(prompt).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }
}

fn build_request<'a>(prompt: &Prompt<'a>) -> GenerateContentRequest<'a> {
    let mut parts = Vec::with_capacity(2);
    if let Some(document) = prompt.document {
        parts.push(Part {
            inline_data: Some(InlineData {
                mime_type: document.mime_type,
                data: document.data,
            }),
            ..Part::default()
        });
    }
    parts.push(Part {
        text: Some(prompt.text),
        ..Part::default()
    });

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: Some(prompt.system),
                ..Part::default()
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts,
        }],
        generation_config: prompt.response_schema.map(|schema| GenerationConfig {
            response_mime_type: JSON_MIME_TYPE,
            response_schema: schema,
        }),
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, routing::post, Json, Router};
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_places_document_before_text() {
        let schema = json!({"type": "OBJECT"});
        let prompt = Prompt {
            system: "sys",
            text: "do the thing",
            document: Some(InlineDocument {
                mime_type: "application/pdf",
                data: "JVBERi0=",
            }),
            response_schema: Some(&schema),
        };
        let body = serde_json::to_value(build_request(&prompt)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(body["contents"][0]["role"], "user");
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "application/pdf");
        assert_eq!(parts[0]["inlineData"]["data"], "JVBERi0=");
        assert!(parts[0].get("text").is_none());
        assert_eq!(parts[1]["text"], "do the thing");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_request_without_schema_omits_generation_config() {
        let prompt = Prompt {
            system: "sys",
            text: "hi",
            document: None,
            response_schema: None,
        };
        let body = serde_json::to_value(build_request(&prompt)).unwrap();
        assert!(body.get("generationConfig").is_none());
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let response: LlmResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\":"}, {"text": " 1}"}]}, "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_response_text_none_without_candidates() {
        let response: LlmResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_none());
    }

    async fn spawn_fake_gemini(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1beta")
    }

    #[tokio::test]
    async fn test_call_json_sends_key_and_decodes_candidate_text() {
        let router = Router::new().route(
            "/v1beta/models/:action",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let key = headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let echoed = json!({"key": key, "text": body["contents"][0]["parts"][0]["text"]});
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": format!("```json\n{echoed}\n```")}]}}],
                    "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 4}
                }))
            }),
        );
        let base_url = spawn_fake_gemini(router).await;
        let client = LlmClient::new("secret".to_string(), base_url).unwrap();

        let prompt = Prompt {
            system: "sys",
            text: "ping",
            document: None,
            response_schema: None,
        };
        let value: Value = client.call_json(&prompt).await.unwrap();
        assert_eq!(value["key"], "secret");
        assert_eq!(value["text"], "ping");
    }

    #[tokio::test]
    async fn test_call_maps_error_body_message() {
        let router = Router::new().route(
            "/v1beta/models/:action",
            post(|| async {
                (
                    axum::http::StatusCode::FORBIDDEN,
                    Json(json!({"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}})),
                )
            }),
        );
        let base_url = spawn_fake_gemini(router).await;
        let client = LlmClient::new("bad".to_string(), base_url).unwrap();
        let prompt = Prompt {
            system: "sys",
            text: "ping",
            document: None,
            response_schema: None,
        };

        match client.call(&prompt).await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_call_reports_blocked_prompt() {
        let router = Router::new().route(
            "/v1beta/models/:action",
            post(|| async { Json(json!({"promptFeedback": {"blockReason": "SAFETY"}})) }),
        );
        let base_url = spawn_fake_gemini(router).await;
        let client = LlmClient::new("k".to_string(), base_url).unwrap();
        let prompt = Prompt {
            system: "sys",
            text: "ping",
            document: None,
            response_schema: None,
        };

        assert!(matches!(
            client.call(&prompt).await,
            Err(LlmError::Blocked { reason }) if reason == "SAFETY"
        ));
    }

    #[tokio::test]
    async fn test_call_json_empty_candidate_is_error() {
        let router = Router::new().route(
            "/v1beta/models/:action",
            post(|| async { Json(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]})) }),
        );
        let base_url = spawn_fake_gemini(router).await;
        let client = LlmClient::new("k".to_string(), base_url).unwrap();
        let prompt = Prompt {
            system: "sys",
            text: "ping",
            document: None,
            response_schema: None,
        };

        assert!(matches!(
            client.call_json::<Value>(&prompt).await,
            Err(LlmError::EmptyContent)
        ));
    }
}
