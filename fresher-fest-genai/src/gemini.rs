use crate::backend::{BackendRequest, GenerationBackend};
use crate::config::Config;
use crate::error::{GenAiError, Result};
use crate::schema::ValidationError;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Client for the Gemini `generateContent` endpoint.
///
/// Uses gloo-net in the browser and reqwest natively (behind the `native`
/// feature). The declared response schema is passed through
/// `generationConfig.responseSchema` so the backend structures its own
/// output; the body of the first candidate is returned as raw JSON.
pub struct GeminiClient {
    config: Config,
    #[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            #[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    fn request_body(request: &BackendRequest) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.instruction }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema,
            },
        });

        if let Some(safety) = &request.safety {
            body["safetySettings"] = serde_json::to_value(safety).unwrap_or(Value::Null);
        }

        body
    }

    /// Pull the structured payload out of the first candidate
    fn extract_payload(response: &Value) -> Result<Value> {
        let text = response["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part["text"].as_str())
            .ok_or_else(|| {
                GenAiError::SchemaMismatch(ValidationError::Decode(
                    "response carries no candidate text".to_string(),
                ))
            })?;

        serde_json::from_str(text).map_err(|err| {
            GenAiError::SchemaMismatch(ValidationError::Decode(format!(
                "candidate text is not JSON: {err}"
            )))
        })
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: BackendRequest) -> Result<Value> {
        let body = Self::request_body(&request);

        let response = gloo_net::http::Request::post(&self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .map_err(|err| GenAiError::BackendUnavailable(err.to_string()))?
            .send()
            .await
            .map_err(|err| GenAiError::BackendUnavailable(err.to_string()))?;

        if !response.ok() {
            return Err(GenAiError::BackendUnavailable(format!(
                "backend returned status {}",
                response.status()
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|err| GenAiError::BackendUnavailable(err.to_string()))?;

        Self::extract_payload(&json)
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
#[async_trait(?Send)]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: BackendRequest) -> Result<Value> {
        let body = Self::request_body(&request);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| GenAiError::BackendUnavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenAiError::BackendUnavailable(format!(
                "backend returned status {status}"
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|err| GenAiError::BackendUnavailable(err.to_string()))?;

        Self::extract_payload(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::SafetySettings;

    fn request(safety: Option<SafetySettings>) -> BackendRequest {
        BackendRequest {
            instruction: "Generate a riddle.".to_string(),
            response_schema: json!({ "type": "OBJECT" }),
            safety,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = GeminiClient::request_body(&request(None));

        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Generate a riddle."
        );
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(body.get("safetySettings").is_none());
    }

    #[test]
    fn test_safety_settings_serialized_when_present() {
        let body = GeminiClient::request_body(&request(Some(SafetySettings::block_only_high())));

        let settings = body["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        assert_eq!(settings[3]["category"], "HARM_CATEGORY_SEXUALLY_EXPLICIT");
    }

    #[test]
    fn test_extract_payload() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"challenge\":\"Sing a song\"}" }] }
            }]
        });

        let payload = GeminiClient::extract_payload(&response).unwrap();
        assert_eq!(payload["challenge"], "Sing a song");
    }

    #[test]
    fn test_extract_payload_without_candidates() {
        let response = json!({ "candidates": [] });
        assert!(matches!(
            GeminiClient::extract_payload(&response),
            Err(GenAiError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_extract_payload_with_non_json_text() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "plain prose" }] }
            }]
        });
        assert!(matches!(
            GeminiClient::extract_payload(&response),
            Err(GenAiError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_url_composition() {
        let client = GeminiClient::new(
            Config::new("key")
                .with_model("gemini-1.5-pro")
                .with_endpoint("http://localhost:9000/v1beta"),
        );
        assert_eq!(
            client.url(),
            "http://localhost:9000/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }
}
