//! Model server clients.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::ChatMessage;

/// Language-model errors.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Cannot reach model server at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Model server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response from model server: {0}")]
    ResponseParsing(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(e: serde_json::Error) -> Self {
        LlmError::ResponseParsing(e.to_string())
    }
}

pub type LlmResult<T> = Result<T, LlmError>;

/// A chat-capable language model.
pub trait LlmClient {
    /// One non-streaming chat turn: system instruction plus user text in, answer out.
    fn chat(&self, model: &str, system: &str, user: &str) -> LlmResult<String>;

    /// Names of installed models.
    fn list_models(&self) -> LlmResult<Vec<String>>;

    /// Whether `model` (with or without a `:tag`) is installed.
    fn is_model_available(&self, model: &str) -> LlmResult<bool> {
        let models = self.list_models()?;
        Ok(models.iter().any(|m| m == model || m.starts_with(&format!("{}:", model))))
    }
}

/// Ollama HTTP client.
pub struct OllamaClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Create a client for an Ollama instance.
    pub fn new(base_url: &str, timeout_secs: u64) -> LlmResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LlmError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_connect() {
            LlmError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            LlmError::Timeout(self.timeout_secs)
        } else {
            LlmError::Http(e.to_string())
        }
    }

    fn read_body(&self, response: reqwest::blocking::Response) -> LlmResult<String> {
        let status = response.status();
        let body = response.text().map_err(|e| self.map_send_error(e))?;
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

/// Request body for `/api/chat`.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// Response body from `/api/chat`.
#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Response body from `/api/tags`.
#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

/// Pull the assistant text out of a `/api/chat` response body.
pub fn parse_chat_response(body: &str) -> LlmResult<String> {
    let parsed: ChatResponse = serde_json::from_str(body)?;
    Ok(parsed.message.content)
}

impl LlmClient for OllamaClient {
    fn chat(&self, model: &str, system: &str, user: &str) -> LlmResult<String> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            model,
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            stream: false,
        };

        tracing::debug!(model, url = %url, "sending chat request");
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let body = self.read_body(response)?;
        parse_chat_response(&body)
    }

    fn list_models(&self) -> LlmResult<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let body = self.read_body(response)?;
        let parsed: TagsResponse = serde_json::from_str(&body)?;
        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }
}

/// Mock client for tests: always answers with a fixed string.
pub struct MockLlmClient {
    response: String,
    available_models: Vec<String>,
}

impl MockLlmClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            available_models: vec!["llama3.1:latest".to_string()],
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.available_models = models;
        self
    }
}

impl LlmClient for MockLlmClient {
    fn chat(&self, _model: &str, _system: &str, _user: &str) -> LlmResult<String> {
        Ok(self.response.clone())
    }

    fn list_models(&self) -> LlmResult<Vec<String>> {
        Ok(self.available_models.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_response() {
        let body = r#"{"model":"llama3.1","message":{"role":"assistant","content":"Try: summary P001"},"done":true}"#;
        assert_eq!(parse_chat_response(body).unwrap(), "Try: summary P001");
    }

    #[test]
    fn test_parse_chat_response_rejects_garbage() {
        let err = parse_chat_response("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, LlmError::ResponseParsing(_)));
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            model: "llama3.1",
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.1");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_model_availability_by_tag() {
        let client = MockLlmClient::new("ok")
            .with_models(vec!["llama3.1:latest".into(), "mistral:7b".into()]);
        assert!(client.is_model_available("llama3.1").unwrap());
        assert!(client.is_model_available("mistral:7b").unwrap());
        assert!(!client.is_model_available("llama3").unwrap());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/", 5).unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }
}
