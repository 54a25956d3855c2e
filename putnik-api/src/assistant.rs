//! Client for the guide's AI assistant service.
//!
//! The assistant lives on its own host and speaks a loose protocol: the
//! question goes out as `{ "key": text }` and the answer may come back as
//! JSON under one of several field names or as plain text. The client
//! normalizes all of that into a single string.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::client::ClientBuildError;
use crate::error::ApiError;

/// Production URL of the assistant service.
pub const DEFAULT_ASSISTANT_URL: &str = "https://ai.heimseweb.ru/";

/// Assistant requests are slower than catalogue fetches; give them more
/// headroom.
const ASSISTANT_TIMEOUT_SECS: u64 = 60;

/// JSON fields an answer may hide under, in preference order.
const ANSWER_FIELDS: [&str; 4] = ["result", "response", "text", "message"];

#[derive(Serialize)]
struct Question<'a> {
    key: &'a str,
}

/// Client for the assistant chat endpoint.
#[derive(Debug)]
pub struct AssistantClient {
    client: Client,
    url: String,
}

impl AssistantClient {
    /// Create a client against the production assistant.
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_url(DEFAULT_ASSISTANT_URL)
    }

    /// Create a client against a specific assistant URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to build.
    pub fn with_url(url: impl Into<String>) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(ASSISTANT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Ask the assistant a question and return its answer as text.
    ///
    /// # Errors
    /// [`ApiError::Status`] on a non-success response, [`ApiError::Network`]
    /// when the request never completes.
    pub async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(&self.url)
            .json(&Question { key: question })
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(extract_answer(&body))
    }
}

/// Pull a displayable answer out of whatever the assistant returned.
fn extract_answer(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_owned();
    };
    for field in ANSWER_FIELDS {
        if let Some(answer) = value.get(field).and_then(Value::as_str) {
            return answer.to_owned();
        }
    }
    match value {
        Value::String(answer) => answer,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"result":"Набережная"}"#, "Набережная")]
    #[case(r#"{"response":"Парк Горького"}"#, "Парк Горького")]
    #[case(r#"{"result":"первый","message":"второй"}"#, "первый")]
    #[case(r#""просто строка""#, "просто строка")]
    #[case("Ответ без JSON", "Ответ без JSON")]
    fn answers_normalize_to_text(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(extract_answer(body), expected);
    }

    #[test]
    fn unknown_json_shapes_fall_back_to_raw_json() {
        assert_eq!(extract_answer(r#"{"status":"ok"}"#), r#"{"status":"ok"}"#);
    }
}
