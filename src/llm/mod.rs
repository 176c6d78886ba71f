// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Language-model client.
//!
//! ```text
//! OpenAiClient::new(&ModelConfig, api_key)
//!        |
//!        v
//! POST {base_url}/responses
//!   Authorization: Bearer <key>
//!   { model, instructions, input, temperature: 0 }
//!        |
//!        v
//! ResponsesBody::output_text()
//!   top-level "output_text" if present, else
//!   concat(output[type=message].content[type=output_text].text)
//! ```
//!
//! One request per run. No retries.

use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ModelConfig;
use crate::error::{GitmeupResult, NetworkError};

/// Something that turns instructions plus a payload into reply text.
pub trait ModelClient {
    /// Send one completion request and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or the reply cannot be read.
    fn complete(
        &self,
        instructions: &str,
        input: &str,
    ) -> impl Future<Output = GitmeupResult<String>>;
}

/// Request body for the Responses endpoint.
#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    temperature: f32,
}

/// The parts of a Responses reply we read.
#[derive(Debug, Default, Deserialize)]
pub struct ResponsesBody {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesBody {
    /// Joined text of the reply.
    ///
    /// A reply without any text part yields an empty string.
    #[must_use]
    pub fn output_text(&self) -> String {
        if let Some(text) = &self.output_text {
            return text.clone();
        }
        self.output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| &item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

/// Client for an OpenAI-compatible Responses API.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    /// Build a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Reqwest` if the HTTP client cannot be built.
    pub fn new(config: &ModelConfig, api_key: impl Into<String>) -> GitmeupResult<Self> {
        let client = Client::builder()
            .user_agent(format!("gitmeup/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NetworkError::Reqwest)?;
        Ok(Self {
            client,
            endpoint: responses_url(&config.base_url),
            model: config.name.clone(),
            api_key: api_key.into(),
        })
    }

    async fn request(&self, instructions: &str, input: &str) -> GitmeupResult<String> {
        let body = ResponsesRequest {
            model: &self.model,
            instructions,
            input,
            temperature: 0.0,
        };
        debug!(
            url = %self.endpoint,
            model = %self.model,
            input_bytes = input.len(),
            "requesting completion"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: self.endpoint.clone(),
                body,
            }
            .into());
        }

        let text = response.text().await.map_err(NetworkError::Reqwest)?;
        let parsed: ResponsesBody =
            serde_json::from_str(&text).map_err(|e| NetworkError::InvalidResponse {
                url: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let reply = parsed.output_text();
        trace!(reply = %reply, "model reply");
        Ok(reply)
    }
}

impl ModelClient for OpenAiClient {
    fn complete(
        &self,
        instructions: &str,
        input: &str,
    ) -> impl Future<Output = GitmeupResult<String>> {
        self.request(instructions, input)
    }
}

/// `{base_url}/responses`, tolerating a trailing slash on the base.
#[must_use]
pub fn responses_url(base_url: &str) -> String {
    format!("{}/responses", base_url.trim_end_matches('/'))
}
