use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::TutorError;

/// Shown when no API key is configured.
const FALLBACK_DISABLED: &str =
    "The AI tutor is not configured. Set BRITPASS_AI_API_KEY to enable explanations.";

/// Shown when the service answers but produces nothing usable.
const FALLBACK_EMPTY: &str =
    "I'm sorry, I couldn't generate an explanation right now. Please refer to the official handbook.";

/// Shown for transport and HTTP failures.
const FALLBACK_CONNECTION: &str =
    "Error connecting to the AI tutor. Please check your internet connection.";

#[derive(Clone, Debug)]
pub struct TutorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl TutorConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("BRITPASS_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("BRITPASS_AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("BRITPASS_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Stateless gateway to the remote explanation service.
///
/// Advisory only: [`TutorService::explain`] resolves every failure to a
/// human-readable fallback string, so the presentation layer never sees an
/// error and the session flow is never blocked on it.
#[derive(Clone)]
pub struct TutorService {
    client: Client,
    config: Option<TutorConfig>,
}

impl TutorService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TutorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<TutorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Explain why the correct answer is correct, in tutoring prose.
    ///
    /// Never fails: unconfigured, transport, status, and empty-body outcomes
    /// all map to a fallback string.
    pub async fn explain(
        &self,
        question: &str,
        options: &[String],
        correct_answer: &str,
    ) -> String {
        let prompt = build_prompt(question, options, correct_answer);
        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(TutorError::Disabled) => FALLBACK_DISABLED.to_string(),
            Err(TutorError::EmptyResponse) => FALLBACK_EMPTY.to_string(),
            Err(_) => FALLBACK_CONNECTION.to_string(),
        }
    }

    /// Generate text from a prompt.
    ///
    /// # Errors
    ///
    /// Returns `TutorError` when the service is disabled, the request fails,
    /// or the response is empty.
    async fn generate(&self, prompt: &str) -> Result<String, TutorError> {
        let config = self.config.as_ref().ok_or(TutorError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TutorError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(TutorError::EmptyResponse)?;

        let content = content.trim();
        if content.is_empty() {
            return Err(TutorError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

fn build_prompt(question: &str, options: &[String], correct_answer: &str) -> String {
    format!(
        "You are an expert tutor for the \"Life in the UK\" citizenship test.\n\
         A student is confused about the following question:\n\
         \"{question}\"\n\
         Options: {}\n\
         Correct Answer: {correct_answer}\n\n\
         Provide a clear, encouraging, and historical/legal explanation of why \
         this answer is correct. Keep it concise (max 100 words). Focus on key \
         facts that will help them remember.",
        options.join(", ")
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["1066".into(), "1215".into(), "1415".into(), "1588".into()]
    }

    #[test]
    fn prompt_carries_question_options_and_answer() {
        let prompt = build_prompt(
            "In which year did the Battle of Hastings take place?",
            &options(),
            "1066",
        );
        assert!(prompt.contains("Battle of Hastings"));
        assert!(prompt.contains("1066, 1215, 1415, 1588"));
        assert!(prompt.contains("Correct Answer: 1066"));
    }

    #[tokio::test]
    async fn unconfigured_service_yields_a_fallback_not_an_error() {
        let service = TutorService::new(None);
        assert!(!service.enabled());

        let text = service
            .explain("Who appoints the Prime Minister?", &options(), "The Monarch")
            .await;
        assert!(!text.is_empty());
        assert_eq!(text, FALLBACK_DISABLED);
    }

    #[tokio::test]
    async fn unreachable_service_yields_the_connection_fallback() {
        // 127.0.0.1:9 (discard) refuses connections; the request errors fast.
        let service = TutorService::new(Some(TutorConfig {
            base_url: "http://127.0.0.1:9".into(),
            api_key: "test-key".into(),
            model: "test-model".into(),
        }));

        let text = service
            .explain("Who appoints the Prime Minister?", &options(), "The Monarch")
            .await;
        assert_eq!(text, FALLBACK_CONNECTION);
    }
}
