//! Greeting text generation
//!
//! [`GreetingSource`] is the seam between the card and the language model.
//! [`GeminiClient`] talks to the Gemini `generateContent` REST endpoint;
//! [`greeting_or_fallback`] turns any outcome into text the card can show.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{domain::theme::Theme, infrastructure::config::GeminiConfig};

/// Shown when the model answers with nothing.
pub const FALLBACK_SHORT: &str = "Нехай різдвяна зірка осяє ваш шлях світлом надії та любові, даруючи віру у дива, що неодмінно здійсняться...";

/// Shown when the request fails for any reason.
pub const FALLBACK_LONG: &str = "У тихій зимовій ночі, коли сніг вкриває землю срібним килимом, нехай у вашому серці народиться світло. Бажаю миру, що глибший за океан, і радості, що яскравіша за першу зірку. Нехай це Різдво 2026 року стане початком найщасливішої сторінки вашого життя!";

#[derive(Debug, thiserror::Error)]
pub enum GreetingError {
    #[error("API key is not configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait GreetingSource: Send + Sync {
    /// Ask for a greeting in the given theme. The text comes back trimmed and
    /// may be empty.
    async fn generate(&self, theme: Theme) -> Result<String, GreetingError>;
}

/// Prompt sent to the model for `theme`.
pub fn build_prompt(theme: Theme) -> String {
    format!(
        "Напиши красиве, глибоке та завершене привітання з Різдвом Христовим 2026 року українською мовою.

Тема: {guidance}.

Вимоги:
1. Стиль: високохудожня проза, емоційно, поетично.
2. Обсяг: 4-6 речень. Текст повинен бути розгорнутим.
3. Без звертання до конкретної особи (універсальне).
4. Уникай банальностей та канцеляризмів. Використовуй яскраві, свіжі метафори.
5. ВАЖЛИВО: Переконайся, що думка завершена і текст не обривається на півслові.",
        guidance = theme.guidance()
    )
}

/// Text to show for `theme`, whatever happens on the way.
pub async fn greeting_or_fallback(source: &dyn GreetingSource, theme: Theme) -> String {
    match source.generate(theme).await {
        Ok(text) if text.is_empty() => FALLBACK_SHORT.to_string(),
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%theme, "Error generating greeting: {e}");
            FALLBACK_LONG.to_string()
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
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

impl GenerateResponse {
    /// Text parts of the first candidate, joined and trimmed
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

/// Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    endpoint: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GreetingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    fn request(&self, theme: Theme) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(theme)),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                top_p: self.top_p,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl GreetingSource for GeminiClient {
    async fn generate(&self, theme: Theme) -> Result<String, GreetingError> {
        let api_key = self.api_key.expose_secret();
        if api_key.trim().is_empty() {
            return Err(GreetingError::MissingCredential);
        }

        tracing::debug!(%theme, model = %self.model, "requesting greeting");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&self.request(theme))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GreetingError::Status { status, body });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GreetingError::Decode(e.to_string()))?;
        Ok(parsed.text())
    }
}
