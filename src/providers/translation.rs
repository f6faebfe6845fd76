//! 翻译服务客户端

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::config::TranslationConfig;
use crate::error::UpstreamError;
use crate::models::Language;

pub const PROVIDER: &str = "translate";

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`, auto-detecting the source language.
    async fn translate(&self, text: &str, target: Language) -> Result<String, UpstreamError>;
}

/// Client for Google's public `translate_a/single` endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::from_reqwest(PROVIDER, e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(PROVIDER, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::from_reqwest(PROVIDER, e))?;

        parse_translation(&body).ok_or_else(|| UpstreamError::InvalidResponse {
            provider: PROVIDER,
            reason: "translation segments missing".to_string(),
        })
    }
}

/// Concatenates the translated segments of a `translate_a/single` body.
///
/// The body looks like `[[["Sopa de pollo\n", "Chicken soup\n", ...], ...], null, "en"]`.
fn parse_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(text);
        }
    }

    Some(translated)
}

pub fn create_translator(
    config: &TranslationConfig,
) -> Result<Box<dyn Translator>, UpstreamError> {
    let translator =
        GoogleTranslator::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    Ok(Box::new(translator))
}
