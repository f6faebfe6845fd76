//! Edamam recipe search client

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use serde_json::Value;
use std::time::Duration;

use crate::config::EdamamConfig;
use crate::error::UpstreamError;
use crate::models::{ProviderQuery, RecipeSearchResponse};

pub const PROVIDER: &str = "edamam";

/// Header carrying the Edamam account user.
pub const ACCOUNT_USER_HEADER: &str = "Edamam-Account-User";

#[async_trait]
pub trait RecipeProvider: Send + Sync {
    async fn search(&self, query: &ProviderQuery) -> Result<RecipeSearchResponse, UpstreamError>;
}

pub struct EdamamClient {
    client: reqwest::Client,
    base_url: String,
}

impl EdamamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::from_reqwest(PROVIDER, e))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl RecipeProvider for EdamamClient {
    async fn search(&self, query: &ProviderQuery) -> Result<RecipeSearchResponse, UpstreamError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&query.to_query_pairs())
            .header(ACCEPT_LANGUAGE, "en")
            .header(ACCEPT, "application/json")
            .header(ACCOUNT_USER_HEADER, query.credentials.account_user.as_str())
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

        RecipeSearchResponse::from_value(PROVIDER, body)
    }
}

pub fn create_recipe_provider(
    config: &EdamamConfig,
) -> Result<Box<dyn RecipeProvider>, UpstreamError> {
    let client = EdamamClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    Ok(Box::new(client))
}
