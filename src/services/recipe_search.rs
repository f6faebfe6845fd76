//! 食谱搜索服务
//!
//! The request pipeline: translate the query to English, search Edamam, then
//! translate the recipe titles back to Spanish in a single batched call.

use async_trait::async_trait;
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::EdamamCredentials;
use crate::error::{AppError, Result};
use crate::models::{Language, ProviderQuery, RecipeSearchResponse, SearchRequest};
use crate::observability::AppMetrics;
use crate::providers::{RecipeProvider, Translator};

/// Raw search parameters as received from the client.
///
/// Validation happens inside the service, after the credentials check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub ingredients: Option<String>,
    pub diet: Option<String>,
    pub health: Vec<String>,
    pub dish_type: Option<String>,
    pub excluded: Vec<String>,
}

#[async_trait]
pub trait RecipeSearchService: Send + Sync {
    async fn search(&self, params: SearchParams) -> Result<RecipeSearchResponse>;
}

pub struct RecipeSearchServiceImpl {
    credentials: Option<EdamamCredentials>,
    translator: Arc<dyn Translator>,
    recipe_provider: Arc<dyn RecipeProvider>,
    metrics: Arc<AppMetrics>,
}

impl RecipeSearchServiceImpl {
    pub fn new(
        credentials: Option<EdamamCredentials>,
        translator: Arc<dyn Translator>,
        recipe_provider: Arc<dyn RecipeProvider>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            credentials,
            translator,
            recipe_provider,
            metrics,
        }
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String> {
        self.metrics.record_translation();
        Ok(self.translator.translate(text, target).await?)
    }

    /// Translates every excluded term concurrently. Results keep the input order.
    async fn translate_excluded(&self, excluded: &[String]) -> Result<Vec<String>> {
        let translated = try_join_all(
            excluded
                .iter()
                .map(|term| self.translate(term, Language::English)),
        )
        .await?;

        Ok(translated.into_iter().map(|t| t.to_lowercase()).collect())
    }
}

#[async_trait]
impl RecipeSearchService for RecipeSearchServiceImpl {
    async fn search(&self, params: SearchParams) -> Result<RecipeSearchResponse> {
        let credentials = self.credentials.clone().ok_or(AppError::Config)?;

        let request = SearchRequest::new(
            params.ingredients,
            params.diet,
            params.health,
            params.dish_type,
            params.excluded,
        )?;

        let q = self.translate(&request.ingredients, Language::English).await?;
        let excluded = self.translate_excluded(&request.excluded).await?;

        let query = ProviderQuery {
            q,
            credentials,
            diet: request.diet,
            dish_type: request.dish_type,
            health: request.health,
            excluded,
        };
        info!("Searching recipes with parameters: {:?}", query);

        let mut response = self.recipe_provider.search(&query).await?;

        if response.is_empty() {
            info!("Edamam returned no results");
            return Ok(response);
        }

        let labels = response.label_block();
        let translated = self.translate(&labels, Language::Spanish).await?;
        debug!(
            hits = response.hits().len(),
            lines = translated.lines().count(),
            "Translated recipe labels"
        );
        response.apply_translated_labels(&translated);

        Ok(response)
    }
}

pub fn create_recipe_search_service(
    credentials: Option<EdamamCredentials>,
    translator: Arc<dyn Translator>,
    recipe_provider: Arc<dyn RecipeProvider>,
    metrics: Arc<AppMetrics>,
) -> Box<dyn RecipeSearchService> {
    Box::new(RecipeSearchServiceImpl::new(
        credentials,
        translator,
        recipe_provider,
        metrics,
    ))
}
