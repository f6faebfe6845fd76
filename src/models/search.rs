//! Search request and the query sent to the recipe provider.

use std::fmt;

use crate::config::EdamamCredentials;
use crate::error::{AppError, MISSING_INGREDIENTS_MESSAGE, Result};

/// Target language of a translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// ISO 639-1 code understood by the translation provider.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalized, validated recipe search request.
///
/// Multi-valued parameters are always collections here, whatever shape the
/// client sent them in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    pub ingredients: String,
    pub diet: Option<String>,
    pub health: Vec<String>,
    pub dish_type: Option<String>,
    pub excluded: Vec<String>,
}

impl SearchRequest {
    /// Builds a request, rejecting a missing or blank `ingredients` value.
    pub fn new(
        ingredients: Option<String>,
        diet: Option<String>,
        health: Vec<String>,
        dish_type: Option<String>,
        excluded: Vec<String>,
    ) -> Result<Self> {
        let ingredients = non_blank(ingredients)
            .ok_or_else(|| AppError::Validation(MISSING_INGREDIENTS_MESSAGE.to_string()))?;

        Ok(Self {
            ingredients,
            diet: non_blank(diet),
            health: health.into_iter().filter_map(|v| non_blank(Some(v))).collect(),
            dish_type: non_blank(dish_type),
            excluded: excluded
                .into_iter()
                .filter_map(|v| non_blank(Some(v)))
                .collect(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Query sent to the recipe provider, already translated to English.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    pub q: String,
    pub credentials: EdamamCredentials,
    pub diet: Option<String>,
    pub dish_type: Option<String>,
    pub health: Vec<String>,
    pub excluded: Vec<String>,
}

impl ProviderQuery {
    /// Value of the `type` parameter; only public recipes are searched.
    pub const SEARCH_TYPE: &'static str = "public";

    /// Query string pairs in wire order.
    ///
    /// Collections become one pair per element (`health=a&health=b`); they are
    /// never joined or indexed.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("type", Self::SEARCH_TYPE.to_string()),
            ("q", self.q.clone()),
            ("app_id", self.credentials.app_id.clone()),
            ("app_key", self.credentials.app_key.clone()),
        ];

        if let Some(diet) = &self.diet {
            pairs.push(("diet", diet.clone()));
        }
        if let Some(dish_type) = &self.dish_type {
            pairs.push(("dishType", dish_type.clone()));
        }
        pairs.extend(self.health.iter().map(|h| ("health", h.clone())));
        pairs.extend(self.excluded.iter().map(|e| ("excluded", e.clone())));

        pairs
    }
}

impl fmt::Debug for ProviderQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderQuery")
            .field("type", &Self::SEARCH_TYPE)
            .field("q", &self.q)
            .field("app_id", &self.credentials.app_id)
            .field("diet", &self.diet)
            .field("dishType", &self.dish_type)
            .field("health", &self.health)
            .field("excluded", &self.excluded)
            .finish()
    }
}
