//! Recipe search response envelope.
//!
//! The provider envelope is kept as raw JSON so that pagination links, counts
//! and recipe metadata pass through untouched. Only `hits[].recipe.label` is
//! ever rewritten.

use serde_json::Value;

use crate::error::UpstreamError;

/// Provider response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSearchResponse(Value);

impl RecipeSearchResponse {
    /// Wraps a provider body, which must carry a `hits` array.
    pub fn from_value(provider: &'static str, value: Value) -> Result<Self, UpstreamError> {
        if value.get("hits").is_some_and(Value::is_array) {
            Ok(Self(value))
        } else {
            Err(UpstreamError::InvalidResponse {
                provider,
                reason: "response has no hits array".to_string(),
            })
        }
    }

    pub fn hits(&self) -> &[Value] {
        self.0
            .get("hits")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.hits().is_empty()
    }

    /// Labels of every hit in order. A hit without a label yields an empty string.
    pub fn labels(&self) -> Vec<&str> {
        self.hits().iter().map(|hit| label_of(hit).unwrap_or("")).collect()
    }

    /// Labels joined into one newline-delimited block.
    pub fn label_block(&self) -> String {
        self.labels().join("\n")
    }

    /// Replaces each hit's label with the line at the same position of
    /// `translated`.
    ///
    /// Lines are trimmed before use. Hits past the end of the translation, or
    /// paired with a blank line, keep their original label. Hits without a
    /// label are left untouched.
    pub fn apply_translated_labels(&mut self, translated: &str) {
        let mut lines = translated.lines();

        let Some(hits) = self.0.get_mut("hits").and_then(Value::as_array_mut) else {
            return;
        };

        for hit in hits.iter_mut() {
            let line = lines.next().map(str::trim).filter(|l| !l.is_empty());

            let Some(label) = hit
                .get_mut("recipe")
                .and_then(|recipe| recipe.get_mut("label"))
                .filter(|label| label.is_string())
            else {
                continue;
            };

            if let Some(line) = line {
                *label = Value::String(line.to_string());
            }
        }
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

fn label_of(hit: &Value) -> Option<&str> {
    hit.get("recipe")?.get("label")?.as_str()
}
