//! 食谱搜索 DTO
//!
//! Query string parsing for `GET /api/recipes`.

use crate::services::recipe_search::SearchParams;

/// Raw query string of a recipe search, as key/value pairs in arrival order.
///
/// Repeated keys are kept, so `health=vegan&health=dairy-free` and
/// `health=vegan` both normalize to a list. The bracketed form `health[]=` is
/// accepted as well.
#[derive(Debug, Clone, Default)]
pub struct RecipeSearchQuery(pub Vec<(String, String)>);

impl RecipeSearchQuery {
    /// First value given for `key`.
    fn single(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Every value given for `key` or `key[]`, in order.
    fn many(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key || k.strip_suffix("[]") == Some(key))
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn into_params(self) -> SearchParams {
        SearchParams {
            ingredients: self.single("ingredients"),
            diet: self.single("diet"),
            health: self.many("health"),
            dish_type: self.single("dishType"),
            excluded: self.many("excluded"),
        }
    }
}

impl From<Vec<(String, String)>> for RecipeSearchQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}
