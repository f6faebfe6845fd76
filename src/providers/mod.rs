//! External providers
//!
//! HTTP clients for the services the search pipeline depends on: the Edamam
//! recipe search API and the translation service.

pub mod edamam;
pub mod translation;

pub use edamam::{EdamamClient, RecipeProvider, create_recipe_provider};
pub use translation::{GoogleTranslator, Translator, create_translator};
