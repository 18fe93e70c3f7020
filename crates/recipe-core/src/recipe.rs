//! Recipe Entity
//!
//! Recipes as the backend returns them, plus the body used to create/update.

use serde::{Deserialize, Deserializer, Serialize};

pub type RecipeId = i64;

/// A recipe row as listed by `GET /recipes/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,
    /// Newline-separated freeform ingredient lines
    #[serde(default, deserialize_with = "nullable_text")]
    pub ingredients: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub instructions: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_owner: bool,
}

/// JSON body for `POST /recipes/` and `PUT /recipes/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    /// The backend overwrites visibility from this field on update
    pub is_public: bool,
}

fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Recipe {
    /// Draft carrying this recipe's current content, used to pre-fill editing
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            is_public: self.is_public,
        }
    }

    /// Identity for keyed list rendering: the id plus the content a card shows
    /// statically. `is_public` is left out because the card's switch tracks it
    /// itself, so toggling visibility keeps the card (and its selection).
    pub fn render_key(&self) -> (RecipeId, String, String, String, String, Option<String>) {
        (
            self.id,
            self.name.clone(),
            self.description.clone(),
            self.ingredients.clone(),
            self.instructions.clone(),
            self.image.clone(),
        )
    }

    /// Case-insensitive substring match over the visible text of the recipe
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.name, &self.description, &self.ingredients, &self.instructions]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl RecipeDraft {
    /// A draft with a blank name is not submitted
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Recipes matching the search box, in backend order
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| r.matches(query)).collect()
}
