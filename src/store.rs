//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::shopping::ShoppingItem;
use recipe_core::shopping::ShoppingListEngine;
use recipe_core::{EssentialMap, ListStorage, Recipe, RecipeId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Recipes visible to the signed-in user
    pub recipes: Vec<Recipe>,
    /// Essential-ingredient flags from the backend
    pub essentials: EssentialMap,
    /// Shopping list snapshot in display order
    pub shopping_items: Vec<ShoppingItem>,
    /// Search box contents
    pub query: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set one recipe's public flag without refetching
pub fn store_set_public(store: &AppStore, id: RecipeId, is_public: bool) {
    if let Some(recipe) = store.recipes().write().iter_mut().find(|r| r.id == id) {
        recipe.is_public = is_public;
    }
}

/// Remove a recipe from the store by ID
pub fn store_remove_recipe(store: &AppStore, id: RecipeId) {
    store.recipes().write().retain(|r| r.id != id);
}

/// Re-read the persisted shopping list into the store
pub fn store_refresh_shopping<S: ListStorage>(store: &AppStore, engine: &ShoppingListEngine<S>) {
    store.shopping_items().set(engine.displayed());
}
