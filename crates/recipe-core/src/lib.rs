//! Recipe Box Core
//!
//! Layered like the rest of the app:
//! - recipe / ingredient: domain types coming from the backend
//! - shopping: the persisted shopping list and its reconciliation rules
//! - api / visibility: boundary trait and the optimistic visibility toggle
//! - storage / config / theme: small ambient pieces shared with the UI

mod api;
mod config;
mod error;
mod ingredient;
mod recipe;
mod storage;
mod theme;
mod visibility;

pub mod shopping;

pub use api::{ApiError, ApiResult, ImageRef, RecipeApi, VisibilityPatch};
pub use config::AppConfig;
pub use error::{ShoppingError, ShoppingResult, StorageError, StorageResult};
pub use ingredient::{extract_ingredients, normalize_name, EssentialMap, IngredientChoice};
pub use recipe::{filter_recipes, Recipe, RecipeDraft, RecipeId};
pub use storage::{ListStorage, MemoryStorage};
pub use theme::Theme;
pub use visibility::{failure_notice, toggle_visibility, VisibilityControl, VisibilityOutcome};
