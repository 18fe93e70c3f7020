//! Recipe backend boundary
//!
//! The UI implements this over HTTP; tests use in-memory fakes. Futures are
//! not `Send` because the browser implementation is single-threaded.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ingredient::EssentialMap;
use crate::recipe::{Recipe, RecipeDraft, RecipeId};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not signed in")]
    Unauthorized,

    /// The caller does not own the recipe
    #[error("not allowed")]
    Forbidden,

    #[error("recipe not found")]
    NotFound,

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                status,
                message: message.into(),
            },
        }
    }

    /// The request never got an answer (as opposed to being refused)
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// JSON body for `PATCH /recipes/{id}/visibility`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityPatch {
    pub is_public: bool,
}

/// Response of an image upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub image: String,
}

#[async_trait(?Send)]
pub trait RecipeApi {
    async fn list_recipes(&self) -> ApiResult<Vec<Recipe>>;

    async fn get_recipe(&self, id: RecipeId) -> ApiResult<Recipe>;

    async fn essential_map(&self) -> ApiResult<EssentialMap>;

    async fn create_recipe(&self, draft: &RecipeDraft) -> ApiResult<Recipe>;

    async fn update_recipe(&self, id: RecipeId, draft: &RecipeDraft) -> ApiResult<Recipe>;

    async fn delete_recipe(&self, id: RecipeId) -> ApiResult<()>;

    /// May fail with `ApiError::Forbidden` for recipes the caller does not own
    async fn set_visibility(&self, id: RecipeId, is_public: bool) -> ApiResult<Recipe>;

    async fn upload_image(
        &self,
        id: RecipeId,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<ImageRef>;

    async fn delete_image(&self, id: RecipeId) -> ApiResult<()>;
}
