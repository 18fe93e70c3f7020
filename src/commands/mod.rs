//! Backend Command Wrappers
//!
//! HTTP bindings to the recipe backend, organized by domain. `ApiClient`
//! also implements `recipe_core::RecipeApi` so core protocols can drive it.

mod image;
mod ingredient;
mod recipe;

use async_trait::async_trait;
use recipe_core::{ApiError, ApiResult, AppConfig, EssentialMap, ImageRef, Recipe, RecipeApi, RecipeDraft, RecipeId};
use serde::de::DeserializeOwned;

// Re-export all public items
pub use image::*;
pub use ingredient::*;
pub use recipe::*;

/// Backend origin + shared HTTP client
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.endpoint(""),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Turn a non-success status into an `ApiError`
async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    log::warn!("[API] {} {}", status.as_u16(), message);
    Err(ApiError::from_status(status.as_u16(), message))
}

async fn read_json<T: DeserializeOwned>(sent: Result<reqwest::Response, reqwest::Error>) -> ApiResult<T> {
    let response = check_status(sent.map_err(transport)?).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_empty(sent: Result<reqwest::Response, reqwest::Error>) -> ApiResult<()> {
    check_status(sent.map_err(transport)?).await?;
    Ok(())
}

#[async_trait(?Send)]
impl RecipeApi for ApiClient {
    async fn list_recipes(&self) -> ApiResult<Vec<Recipe>> {
        list_recipes(self).await
    }

    async fn get_recipe(&self, id: RecipeId) -> ApiResult<Recipe> {
        get_recipe(self, id).await
    }

    async fn essential_map(&self) -> ApiResult<EssentialMap> {
        get_essential_map(self).await
    }

    async fn create_recipe(&self, draft: &RecipeDraft) -> ApiResult<Recipe> {
        create_recipe(self, draft).await
    }

    async fn update_recipe(&self, id: RecipeId, draft: &RecipeDraft) -> ApiResult<Recipe> {
        update_recipe(self, id, draft).await
    }

    async fn delete_recipe(&self, id: RecipeId) -> ApiResult<()> {
        delete_recipe(self, id).await
    }

    async fn set_visibility(&self, id: RecipeId, is_public: bool) -> ApiResult<Recipe> {
        set_visibility(self, id, is_public).await
    }

    async fn upload_image(&self, id: RecipeId, file_name: &str, mime: &str, bytes: Vec<u8>) -> ApiResult<ImageRef> {
        upload_image_bytes(self, id, file_name, mime, bytes).await
    }

    async fn delete_image(&self, id: RecipeId) -> ApiResult<()> {
        delete_image(self, id).await
    }
}
