//! Recipe Commands
//!
//! Frontend bindings for `/recipes/` CRUD and visibility.

use recipe_core::{ApiResult, Recipe, RecipeDraft, RecipeId, VisibilityPatch};

use super::{read_empty, read_json, ApiClient};

pub async fn list_recipes(client: &ApiClient) -> ApiResult<Vec<Recipe>> {
    let sent = client.http.get(client.url("/recipes/")).send().await;
    read_json(sent).await
}

pub async fn get_recipe(client: &ApiClient, id: RecipeId) -> ApiResult<Recipe> {
    let sent = client.http.get(client.url(&format!("/recipes/{}", id))).send().await;
    read_json(sent).await
}

pub async fn create_recipe(client: &ApiClient, draft: &RecipeDraft) -> ApiResult<Recipe> {
    let sent = client.http.post(client.url("/recipes/")).json(draft).send().await;
    read_json(sent).await
}

pub async fn update_recipe(client: &ApiClient, id: RecipeId, draft: &RecipeDraft) -> ApiResult<Recipe> {
    let sent = client
        .http
        .put(client.url(&format!("/recipes/{}", id)))
        .json(draft)
        .send()
        .await;
    read_json(sent).await
}

pub async fn delete_recipe(client: &ApiClient, id: RecipeId) -> ApiResult<()> {
    let sent = client.http.delete(client.url(&format!("/recipes/{}", id))).send().await;
    read_empty(sent).await
}

pub async fn set_visibility(client: &ApiClient, id: RecipeId, is_public: bool) -> ApiResult<Recipe> {
    let sent = client
        .http
        .patch(client.url(&format!("/recipes/{}/visibility", id)))
        .json(&VisibilityPatch { is_public })
        .send()
        .await;
    read_json(sent).await
}
