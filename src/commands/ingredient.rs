//! Ingredient Commands

use recipe_core::{ApiResult, EssentialMap};

use super::{read_json, ApiClient};

/// Lowercased ingredient name -> essential flag
pub async fn get_essential_map(client: &ApiClient) -> ApiResult<EssentialMap> {
    let sent = client.http.get(client.url("/ingredients/map")).send().await;
    read_json(sent).await
}
