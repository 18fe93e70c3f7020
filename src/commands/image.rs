//! Recipe Image Commands
//!
//! Upload goes as multipart field `file`; the backend validates the type.

use recipe_core::{ApiError, ApiResult, ImageRef, RecipeId};
use reqwest::multipart::{Form, Part};
use wasm_bindgen_futures::JsFuture;

use super::{read_empty, read_json, ApiClient};

pub async fn upload_image_bytes(
    client: &ApiClient,
    id: RecipeId,
    file_name: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> ApiResult<ImageRef> {
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .map_err(|e| ApiError::Decode(format!("bad mime type {}: {}", mime, e)))?;
    let form = Form::new().part("file", part);
    let sent = client
        .http
        .put(client.url(&format!("/recipes/{}/image", id)))
        .multipart(form)
        .send()
        .await;
    read_json(sent).await
}

/// Read a picked file and upload it
pub async fn upload_image(client: &ApiClient, id: RecipeId, file: web_sys::File) -> ApiResult<ImageRef> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Decode(format!("could not read file: {:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    upload_image_bytes(client, id, &file.name(), &mime, bytes).await
}

pub async fn delete_image(client: &ApiClient, id: RecipeId) -> ApiResult<()> {
    let sent = client.http.delete(client.url(&format!("/recipes/{}/image", id))).send().await;
    read_empty(sent).await
}
