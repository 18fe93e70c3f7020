//! Image Controls Component
//!
//! Owner-only upload/replace/delete of a recipe image.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{RecipeApi, RecipeId};

use crate::commands;
use crate::context::use_app_context;
use crate::models::ToastKind;

#[component]
pub fn ImageControls(recipe_id: RecipeId, has_image: bool) -> impl IntoView {
    let ctx = use_app_context();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_file_picked = move |_| {
        let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match commands::upload_image(&ctx.api(), recipe_id, file).await {
                Ok(image) => {
                    log::info!("[IMAGE] Recipe {} image -> {}", recipe_id, image.image);
                    ctx.reload();
                    ctx.notify(ToastKind::Success, "Image uploaded");
                }
                Err(err) => ctx.report(&err, "Failed to upload image"),
            }
        });
    };

    let on_delete = move |_| {
        spawn_local(async move {
            match ctx.api().delete_image(recipe_id).await {
                Ok(()) => {
                    ctx.reload();
                    ctx.notify(ToastKind::Success, "Image deleted");
                }
                Err(err) => ctx.report(&err, "Failed to delete image"),
            }
        });
    };

    view! {
        <label class="image-upload secondary">
            {if has_image { "Replace image" } else { "Add image" }}
            <input
                type="file"
                accept="image/*"
                style="display: none;"
                node_ref=file_input
                on:change=on_file_picked
            />
        </label>
        {has_image.then(|| view! {
            <button class="secondary" on:click=on_delete>"Remove image"</button>
        })}
    }
}
