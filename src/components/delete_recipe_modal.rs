//! Delete Recipe Modal Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{RecipeApi, RecipeId};

use crate::context::use_app_context;
use crate::models::ToastKind;
use crate::store::{store_remove_recipe, use_app_store};

#[component]
pub fn DeleteRecipeModal(recipe_id: RecipeId, name: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let confirm_delete = move |_| {
        spawn_local(async move {
            match ctx.api().delete_recipe(recipe_id).await {
                Ok(()) => {
                    ctx.close_modal();
                    store_remove_recipe(&store, recipe_id);
                    ctx.reload();
                    ctx.notify(ToastKind::Success, "Recipe deleted");
                }
                Err(err) => ctx.report(&err, "Failed to delete recipe"),
            }
        });
    };

    view! {
        <div id="delete-modal" class="modal">
            <div class="modal-content">
                <p id="delete-text">{format!("Are you sure you want to delete \"{}\"?", name)}</p>
                <div class="modal-actions">
                    <button class="danger" on:click=confirm_delete>"Yes, delete"</button>
                    <button class="secondary" on:click=move |_| ctx.close_modal()>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}
