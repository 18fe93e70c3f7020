//! Edit Recipe Modal Component
//!
//! Loads the recipe fresh, edits a draft, saves with PUT.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{RecipeApi, RecipeDraft, RecipeId};

use crate::context::use_app_context;
use crate::models::ToastKind;

#[component]
pub fn EditRecipeModal(recipe_id: RecipeId) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(None::<RecipeDraft>);

    // Load on open
    spawn_local(async move {
        match ctx.api().get_recipe(recipe_id).await {
            Ok(recipe) => draft.set(Some(recipe.to_draft())),
            Err(err) => {
                ctx.close_modal();
                ctx.report(&err, "Failed to load recipe");
            }
        }
    });

    let save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = draft.get_untracked() else {
            return;
        };
        if !body.is_submittable() {
            return;
        }
        spawn_local(async move {
            match ctx.api().update_recipe(recipe_id, &body).await {
                Ok(_) => {
                    ctx.close_modal();
                    ctx.reload();
                    ctx.notify(ToastKind::Success, "Recipe updated");
                }
                Err(err) => ctx.report(&err, "Failed to update recipe"),
            }
        });
    };

    let field = move |get: fn(&RecipeDraft) -> String| {
        move || draft.with(|d| d.as_ref().map(get).unwrap_or_default())
    };

    view! {
        <div id="edit-modal" class="modal">
            <div class="modal-content">
                <span class="close" on:click=move |_| ctx.close_modal()>"×"</span>
                <h3>"Edit recipe"</h3>
                <Show
                    when=move || draft.with(|d| d.is_some())
                    fallback=|| view! { <p class="loading">"Loading..."</p> }
                >
                    <form class="recipe-form" on:submit=save_edit>
                        <input
                            id="edit-name"
                            type="text"
                            prop:value=field(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| if let Some(d) = d { d.name = event_target_value(&ev) })
                        />
                        <input
                            id="edit-description"
                            type="text"
                            prop:value=field(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| if let Some(d) = d { d.description = event_target_value(&ev) })
                        />
                        <textarea
                            id="edit-ingredients"
                            prop:value=field(|d| d.ingredients.clone())
                            on:input=move |ev| draft.update(|d| if let Some(d) = d { d.ingredients = event_target_value(&ev) })
                        ></textarea>
                        <textarea
                            id="edit-instructions"
                            prop:value=field(|d| d.instructions.clone())
                            on:input=move |ev| draft.update(|d| if let Some(d) = d { d.instructions = event_target_value(&ev) })
                        ></textarea>
                        <div class="modal-actions">
                            <button type="submit">"Save"</button>
                            <button type="button" class="secondary" on:click=move |_| ctx.close_modal()>"Cancel"</button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}
