//! New Recipe Form Component
//!
//! Collapsible form for creating recipes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{RecipeApi, RecipeDraft};

use crate::context::use_app_context;
use crate::models::ToastKind;

/// Form for creating new recipes
#[component]
pub fn NewRecipeForm() -> impl IntoView {
    let ctx = use_app_context();

    let (open, set_open) = signal(false);
    let draft = RwSignal::new(RecipeDraft::default());

    let create_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get();
        if !body.is_submittable() {
            return;
        }

        spawn_local(async move {
            match ctx.api().create_recipe(&body).await {
                Ok(created) => {
                    log::info!("[RECIPES] Created recipe {}", created.id);
                    draft.set(RecipeDraft::default());
                    ctx.reload();
                    ctx.notify(ToastKind::Success, "Recipe saved");
                }
                Err(err) => ctx.report(&err, "Failed to save recipe"),
            }
        });
    };

    view! {
        <button
            id="add-recipe-btn"
            class=move || if open.get() { "add-recipe-btn active" } else { "add-recipe-btn" }
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            "+ Add recipe"
        </button>

        <Show when=move || open.get()>
            <form id="add-recipe-form" class="recipe-form" on:submit=create_recipe>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
                <textarea
                    placeholder="Ingredients (one per line)"
                    prop:value=move || draft.with(|d| d.ingredients.clone())
                    on:input=move |ev| draft.update(|d| d.ingredients = event_target_value(&ev))
                ></textarea>
                <textarea
                    placeholder="Instructions"
                    prop:value=move || draft.with(|d| d.instructions.clone())
                    on:input=move |ev| draft.update(|d| d.instructions = event_target_value(&ev))
                ></textarea>
                <label class="public-switch">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.is_public)
                        on:change=move |ev| draft.update(|d| d.is_public = event_target_checked(&ev))
                    />
                    "Public"
                </label>
                <button type="submit">"Save recipe"</button>
            </form>
        </Show>
    }
}
