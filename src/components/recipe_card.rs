//! Recipe Card Component
//!
//! One recipe box: description, ingredient checklist, and owner actions.

use leptos::prelude::*;
use recipe_core::Recipe;

use crate::components::{ImageControls, IngredientChecklist, VisibilityToggle};
use crate::context::use_app_context;
use crate::models::Modal;

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let ctx = use_app_context();

    let id = recipe.id;
    let name = recipe.name.clone();
    let instructions = recipe.instructions.clone();
    let has_image = recipe.image.is_some();

    let show_instructions = {
        let title = name.clone();
        move |_| {
            ctx.open_modal(Modal::Instructions {
                title: title.clone(),
                text: instructions.clone(),
            })
        }
    };

    let owner_actions = recipe.is_owner.then(|| {
        let name = name.clone();
        view! {
            <button class="secondary" on:click=move |_| ctx.open_modal(Modal::Edit(id))>"Edit"</button>
            <button
                class="danger"
                on:click=move |_| ctx.open_modal(Modal::Delete { id, name: name.clone() })
            >
                "Delete"
            </button>
            <VisibilityToggle recipe_id=id is_public=recipe.is_public />
            <ImageControls recipe_id=id has_image=has_image />
        }
    });

    view! {
        <div class="recipe-box">
            {recipe.image.clone().map(|src| view! {
                <img class="recipe-image" src=src alt="" />
            })}
            <h3>{name.clone()}</h3>
            <p><strong>"Description: "</strong>{recipe.description.clone()}</p>
            <p><strong>"Ingredients:"</strong></p>
            <IngredientChecklist ingredients=recipe.ingredients.clone() />
            <div class="recipe-actions">
                <button class="secondary" on:click=show_instructions>"View Instructions"</button>
                {owner_actions}
            </div>
        </div>
    }
}
