//! Modal Host Component
//!
//! Renders whichever modal is open in the context.

use leptos::prelude::*;

use crate::components::{DeleteRecipeModal, EditRecipeModal, InstructionsModal};
use crate::context::use_app_context;
use crate::models::Modal;

#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.modal.get().map(|modal| match modal {
            Modal::Instructions { title, text } => {
                view! { <InstructionsModal title=title text=text /> }.into_any()
            }
            Modal::Edit(id) => view! { <EditRecipeModal recipe_id=id /> }.into_any(),
            Modal::Delete { id, name } => {
                view! { <DeleteRecipeModal recipe_id=id name=name /> }.into_any()
            }
        })
    }
}
