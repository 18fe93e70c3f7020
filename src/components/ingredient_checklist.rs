//! Ingredient Checklist Component
//!
//! Lists a recipe's ingredient lines. In shopping mode each line gets a
//! checkbox (essential ones pre-checked) and the selection can be merged into
//! the shopping list.

use leptos::prelude::*;
use recipe_core::extract_ingredients;

use crate::context::use_app_context;
use crate::models::ToastKind;
use crate::store::{store_refresh_shopping, use_app_store, AppStateStoreFields};

#[component]
pub fn IngredientChecklist(ingredients: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let choices = Memo::new(move |_| {
        store.essentials().with(|essentials| extract_ingredients(&ingredients, essentials))
    });
    let selected = RwSignal::new(Vec::<bool>::new());

    // Default selection follows the essential flags
    Effect::new(move |_| {
        let defaults = choices.with(|cs| cs.iter().map(|c| c.is_essential).collect());
        selected.set(defaults);
    });

    let add_selected = move |_| {
        let picked: Vec<String> = choices.with(|cs| {
            selected.with(|sel| {
                cs.iter()
                    .zip(sel.iter())
                    .filter(|(_, checked)| **checked)
                    .map(|(c, _)| c.display_text.clone())
                    .collect()
            })
        });

        let engine = ctx.shopping();
        match engine.add_from_selection(&picked) {
            Ok(0) => ctx.notify(ToastKind::Warn, "Nothing selected"),
            Ok(count) => {
                // Rows may have shifted under a pending "tap again"
                ctx.session.update(|s| s.removal.disarm());
                store_refresh_shopping(&store, &engine);
                ctx.notify(ToastKind::Success, format!("Added {} to shopping list", count));
            }
            Err(err) => {
                log::error!("[SHOPPING] add_from_selection failed: {}", err);
                ctx.notify(ToastKind::Error, "Could not update shopping list");
            }
        }
    };

    view! {
        <div class="ingredients-list">
            {move || {
                let shopping = ctx.shopping_mode();
                choices.get().into_iter().enumerate().map(|(index, choice)| {
                    if shopping {
                        view! {
                            <label class="ingredient">
                                <input
                                    type="checkbox"
                                    class="shopping-item"
                                    prop:checked=move || selected.with(|s| s.get(index).copied().unwrap_or(false))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selected.update(|s| {
                                            if let Some(slot) = s.get_mut(index) {
                                                *slot = checked;
                                            }
                                        });
                                    }
                                />
                                <span>{choice.display_text}</span>
                            </label>
                        }.into_any()
                    } else {
                        view! { <div class="ingredient">{choice.display_text}</div> }.into_any()
                    }
                }).collect_view()
            }}
            <Show when=move || ctx.shopping_mode()>
                <button class="add-to-list-btn" on:click=add_selected>
                    "Add selected to shopping list"
                </button>
            </Show>
        </div>
    }
}
