//! Recipe List Component

use leptos::prelude::*;
use recipe_core::filter_recipes;

use crate::components::RecipeCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Recipes matching the search box
#[component]
pub fn RecipeList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let query = store.query().get();
        store.recipes().with(|recipes| {
            filter_recipes(recipes, &query).into_iter().cloned().collect::<Vec<_>>()
        })
    });

    view! {
        <div id="recipes-container" class="recipes-container">
            <For
                each=move || visible.get()
                key=|recipe| recipe.render_key()
                children=move |recipe| view! { <RecipeCard recipe=recipe /> }
            />
            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="empty-hint">"No recipes found"</p>
            </Show>
        </div>
    }
}
