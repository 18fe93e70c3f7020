//! Recipe Box Frontend App
//!
//! Nav bar on top, then either the recipe browser or the shopping list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use recipe_core::{AppConfig, RecipeApi};

use crate::components::{
    ModalHost, NavBar, NewRecipeForm, RecipeList, SearchBar, ShoppingListPanel, ToastHost,
};
use crate::context::AppContext;
use crate::models::View;
use crate::store::{store_refresh_shopping, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new(config, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    let store = Store::new(AppState::default());
    provide_context(store);

    // Shopping list lives in local storage only; read it once on mount
    store_refresh_shopping(&store, &ctx.shopping());

    // Load essentials and recipes when trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] Loading recipes, trigger={}", trigger);
        spawn_local(async move {
            let api = ctx.api();
            match api.essential_map().await {
                Ok(map) => {
                    log::debug!("[APP] Essential map has {} entries", map.len());
                    store.essentials().set(map);
                }
                // Without the map every ingredient counts as essential
                Err(err) => log::warn!("[APP] Essential map unavailable: {}", err),
            }
            match api.list_recipes().await {
                Ok(loaded) => {
                    log::info!("[APP] Loaded {} recipes", loaded.len());
                    store.recipes().set(loaded);
                }
                Err(err) => ctx.report(&err, "Failed to load recipes"),
            }
        });
    });

    view! {
        <NavBar />
        <main class="container">
            {move || match ctx.view.get() {
                View::Recipes => view! {
                    <SearchBar />
                    <NewRecipeForm />
                    <RecipeList />
                }.into_any(),
                View::Shopping => view! { <ShoppingListPanel /> }.into_any(),
            }}
        </main>
        <ModalHost />
        <ToastHost />
    }
}
