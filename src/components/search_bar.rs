//! Search Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Filters the recipe list as the user types
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            id="search"
            type="search"
            placeholder="Search recipes..."
            prop:value=move || store.query().get()
            on:input=move |ev| store.query().set(event_target_value(&ev))
        />
    }
}
