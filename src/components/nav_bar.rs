//! Navigation Bar Component
//!
//! Burger menu with the two views, shopping mode and theme switches, plus a
//! dump of the recent log lines.

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::context::use_app_context;
use crate::models::View;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);
    let (log_open, set_log_open) = signal(false);

    let open_count = move || store.shopping_items().with(|items| items.iter().filter(|i| !i.done).count());

    let go = move |view: View| {
        ctx.view.set(view);
        set_menu_open.set(false);
    };

    view! {
        <nav class="nav-bar">
            <button
                class=move || if menu_open.get() { "burger active" } else { "burger" }
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <span class="nav-title">"Recipe Box"</span>
            <ul class=move || if menu_open.get() { "nav-menu open" } else { "nav-menu" }>
                <li>
                    <button
                        class=move || if ctx.view.get() == View::Recipes { "nav-link active" } else { "nav-link" }
                        on:click=move |_| go(View::Recipes)
                    >
                        "Recipes"
                    </button>
                </li>
                <li>
                    <button
                        class=move || if ctx.view.get() == View::Shopping { "nav-link active" } else { "nav-link" }
                        on:click=move |_| go(View::Shopping)
                    >
                        "Shopping list"
                        <span class="nav-badge">{open_count}</span>
                    </button>
                </li>
                <li>
                    <label class="shopping-mode-switch">
                        <input
                            type="checkbox"
                            prop:checked=move || ctx.shopping_mode()
                            on:change=move |_| ctx.toggle_shopping_mode()
                        />
                        "Shopping mode"
                    </label>
                </li>
                <li>
                    <button class="nav-link" on:click=move |_| set_log_open.update(|open| *open = !*open)>
                        "Debug log"
                    </button>
                </li>
            </ul>
            <ThemeToggle />
        </nav>
        <Show when=move || log_open.get()>
            // Snapshot of the logger ring taken when the panel opens
            <pre class="log-dump">{console_logger::recent_lines().join("\n")}</pre>
        </Show>
    }
}
