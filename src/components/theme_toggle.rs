//! Theme Toggle Component

use leptos::prelude::*;
use recipe_core::Theme;

use crate::context::use_app_context;
use crate::storage::{load_theme, save_theme};

fn apply_theme(theme: Theme) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_2(Theme::Cyber.as_class(), Theme::Scandi.as_class());
    let _ = classes.add_1(theme.as_class());
}

/// Switch between the two page themes; restores the saved one on mount
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let theme_key = ctx.config().theme_key;
    let theme = RwSignal::new(load_theme(&theme_key));

    Effect::new(move |_| {
        let current = theme.get();
        apply_theme(current);
        save_theme(&theme_key, current);
    });

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Cyber => "☀",
                Theme::Scandi => "☾",
            }}
        </button>
    }
}
