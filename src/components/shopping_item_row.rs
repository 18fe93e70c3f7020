//! Shopping Item Row Component
//!
//! One line of the shopping list. Handlers receive the row's display index.

use leptos::prelude::*;
use recipe_core::shopping::ShoppingItem;

#[component]
pub fn ShoppingItemRow(
    index: usize,
    item: ShoppingItem,
    /// First tap at quantity 1 landed here; the next one removes
    #[prop(into)]
    pending: Signal<bool>,
    on_increase: Callback<usize>,
    on_decrease: Callback<usize>,
    on_toggle: Callback<usize>,
) -> impl IntoView {
    let row_class = move || {
        let mut class = String::from("shopping-item");
        if item.done {
            class.push_str(" done");
        }
        if pending.get() {
            class.push_str(" pending-remove");
        }
        class
    };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=item.done
                on:change=move |_| on_toggle.run(index)
            />
            <span class="item-name">{item.name.clone()}</span>
            <span class="qty-controls">
                <button class="qty-btn" on:click=move |_| on_decrease.run(index)>"−"</button>
                <span class="qty">{item.quantity}</span>
                <button class="qty-btn" on:click=move |_| on_increase.run(index)>"+"</button>
            </span>
            <Show when=move || pending.get()>
                <span class="remove-hint">"Tap again to remove"</span>
            </Show>
        </li>
    }
}
