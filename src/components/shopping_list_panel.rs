//! Shopping List Panel Component
//!
//! Manual add form, the list in display order, and the two-step clear.
//! Every change goes through the engine and then re-reads the stored list.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use recipe_core::shopping::{AddOutcome, ClearConfirmation, DecreaseOutcome};
use recipe_core::ShoppingError;

use crate::components::{ConfirmButton, ShoppingItemRow};
use crate::context::{use_app_context, AppContext};
use crate::models::ToastKind;
use crate::store::{store_refresh_shopping, use_app_store, AppStateStoreFields};

fn report_failure(ctx: &AppContext, err: &ShoppingError) {
    log::error!("[SHOPPING] {}", err);
    ctx.notify(ToastKind::Error, "Could not update shopping list");
}

#[component]
pub fn ShoppingListPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (new_name, set_new_name) = signal(String::new());
    // Expiry of the current "tap again" window; replacing it cancels the old one
    let removal_timer = StoredValue::new_local(None::<Timeout>);
    let pending_clear = StoredValue::new(None::<ClearConfirmation>);

    // Any other change may move rows, so the "tap again" hint is dropped
    let reset_pending = move || {
        removal_timer.set_value(None);
        if ctx.session.with_untracked(|s| s.removal.pending_index().is_some()) {
            ctx.session.update(|s| s.removal.disarm());
        }
    };

    let add_manual = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let engine = ctx.shopping();
        match engine.add_manual(&new_name.get_untracked()) {
            Ok(AddOutcome::Ignored) => {}
            Ok(_) => {
                reset_pending();
                set_new_name.set(String::new());
                store_refresh_shopping(&store, &engine);
            }
            Err(err) => report_failure(&ctx, &err),
        }
    };

    let on_increase = Callback::new(move |index: usize| {
        let engine = ctx.shopping();
        match engine.increase_qty(index) {
            Ok(_) => {
                reset_pending();
                store_refresh_shopping(&store, &engine);
            }
            Err(err) => report_failure(&ctx, &err),
        }
    });

    let on_decrease = Callback::new(move |index: usize| {
        let engine = ctx.shopping();
        let now_ms = js_sys::Date::now() as u64;
        let outcome = ctx
            .session
            .try_update(|session| engine.decrease_qty(session, index, now_ms));
        match outcome {
            Some(Ok(DecreaseOutcome::Decremented(_))) => store_refresh_shopping(&store, &engine),
            Some(Ok(DecreaseOutcome::ConfirmRemoval(ticket))) => {
                let window_ms = ctx.session.with_untracked(|s| s.removal.window_ms());
                let timer = Timeout::new(window_ms as u32, move || {
                    ctx.session.try_update(|s| s.removal.expire(ticket));
                });
                removal_timer.set_value(Some(timer));
            }
            Some(Ok(DecreaseOutcome::Removed(name))) => {
                removal_timer.set_value(None);
                log::info!("[SHOPPING] Removed {}", name);
                store_refresh_shopping(&store, &engine);
            }
            Some(Err(err)) => report_failure(&ctx, &err),
            None => {}
        }
    });

    let on_toggle = Callback::new(move |index: usize| {
        let engine = ctx.shopping();
        match engine.toggle_done(index) {
            Ok(_) => {
                reset_pending();
                store_refresh_shopping(&store, &engine);
            }
            Err(err) => report_failure(&ctx, &err),
        }
    });

    let request_clear = Callback::new(move |_: ()| {
        pending_clear.set_value(Some(ctx.shopping().request_clear()));
    });

    let confirm_clear = Callback::new(move |_: ()| {
        let mut confirmation = None;
        pending_clear.update_value(|c| confirmation = c.take());
        let Some(confirmation) = confirmation else {
            return;
        };
        let engine = ctx.shopping();
        match engine.confirm_clear(confirmation) {
            Ok(()) => {
                reset_pending();
                store_refresh_shopping(&store, &engine);
                ctx.notify(ToastKind::Success, "Shopping list cleared");
            }
            Err(err) => report_failure(&ctx, &err),
        }
    });

    let cancel_clear = Callback::new(move |_: ()| {
        pending_clear.set_value(None);
    });

    let pending_index = move || ctx.session.with(|s| s.removal.pending_index());

    view! {
        <section class="shopping-list">
            <h2>"Shopping list"</h2>
            <form class="shopping-add" on:submit=add_manual>
                <input
                    id="shopping-input"
                    type="text"
                    placeholder="Add item..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
            <Show
                when=move || !store.shopping_items().with(|items| items.is_empty())
                fallback=|| view! { <p class="empty">"Your shopping list is empty"</p> }
            >
                <ul id="shopping-items">
                    {move || {
                        store
                            .shopping_items()
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let pending = Signal::derive(move || pending_index() == Some(index));
                                view! {
                                    <ShoppingItemRow
                                        index=index
                                        item=item
                                        pending=pending
                                        on_increase=on_increase
                                        on_decrease=on_decrease
                                        on_toggle=on_toggle
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <ConfirmButton
                    button_class="clear-btn"
                    label="Clear list"
                    prompt="Clear the whole list?"
                    on_request=request_clear
                    on_confirm=confirm_clear
                    on_cancel=cancel_clear
                />
            </Show>
        </section>
    }
}
