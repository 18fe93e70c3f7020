//! Instructions Modal Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::markdown::render_instructions;

#[component]
pub fn InstructionsModal(title: String, text: String) -> impl IntoView {
    let ctx = use_app_context();
    let html = render_instructions(&text);

    view! {
        <div id="modal" class="modal" on:click=move |_| ctx.close_modal()>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <span class="close" on:click=move |_| ctx.close_modal()>"×"</span>
                <h3>{title}</h3>
                <div id="modal-text" inner_html=html></div>
            </div>
        </div>
    }
}
