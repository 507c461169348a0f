//! Overlay used for login and signup opened over another page.
//!
//! Closing (backdrop click, Escape, close button) is delegated to `on_close`;
//! the app root maps it to a history back so the background page stays.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use flows::messages::MessageKey;
use leptos::prelude::*;

use crate::state::i18n::I18n;

fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

#[component]
pub fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let dialog = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = dialog.get() {
            let _ = el.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                node_ref=dialog
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button
                    type="button"
                    class="modal__close"
                    aria-label=move || i18n.t(MessageKey::CommonClose)
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}
