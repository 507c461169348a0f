//! Call-to-action button used across pages.

#[cfg(test)]
#[path = "neon_button_test.rs"]
mod neon_button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Ghost,
}

fn button_class(variant: Variant, full_width: bool) -> String {
    let mut class = String::from("neon-button");
    class.push_str(match variant {
        Variant::Primary => " neon-button--primary",
        Variant::Ghost => " neon-button--ghost",
    });
    if full_width {
        class.push_str(" neon-button--block");
    }
    class
}

#[component]
pub fn NeonButton(
    #[prop(optional)] variant: Variant,
    #[prop(optional)] full_width: bool,
    #[prop(into, default = "button".to_owned())] kind: String,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
    #[prop(optional)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=button_class(variant, full_width)
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
