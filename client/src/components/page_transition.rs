//! Wrapper that animates page changes in the inferred direction.

#[cfg(test)]
#[path = "page_transition_test.rs"]
mod page_transition_test;

use flows::direction::Direction;
use leptos::prelude::*;

use crate::state::nav::Navigation;

fn transition_class(direction: Direction) -> String {
    format!("page-transition page-transition--{}", direction.class_suffix())
}

#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let navigation = expect_context::<Navigation>();

    view! {
        <div class=move || transition_class(navigation.direction())>
            {children()}
        </div>
    }
}
