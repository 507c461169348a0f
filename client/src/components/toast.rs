//! Transient notice shown after sign-out.
//!
//! The toast stays visible for [`TOAST_DURATION`], then plays its exit
//! animation for [`TOAST_EXIT`] (skipped when the user prefers reduced
//! motion) and calls `on_done` exactly once.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;

pub const TOAST_DURATION: Duration = Duration::from_millis(3200);
pub const TOAST_EXIT: Duration = Duration::from_millis(420);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Visible,
    Leaving,
}

#[cfg(any(test, feature = "hydrate"))]
fn exit_delay(reduced_motion: bool) -> Duration {
    if reduced_motion { Duration::ZERO } else { TOAST_EXIT }
}

fn toast_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Visible => "toast",
        Phase::Leaving => "toast toast--leaving",
    }
}

#[component]
pub fn Toast(#[prop(into)] message: Signal<String>, on_done: Callback<()>) -> impl IntoView {
    let phase = RwSignal::new(Phase::Visible);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let exit = exit_delay(crate::util::browser::prefers_reduced_motion());
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(TOAST_DURATION).await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            phase.set(Phase::Leaving);
            gloo_timers::future::sleep(exit).await;
            if alive_task.swap(false, std::sync::atomic::Ordering::Relaxed) {
                on_done.run(());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class=move || toast_class(phase.get()) role="status" aria-live="polite">
            {move || message.get()}
        </div>
    }
}
