//! Small browser helpers. Every function is a no-op outside the browser.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Whether the user asked the OS for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `lang` attribute on `<html>`.
pub fn set_document_lang(code: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("lang", code);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
    }
}

/// Step back one history entry.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
