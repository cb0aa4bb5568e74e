//! Page-wide Escape key hook.
//!
//! The listener sits on the webview's `document`, so Escape works wherever
//! focus is (nav links, filter pills, nothing at all). It is added when the
//! owning component mounts and removed when it unmounts.

use dioxus::prelude::*;

/// Global slot holding the installed handler, so it can be removed again.
const HANDLER_SLOT: &str = "window.__portfolioEscapeHandler";

/// Installs the document listener and forwards each Escape press.
const INSTALL_LISTENER: &str = r#"
if (window.__portfolioEscapeHandler) {
    document.removeEventListener("keydown", window.__portfolioEscapeHandler);
}
window.__portfolioEscapeHandler = (event) => {
    if (event.key === "Escape") {
        dioxus.send("Escape");
    }
};
document.addEventListener("keydown", window.__portfolioEscapeHandler);
"#;

const REMOVE_LISTENER: &str = r#"
if (window.__portfolioEscapeHandler) {
    document.removeEventListener("keydown", window.__portfolioEscapeHandler);
    window.__portfolioEscapeHandler = null;
}
"#;

/// Call `on_escape` for every Escape press while the caller is mounted.
pub fn use_escape_key(mut on_escape: impl FnMut() + 'static) {
    let on_escape = use_callback(move |()| on_escape());

    // The task is cancelled on unmount; the drop hook removes the JS side.
    use_future(move || {
        let mut keys = dioxus::document::eval(INSTALL_LISTENER);
        async move {
            while let Ok(key) = keys.recv::<String>().await {
                if key == "Escape" {
                    on_escape.call(());
                }
            }
        }
    });

    use_drop(|| {
        let _ = dioxus::document::eval(REMOVE_LISTENER);
    });
}
