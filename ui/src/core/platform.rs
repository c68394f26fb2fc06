//! Browser side effects used by the checkout flow.
//!
//! On wasm32 these go through `web-sys`; native builds (tests, tooling) only
//! log what would have happened.

pub fn platform_string() -> String {
    if cfg!(target_arch = "wasm32") {
        "web".to_string()
    } else {
        std::env::consts::OS.to_string()
    }
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let shown = web_sys::window().and_then(|w| w.alert_with_message(message).ok());
        if shown.is_none() {
            tracing::warn!(%message, "unable to show alert");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(%message, "alert");
    }
}

/// Send the browser to `url`.
pub fn navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let result = web_sys::window()
            .map(|w| w.location())
            .map(|loc| loc.set_href(url));
        match result {
            Some(Ok(())) => {}
            Some(Err(err)) => tracing::error!(?err, %url, "navigation failed"),
            None => tracing::error!(%url, "no window to navigate"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(%url, "navigate");
    }
}
