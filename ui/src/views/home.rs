use dioxus::prelude::*;

use crate::Hero;

/// The landing page: a single hero section.
#[component]
pub fn Home() -> Element {
    #[cfg(debug_assertions)]
    tracing::debug!("Home render");

    rsx! {
        main { class: "page page-home",
            Hero {}
        }
    }
}
