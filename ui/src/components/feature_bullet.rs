use dioxus::prelude::*;

use super::icons::{Icon, SvgIcon};

/// One icon + label line in the hero's feature grid.
#[component]
pub fn FeatureBullet(icon: Icon, text: String) -> Element {
    rsx! {
        div { class: "feature-bullet",
            div { class: "feature-bullet__icon",
                SvgIcon { icon, class: "icon icon--bold" }
            }
            span { class: "feature-bullet__text", "{text}" }
        }
    }
}
