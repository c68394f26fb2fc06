use dioxus::prelude::*;

use crate::core::catalog::Edition;

/// Two-button toggle choosing which language edition goes into the cart.
#[component]
pub fn EditionSelector(selected: Edition, on_select: EventHandler<Edition>) -> Element {
    rsx! {
        div { class: "edition-selector",
            h3 { class: "edition-selector__title", {crate::t!("hero-select-language")} }
            div { class: "edition-selector__options", role: "radiogroup",
                for edition in Edition::ALL {
                    button {
                        key: "{edition.label()}",
                        r#type: "button",
                        role: "radio",
                        aria_checked: "{edition == selected}",
                        class: option_class(edition == selected),
                        onclick: move |_| on_select.call(edition),
                        span { class: "edition-selector__flag", "{edition.flag()}" }
                        " {edition.label()}"
                    }
                }
            }
        }
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "edition-selector__option edition-selector__option--active"
    } else {
        "edition-selector__option"
    }
}
