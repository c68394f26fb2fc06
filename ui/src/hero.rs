use dioxus::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::components::{EditionSelector, FeatureBullet};
use crate::core::cart::StorefrontCart;
use crate::core::checkout::{self, Checkout, CheckoutOutcome, CtaState};
use crate::core::config::use_store_config;
use crate::core::platform;
use crate::t;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Landing hero: pitch, feature list and the add-to-cart card.
#[component]
pub fn Hero() -> Element {
    let config = use_store_config();
    let mut cart_state = use_signal(Checkout::default);
    let state = cart_state();

    let features = [
        (Icon::MapPin, t!("hero-feature-islands")),
        (Icon::CheckCircle, t!("hero-feature-planning")),
        (Icon::AlertCircle, t!("hero-feature-mistakes")),
        (Icon::Smartphone, t!("hero-feature-guide")),
        (Icon::Tag, t!("hero-feature-hotels")),
        (Icon::Search, t!("hero-feature-finder")),
    ];

    let on_add_to_cart = {
        let config = config.clone();
        move |_: MouseEvent| {
            let Some(request) = cart_state.write().begin(&config) else {
                return;
            };
            let cart = StorefrontCart::new(config.cart_add_endpoint.clone());
            let cart_page = config.cart_page.clone();
            spawn(async move {
                let outcome = checkout::submit(&cart, &request, &cart_page).await;
                cart_state.write().settle(&outcome);
                match outcome {
                    CheckoutOutcome::Redirect(url) => platform::navigate(&url),
                    CheckoutOutcome::Retry(kind) => platform::alert(&kind.message()),
                }
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero", class: "hero",
            div { class: "hero__glow", aria_hidden: "true" }

            div { class: "hero__container",
                div { class: "hero__columns",

                    div { class: "hero__copy",
                        div { class: "hero__trust",
                            div { class: "hero__stars",
                                for i in 0..5 {
                                    SvgIcon { key: "{i}", icon: Icon::Star, class: "icon icon--star" }
                                }
                            }
                            span { class: "hero__trust-text", {t!("hero-trust")} }
                        }

                        h2 { class: "hero__headline",
                            {t!("hero-headline-1")}
                            br { class: "hero__break" }
                            {t!("hero-headline-2")}
                            br { class: "hero__break" }
                            span { class: "hero__highlight",
                                {t!("hero-headline-highlight")}
                                svg {
                                    class: "hero__underline",
                                    view_box: "0 0 100 10",
                                    preserve_aspect_ratio: "none",
                                    "aria-hidden": "true",
                                    path {
                                        d: "M0 5 Q 50 15 100 5",
                                        stroke: "currentColor",
                                        stroke_width: "8",
                                        fill: "none",
                                    }
                                }
                            }
                        }

                        p { class: "hero__subheadline", {t!("hero-subheadline")} }

                        div { class: "hero__features",
                            for (i, (icon, text)) in features.into_iter().enumerate() {
                                FeatureBullet { key: "{i}", icon, text }
                            }
                        }

                        div { class: "cart-card",
                            EditionSelector {
                                selected: state.selected(),
                                on_select: move |edition| cart_state.write().select(edition),
                            }

                            div { class: "cart-card__price",
                                span { class: "cart-card__amount", "{config.price}" }
                                span { class: "cart-card__currency", "{config.currency}" }
                            }

                            button {
                                class: "cart-card__cta",
                                r#type: "button",
                                disabled: state.is_submitting(),
                                onclick: on_add_to_cart,
                                span { class: "cart-card__cta-label",
                                    if state.cta() == CtaState::Adding {
                                        {t!("hero-cta-adding")}
                                    } else {
                                        {t!("hero-cta-download")}
                                        SvgIcon { icon: Icon::Download, class: "icon icon--cta" }
                                    }
                                }
                                div { class: "cart-card__shine", aria_hidden: "true" }
                            }

                            div { class: "cart-card__assurance",
                                div { class: "cart-card__assurance-item",
                                    SvgIcon { icon: Icon::ShieldCheck, class: "icon icon--small" }
                                    span { {t!("hero-assurance-instant")} }
                                }
                                span { class: "cart-card__divider", "|" }
                                div { class: "cart-card__assurance-item",
                                    SvgIcon { icon: Icon::CheckCircle, class: "icon icon--small" }
                                    span { {t!("hero-assurance-updates")} }
                                }
                            }
                        }
                    }

                    div { class: "hero__visual",
                        div { class: "hero__cover",
                            img {
                                src: "{config.cover_image_url}",
                                alt: t!("hero-cover-alt"),
                                class: "hero__cover-image",
                            }
                        }
                        div { class: "hero__cover-glow", aria_hidden: "true" }
                    }
                }
            }
        }
    }
}
