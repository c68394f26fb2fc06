use dioxus::prelude::*;

use ui::core::config::StoreConfig;
use ui::core::platform;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    use_context_provider(|| {
        let config = StoreConfig::default();
        if let Err(err) = config.validate() {
            tracing::error!(%err, "invalid store config");
        }
        tracing::info!(
            platform = %platform::platform_string(),
            endpoint = %config.cart_add_endpoint,
            "landing page mounted"
        );
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
