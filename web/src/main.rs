use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, Navbar};
use ui::views::{Exchange, Home, Markets, Support, Wallet};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/markets")]
    Markets {},
    #[route("/wallet")]
    Wallet {},
    #[route("/exchange")]
    Exchange {},
    #[route("/support")]
    Support {},
}

/// Resolve a navbar target to a typed route; unknown paths fall back to a plain anchor.
fn nav_link(href: &'static str, class: &'static str, label: &str) -> Element {
    match href.parse::<Route>() {
        Ok(route) => rsx!(Link { class: class, to: route, "{label}" }),
        Err(_) => {
            warn!(href, "navbar target has no route");
            rsx!(a { class: class, href: href, "{label}" })
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}
