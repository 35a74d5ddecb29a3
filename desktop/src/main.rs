#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, Navbar};
use ui::views::{Exchange, Home, Markets, Support, Wallet};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; desktop ships no separate /assets.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("CryptoExchange – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(href: &'static str, class: &'static str, label: &str) -> Element {
    match href.parse::<Route>() {
        Ok(route) => rsx!(Link { class: class, to: route, "{label}" }),
        Err(_) => {
            warn!(href, "navbar target has no route");
            rsx!(a { class: class, href: href, "{label}" })
        }
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    rsx! {
        // Always inline the theme (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A desktop-specific layout around the shared `Navbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        Navbar {}

        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::nav::{NavItem, BRAND_PATH};

    #[test]
    fn every_nav_target_resolves_to_a_route() {
        assert_eq!(BRAND_PATH.parse::<Route>().ok(), Some(Route::Home {}));
        let routes: Vec<_> = NavItem::ALL
            .iter()
            .map(|item| item.path().parse::<Route>().ok())
            .collect();
        assert_eq!(
            routes,
            [
                Some(Route::Markets {}),
                Some(Route::Wallet {}),
                Some(Route::Exchange {}),
                Some(Route::Support {}),
            ]
        );
    }

    #[test]
    fn unknown_path_does_not_route() {
        assert!("/orders".parse::<Route>().is_err());
    }
}
