use crate::i18n;
use crate::nav::{NavItem, BRAND_NAME, BRAND_PATH};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Three horizontal bars (hamburger icon).
const TOGGLE_ICON_PATH: &str = "M4 6h16M4 12h16M4 18h16";

/// Platforms can (optionally) register a `NavBuilder` that turns a target path
/// into a router-aware link, so `ui` does not need to know each platform's
/// `Route` enum.
///
/// The navbar calls `link` for the brand link and for every entry, passing the
/// target path, the css class the element must carry, and the label to render
/// as its only child.
///
/// If no builder is registered, plain `a[href]` anchors are rendered instead.
///
/// Example (in a platform crate):
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
///
/// fn nav_link(href: &'static str, class: &'static str, label: &str) -> Element {
///     match href.parse::<Route>() {
///         Ok(route) => rsx!(Link { class, to: route, "{label}" }),
///         Err(_) => rsx!(a { class, href, "{label}" }),
///     }
/// }
///
/// register_nav(NavBuilder { link: nav_link });
/// ```
pub struct NavBuilder {
    pub link: fn(href: &'static str, class: &'static str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform link builder. The first registration wins.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

fn nav_link(
    builder: Option<&NavBuilder>,
    href: &'static str,
    class: &'static str,
    label: &str,
) -> Element {
    match builder {
        Some(b) => (b.link)(href, class, label),
        None => rsx! {
            a { class: class, href: href, "{label}" }
        },
    }
}

/// Site navigation bar: brand link, the fixed entry list (wide viewports) and
/// the menu toggle (narrow viewports).
///
/// The toggle has no handler attached; activating it changes nothing.
#[component]
pub fn Navbar() -> Element {
    i18n::init();

    let builder = NAV_BUILDER.get();
    debug!(
        entries = NavItem::ALL.len(),
        routed = builder.is_some(),
        "navbar render"
    );

    let brand = nav_link(builder, BRAND_PATH, "navbar__brand", BRAND_NAME);
    let nav_label = t!("nav-primary-label");
    let toggle_label = t!("nav-menu-toggle");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar", aria_label: "{nav_label}",
            div { class: "navbar__inner",
                {brand}

                div { class: "navbar__menu",
                    ul { class: "navbar__links",
                        for item in NavItem::ALL {
                            li { key: "{item.path()}", class: "navbar__item",
                                {nav_link(builder, item.path(), "navbar__link", &item.label())}
                            }
                        }
                    }
                }

                button {
                    class: "navbar__toggle",
                    r#type: "button",
                    aria_label: "{toggle_label}",
                    span { class: "navbar__toggle-icon",
                        svg {
                            class: "navbar__toggle-svg",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                d: TOGGLE_ICON_PATH,
                            }
                        }
                    }
                }
            }
        }
    }
}
