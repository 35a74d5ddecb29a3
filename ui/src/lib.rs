//! Shared UI crate for CryptoExchange. The navbar, its entries, and the pages
//! it links to live here; platform crates only supply routing and launch.

use dioxus::prelude::*;

pub mod i18n;
pub mod nav;
pub mod views;

pub mod components {
    mod navbar;
    pub use navbar::register_nav;
    pub use navbar::NavBuilder;
    pub use navbar::Navbar;
}

/// Shared site theme (`ui/assets/theme/main.css`).
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
