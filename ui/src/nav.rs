//! Fixed navigation entries shown in the site navbar.

use crate::t;

/// Brand label; a proper noun, never translated.
pub const BRAND_NAME: &str = "CryptoExchange";
/// Target of the brand link.
pub const BRAND_PATH: &str = "/";

/// One navigation entry (label + target path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Markets,
    Wallet,
    Exchange,
    Support,
}

impl NavItem {
    /// Every entry, in display order.
    pub const ALL: [NavItem; 4] = [
        NavItem::Markets,
        NavItem::Wallet,
        NavItem::Exchange,
        NavItem::Support,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            NavItem::Markets => "/markets",
            NavItem::Wallet => "/wallet",
            NavItem::Exchange => "/exchange",
            NavItem::Support => "/support",
        }
    }

    /// Localized display label.
    pub fn label(self) -> String {
        match self {
            NavItem::Markets => t!("nav-markets"),
            NavItem::Wallet => t!("nav-wallet"),
            NavItem::Exchange => t!("nav-exchange"),
            NavItem::Support => t!("nav-support"),
        }
    }
}
