//! Pages the navbar targets. Each one is a static section; platforms map their
//! routes onto these components.

mod exchange;
mod home;
mod markets;
mod support;
mod wallet;

pub use exchange::Exchange;
pub use home::Home;
pub use markets::Markets;
pub use support::Support;
pub use wallet::Wallet;
