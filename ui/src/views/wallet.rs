use dioxus::prelude::*;

#[component]
pub fn Wallet() -> Element {
    rsx! {
        section { class: "page page-wallet",
            h1 { {crate::t!("wallet-title")} }
            p { {crate::t!("wallet-intro")} }
        }
    }
}
