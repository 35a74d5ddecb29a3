use dioxus::prelude::*;

#[component]
pub fn Markets() -> Element {
    rsx! {
        section { class: "page page-markets",
            h1 { {crate::t!("markets-title")} }
            p { {crate::t!("markets-intro")} }
        }
    }
}
