use dioxus::prelude::*;

#[component]
pub fn Exchange() -> Element {
    rsx! {
        section { class: "page page-exchange",
            h1 { {crate::t!("exchange-title")} }
            p { {crate::t!("exchange-intro")} }
        }
    }
}
