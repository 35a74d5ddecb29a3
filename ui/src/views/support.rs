use dioxus::prelude::*;

#[component]
pub fn Support() -> Element {
    rsx! {
        section { class: "page page-support",
            h1 { {crate::t!("support-title")} }
            p { {crate::t!("support-intro")} }
        }
    }
}
