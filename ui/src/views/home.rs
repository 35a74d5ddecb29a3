use dioxus::prelude::*;

use crate::nav::NavItem;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__sections",
                for item in NavItem::ALL {
                    li { key: "{item.path()}", {item.label()} }
                }
            }
        }
    }
}
