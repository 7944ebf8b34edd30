use dioxus::prelude::*;

use crate::core::years::YearSelector;

#[component]
pub fn YearNav(
    selected: YearSelector,
    can_go_prev: bool,
    can_go_next: bool,
    total_label: String,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "year-nav",
            button {
                r#type: "button",
                class: "year-nav__button",
                disabled: !can_go_prev,
                aria_label: "Show an earlier year",
                onclick: move |_| on_prev.call(()),
                "‹"
            }
            div { class: "year-nav__summary",
                span { class: "year-nav__selection", "{selected}" }
                span { class: "year-nav__total", "{total_label}" }
            }
            button {
                r#type: "button",
                class: "year-nav__button",
                disabled: !can_go_next,
                aria_label: "Show a later year",
                onclick: move |_| on_next.call(()),
                "›"
            }
        }
    }
}
