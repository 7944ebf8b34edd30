use dioxus::prelude::*;

use ui::views::ContributionsWidget;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    // The embeddable widget surface. `year` is "last" or a 4-digit year,
    // `theme` is "light" or "dark"; both are optional query parameters.
    #[route("/:user?:year&:theme")]
    Embed { user: String, year: String, theme: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        section { class: "landing",
            h1 { "Contribgrid" }
            p { "Embed a contribution calendar for any user." }
            p { class: "landing__hint",
                code { "/<user>?year=last&theme=light" }
            }
        }
    }
}

/// Route adapter: query parsing stays here, outside the widget core, which
/// receives plain string props.
#[component]
fn Embed(user: String, year: String, theme: String) -> Element {
    rsx! {
        ContributionsWidget { user, year, theme }
    }
}
