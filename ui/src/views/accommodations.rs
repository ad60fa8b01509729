use dioxus::prelude::*;

use crate::data::ACCOMMODATIONS;
use crate::sections::{AccommodationCard, Footer};
use crate::t;

use super::use_locale;

#[component]
pub fn Accommodations() -> Element {
    let locale = use_locale();

    rsx! {
        div { class: "page page-stays", dir: locale.dir(), lang: locale.code(),
            section { class: "section",
                div { class: "section__inner",
                    h1 { class: "section__title", {t!(locale, "nav-accommodations")} }
                    p { class: "section__intro", {t!(locale, "accommodations-intro")} }
                    div { class: "stays__grid",
                        for accommodation in ACCOMMODATIONS.iter() {
                            AccommodationCard { key: "{accommodation.id}", locale, accommodation }
                        }
                    }
                }
            }
            Footer { locale }
        }
    }
}
