use dioxus::prelude::*;

use crate::data::site::{Anchor, ABOUT_IMAGE};
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn About(locale: Locale) -> Element {
    rsx! {
        section { id: Anchor::About.id(), class: "section about",
            div { class: "section__inner about__grid",
                div { class: "about__text",
                    h2 { class: "section__title", {t!(locale, "about-title")} }
                    p { {t!(locale, "about-description")} }
                    div { class: "about__mission",
                        h3 { {t!(locale, "about-mission")} }
                        p { {t!(locale, "about-mission-text")} }
                    }
                }
                img {
                    class: "about__image",
                    src: ABOUT_IMAGE,
                    alt: t!(locale, "about-image-alt"),
                }
            }
        }
    }
}
