use dioxus::prelude::*;

use crate::data::site::{Anchor, HERO_IMAGE};
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn Hero(locale: Locale) -> Element {
    rsx! {
        section {
            id: Anchor::Home.id(),
            class: "hero",
            style: "background-image: url('{HERO_IMAGE}')",
            div { class: "hero__overlay" }
            div { class: "hero__content",
                h1 { class: "hero__title", {t!(locale, "hero-title")} }
                p { class: "hero__subtitle", {t!(locale, "hero-subtitle")} }
                a { class: "button button--primary", href: Anchor::About.href(),
                    {t!(locale, "hero-cta")}
                }
            }
        }
    }
}
