use dioxus::prelude::*;

use crate::data::site::{Anchor, Service};
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn Services(locale: Locale) -> Element {
    rsx! {
        section { id: Anchor::Services.id(), class: "section services",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(locale, "services-title")} }
                div { class: "services__grid",
                    for service in Service::ALL {
                        article { key: "{service:?}", class: "service-card",
                            span { class: "service-card__icon {service.accent()}", "{service.icon()}" }
                            h3 { class: "service-card__title", {service.title(locale)} }
                            p { class: "service-card__body", {service.description(locale)} }
                        }
                    }
                }
            }
        }
    }
}
