use dioxus::prelude::*;

use crate::components::app_navbar::all_stays_link;
use crate::core::format::{format_price, format_rating};
use crate::data::site::Anchor;
use crate::data::{Accommodation, ACCOMMODATIONS};
use crate::i18n::Locale;
use crate::t;

#[component]
pub fn AccommodationCard(locale: Locale, accommodation: &'static Accommodation) -> Element {
    let href = accommodation.details_href();
    rsx! {
        article { class: "stay-card",
            div { class: "stay-card__media",
                img { src: accommodation.cover(), alt: accommodation.name }
                span { class: "stay-card__rating", "★ {format_rating(accommodation.rating)}" }
            }
            div { class: "stay-card__body",
                h3 { class: "stay-card__name", "{accommodation.name}" }
                p { class: "stay-card__location", "{accommodation.location}" }
                div { class: "stay-card__tags",
                    for feature in accommodation.card_features() {
                        span { key: "{feature}", class: "tag", "{feature}" }
                    }
                }
                div { class: "stay-card__meta",
                    span { {t!(locale, "accommodations-guests", count = accommodation.guests)} }
                    span { {t!(locale, "accommodations-reviews", count = accommodation.reviews)} }
                }
                div { class: "stay-card__footer",
                    span { class: "stay-card__price",
                        strong { "{format_price(accommodation.price)}" }
                        " "
                        {t!(locale, "accommodations-per-night")}
                    }
                    Link { class: "button button--primary", to: href,
                        {t!(locale, "common-book-now")}
                    }
                }
            }
        }
    }
}

/// Landing-page listing of every stay.
#[component]
pub fn Accommodations(locale: Locale) -> Element {
    rsx! {
        section { id: Anchor::Accommodations.id(), class: "section stays",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(locale, "nav-accommodations")} }
                p { class: "section__intro", {t!(locale, "accommodations-intro")} }
                div { class: "stays__grid",
                    for accommodation in ACCOMMODATIONS.iter() {
                        AccommodationCard { key: "{accommodation.id}", locale, accommodation }
                    }
                }
                div { class: "stays__more", {all_stays_link(&t!(locale, "common-view-all"))} }
            }
        }
    }
}
