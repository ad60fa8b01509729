use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::booking::{today, AvailabilityProvider, BookingCard, RandomAvailability};
use crate::core::format::format_rating;
use crate::core::SiteConfig;
use crate::data::accommodations::{self, Lookup};
use crate::gallery::ImageGallery;
use crate::sections::Footer;
use crate::t;

use super::use_locale;

/// Amenities listed before the "Show all" toggle.
const AMENITIES_PREVIEW: usize = 6;

/// Route entry point. The page body is keyed by the raw id, so switching
/// records remounts it with a fresh calendar, stay and amenities toggle.
#[component]
pub fn AccommodationDetails(id: String) -> Element {
    let lookup = accommodations::find(&id);
    rsx! {
        StayDetails { key: "{id}", lookup }
    }
}

fn fallback_warning(lookup: &Lookup) -> Option<String> {
    match lookup {
        Lookup::Found(_) => None,
        Lookup::Fallback { requested, record } => Some(format!(
            "unknown accommodation id {requested:?}, showing {}",
            record.name
        )),
    }
}

#[component]
fn StayDetails(lookup: Lookup<'static>) -> Element {
    let locale = use_locale();
    let policy = try_use_context::<SiteConfig>()
        .unwrap_or_default()
        .availability;
    let provider = try_use_context::<AvailabilityProvider>();
    // One calendar per mount; revisiting the page draws a new one.
    let availability = use_signal(move || {
        provider
            .unwrap_or_else(|| AvailabilityProvider::new(RandomAvailability::new(policy)))
            .availability(today())
    });
    let mut show_all = use_signal(|| false);

    let warning = fallback_warning(&lookup);
    use_hook(move || {
        if let Some(message) = warning {
            warn!("{message}");
        }
    });

    let marker = if lookup.is_fallback() { "fallback" } else { "found" };
    let accommodation = lookup.record();

    let amenities = if show_all() {
        accommodation.amenities
    } else {
        &accommodation.amenities[..accommodation.amenities.len().min(AMENITIES_PREVIEW)]
    };
    let has_more = accommodation.amenities.len() > AMENITIES_PREVIEW;
    let host = &accommodation.host;

    rsx! {
        div {
            class: "page page-details",
            dir: locale.dir(),
            lang: locale.code(),
            "data-lookup": marker,

            div { class: "details__bar",
                Link { class: "details__back", to: "/accommodations", "← " {t!(locale, "common-back")} }
                div { class: "details__actions",
                    button { r#type: "button", class: "button button--ghost", {t!(locale, "detail-share")} }
                    button { r#type: "button", class: "button button--ghost", {t!(locale, "detail-save")} }
                }
            }

            header { class: "details__header",
                h1 { "{accommodation.name}" }
                div { class: "details__summary",
                    span { class: "details__rating", "★ {format_rating(accommodation.rating)}" }
                    span { {t!(locale, "detail-reviews", count = accommodation.reviews)} }
                    span { class: "details__location", "{accommodation.location}" }
                }
            }

            ImageGallery { locale, name: accommodation.name, images: accommodation.images }

            div { class: "details__layout",
                div { class: "details__main",
                    div { class: "details__features",
                        for feature in accommodation.features {
                            span { key: "{feature}", class: "tag", "{feature}" }
                        }
                    }

                    section { class: "details__section",
                        h2 { {t!(locale, "detail-about")} }
                        p { "{accommodation.description}" }
                    }

                    section { class: "details__section",
                        h2 { {t!(locale, "detail-amenities")} }
                        ul { class: "details__amenities",
                            for amenity in amenities {
                                li { key: "{amenity}", "{amenity}" }
                            }
                        }
                        if has_more {
                            button {
                                r#type: "button",
                                class: "button button--outline",
                                onclick: move |_| show_all.set(!show_all()),
                                if show_all() {
                                    {t!(locale, "detail-show-less")}
                                } else {
                                    {t!(locale, "detail-show-all", count = accommodation.amenities.len())}
                                }
                            }
                        }
                    }

                    section { class: "details__section host-card",
                        img { class: "host-card__avatar", src: host.avatar, alt: host.name }
                        div {
                            h3 { {t!(locale, "detail-hosted-by", name = host.name)} }
                            p { {t!(locale, "detail-joined", year = host.joined)} }
                        }
                        button { r#type: "button", class: "button button--outline",
                            {t!(locale, "detail-contact-host")}
                        }
                    }
                }

                BookingCard { locale, accommodation, availability }
            }

            Footer { locale }
        }
    }
}
