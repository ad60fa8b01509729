use dioxus::prelude::*;

use crate::data::site::{Anchor, Service, CONTACT_EMAIL, CONTACT_PHONE, SOCIAL_LINKS};
use crate::i18n::Locale;
use crate::t;

const QUICK_LINKS: [Anchor; 5] = [
    Anchor::Home,
    Anchor::About,
    Anchor::Services,
    Anchor::Accommodations,
    Anchor::Contact,
];

#[component]
pub fn Footer(locale: Locale) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__about",
                    span { class: "footer__brand", "Touriver" }
                    p { {t!(locale, "footer-blurb")} }
                    span { class: "badge", {t!(locale, "contact-partner-badge")} }
                }
                div {
                    h4 { {t!(locale, "footer-quick-links")} }
                    ul {
                        for anchor in QUICK_LINKS {
                            li { key: "{anchor.id()}",
                                a { href: anchor.href(), {anchor.label(locale)} }
                            }
                        }
                    }
                }
                div {
                    h4 { {t!(locale, "footer-services")} }
                    ul {
                        for service in Service::FOOTER {
                            li { key: "{service:?}",
                                a { href: Anchor::Services.href(), {service.title(locale)} }
                            }
                        }
                    }
                }
                div {
                    h4 { {t!(locale, "footer-contact")} }
                    p { {t!(locale, "contact-address")} }
                    p { "{CONTACT_PHONE}" }
                    p { "{CONTACT_EMAIL}" }
                    div { class: "footer__social",
                        for (label, glyph) in SOCIAL_LINKS {
                            a { key: "{label}", href: "#", aria_label: label, "{glyph}" }
                        }
                    }
                }
            }
            div { class: "footer__bottom",
                span { {t!(locale, "footer-rights")} }
                nav { class: "footer__legal",
                    a { href: "#", {t!(locale, "footer-privacy")} }
                    a { href: "#", {t!(locale, "footer-terms")} }
                    a { href: "#", {t!(locale, "footer-cookies")} }
                }
            }
        }
    }
}
