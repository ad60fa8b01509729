use dioxus::prelude::*;

use crate::data::site::{Anchor, CONTACT_EMAIL, CONTACT_PHONE};
use crate::i18n::Locale;
use crate::t;

/// Contact details and the message form. The form renders only; submit does nothing.
#[component]
pub fn Contact(locale: Locale) -> Element {
    rsx! {
        section { id: Anchor::Contact.id(), class: "section contact",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(locale, "contact-title")} }
                p { class: "section__intro", {t!(locale, "contact-intro")} }
                div { class: "contact__grid",
                    div { class: "contact__info",
                        div { class: "contact-card",
                            h3 { {t!(locale, "contact-visit")} }
                            p { {t!(locale, "contact-address")} }
                            a {
                                class: "contact-card__link",
                                href: "https://maps.google.com/?q=Berrchid,Morocco",
                                target: "_blank",
                                rel: "noopener",
                                {t!(locale, "contact-directions")}
                            }
                        }
                        div { class: "contact-card contact-card--partner",
                            span { class: "badge", {t!(locale, "contact-partner-badge")} }
                            p { {t!(locale, "contact-partnership")} }
                        }
                        div { class: "contact-card",
                            h3 { {t!(locale, "contact-phone")} }
                            a { href: "tel:{CONTACT_PHONE}", "{CONTACT_PHONE}" }
                        }
                        div { class: "contact-card",
                            h3 { {t!(locale, "contact-email")} }
                            a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                        }
                    }
                    form {
                        class: "contact__form",
                        onsubmit: move |evt| evt.prevent_default(),
                        h3 { {t!(locale, "contact-form-title")} }
                        div { class: "contact__row",
                            label { {t!(locale, "contact-first-name")}
                                input { r#type: "text", name: "first_name" }
                            }
                            label { {t!(locale, "contact-last-name")}
                                input { r#type: "text", name: "last_name" }
                            }
                        }
                        label { {t!(locale, "contact-email-label")}
                            input { r#type: "email", name: "email" }
                        }
                        label { {t!(locale, "contact-subject")}
                            select { name: "subject",
                                option { value: "general", {t!(locale, "contact-subject-general")} }
                                option { value: "booking", {t!(locale, "contact-subject-booking")} }
                                option { value: "workshop", {t!(locale, "contact-subject-workshop")} }
                                option { value: "partnership", {t!(locale, "contact-subject-partnership")} }
                            }
                        }
                        label { {t!(locale, "contact-message")}
                            textarea {
                                name: "message",
                                rows: 5,
                                placeholder: t!(locale, "contact-message-placeholder"),
                            }
                        }
                        button { r#type: "submit", class: "button button--primary",
                            {t!(locale, "contact-send")}
                        }
                    }
                }
            }
        }
    }
}
