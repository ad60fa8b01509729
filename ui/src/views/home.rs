use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::sections::{
    About, Accommodations, BlogPreview, Contact, Footer, Hero, Services, WhyChooseUs,
};

use super::use_locale;

#[component]
pub fn Home() -> Element {
    let locale = use_locale();
    debug!("[i18n] Home render (locale={locale})");

    rsx! {
        div { class: "page page-home", dir: locale.dir(), lang: locale.code(),
            Hero { locale }
            About { locale }
            Services { locale }
            WhyChooseUs { locale }
            Accommodations { locale }
            BlogPreview { locale }
            Contact { locale }
            Footer { locale }
        }
    }
}
