//! Routed pages. Platform crates map their `Route` variants onto these.

use dioxus::prelude::*;

use crate::core::SiteConfig;
use crate::i18n::Locale;

mod accommodations;
mod blog;
mod details;
mod home;

pub use accommodations::Accommodations;
pub use blog::Blog;
pub use details::AccommodationDetails;
pub use home::Home;

/// Active locale from the platform's `Signal<Locale>` context.
///
/// Reading the signal subscribes the calling page, so switching language
/// re-renders it. Without a provider the configured default is used.
pub fn use_locale() -> Locale {
    match try_use_context::<Signal<Locale>>() {
        Some(locale) => locale(),
        None => try_use_context::<SiteConfig>()
            .map(|config| config.default_locale)
            .unwrap_or_default(),
    }
}
