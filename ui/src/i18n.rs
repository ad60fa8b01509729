//! Internationalization (i18n) support for `touriver-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/touriver-ui.ftl   (fallback/reference)
//!   fr/touriver-ui.ftl
//!   ar/touriver-ui.ftl
//! ```
//!
//! Every supported [`Locale`] owns one immutable translation table (a
//! `FluentLanguageLoader`), loaded lazily on first use. Callers pass the
//! locale explicitly; there is no process-wide "current language":
//! ```ignore
//! use crate::t;
//! let home_label = t!(locale, "nav-home");
//! let guests = t!(locale, "detail-guests", count = 4);
//! ```
//!
//! To add a new locale:
//! 1. Add a variant to [`Locale`] (code, native name, flag, direction).
//! 2. Copy `en/touriver-ui.ftl` to `i18n/<code>/touriver-ui.ftl` and translate
//!    each value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
//!
//! NOTE: The hyphenated filename `touriver-ui.ftl` is canonical across all locales.
use std::fmt;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(locale, "nav-home")
///     t!(locale, "detail-hosted-by", name = "Mohammed")
///
/// This expands to `fl!(i18n::table(locale), ...)` so every lookup goes
/// through the table of the locale the caller supplied.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::table($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::table($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
const DOMAIN: &str = "touriver-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
        }
    }

    /// Name of the language written in that language (switcher labels).
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Ar => "العربية",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Fr => "🇫🇷",
            Locale::Ar => "🇲🇦",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Value for the HTML `dir` attribute.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Accepts bare codes (`fr`) and region-qualified tags (`fr-FR`, `ar_MA`), case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::ALL.into_iter().find(|l| l.code() == primary)
    }

    fn language_id(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("locale codes are valid language identifiers")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of resolving a locale code. Unknown codes resolve to the default
/// locale, but stay distinguishable so callers can tell a match from a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Matched(Locale),
    Defaulted { requested: String },
}

impl Resolved {
    pub fn locale(&self) -> Locale {
        match self {
            Resolved::Matched(locale) => *locale,
            Resolved::Defaulted { .. } => Locale::DEFAULT,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolved::Defaulted { .. })
    }
}

/// Resolve a locale code. Total: never fails.
pub fn resolve(code: &str) -> Resolved {
    match Locale::from_code(code) {
        Some(locale) => Resolved::Matched(locale),
        None => Resolved::Defaulted {
            requested: code.to_string(),
        },
    }
}

static EN: Lazy<FluentLanguageLoader> = Lazy::new(|| load_table(Locale::En));
static FR: Lazy<FluentLanguageLoader> = Lazy::new(|| load_table(Locale::Fr));
static AR: Lazy<FluentLanguageLoader> = Lazy::new(|| load_table(Locale::Ar));

/// The translation table for `locale`.
pub fn table(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
        Locale::Ar => &AR,
    }
}

/// Table for an arbitrary code, falling back to the default locale's table.
pub fn translation(code: &str) -> &'static FluentLanguageLoader {
    table(resolve(code).locale())
}

fn load_table(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::DEFAULT.language_id());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[locale.language_id()]) {
        warn!("[i18n] failed loading {locale} table ({err}); continuing with fallback");
    }
    // Only affects bundles already loaded, so it has to follow `select`.
    // Bidi isolation marks would otherwise leak into prices and counts.
    loader.set_use_isolating(false);
    loader
}

/// List embedded language folders (used to check every `Locale` ships a table).
pub fn embedded_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
