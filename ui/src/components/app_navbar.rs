use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::data::site::Anchor;
use crate::i18n::Locale;
use crate::t;

// Navbar stylesheet, linked as an asset and inlined in native release builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Route links supplied by the platform crate, so `ui` does not need to know
/// each platform's `Route` enum.
///
/// Each function receives the localized label and returns a `Link` that
/// already contains it as its child:
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         all_stays: |label| rsx!( Link { class: "navbar__link", to: Route::Accommodations {}, "{label}" } ),
///         blog: |label| rsx!( Link { class: "navbar__link", to: Route::Blog {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Landing sections are plain `/#anchor` links and need no builder.
pub struct NavBuilder {
    pub all_stays: fn(label: &str) -> Element,
    pub blog: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins; later calls (re-rendered roots) are ignored.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to the accommodations list page, routed when a builder is registered.
pub fn all_stays_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.all_stays)(label),
        None => rsx! { a { class: "navbar__link", href: "/accommodations", "{label}" } },
    }
}

fn blog_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.blog)(label),
        None => rsx! { a { class: "navbar__link", href: "/blog", "{label}" } },
    }
}

/// In-page anchors of the landing page, in scroll order.
const SECTION_LINKS: [Anchor; 6] = [
    Anchor::Home,
    Anchor::About,
    Anchor::Services,
    Anchor::Impact,
    Anchor::Accommodations,
    Anchor::Contact,
];

/// Mobile navigation sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

fn links(locale: Locale) -> Element {
    let section_links = SECTION_LINKS.map(|anchor| (anchor.href(), anchor.label(locale)));
    rsx! {
        for (href, label) in section_links {
            a { key: "{href}", class: "navbar__link", href: href, "{label}" }
        }
        {blog_link(&t!(locale, "nav-blog"))}
    }
}

#[component]
pub fn AppNavbar() -> Element {
    // Platform root provides the shared locale signal; fall back to a local one.
    let fallback = use_signal(|| Locale::DEFAULT);
    let mut locale_signal = try_use_context::<Signal<Locale>>().unwrap_or(fallback);
    let mut menu = use_signal(MenuState::default);

    let locale = locale_signal();
    debug!("[i18n] AppNavbar render locale={locale}");

    let on_change = move |evt: FormEvent| {
        if let Some(next) = Locale::from_code(&evt.value()) {
            info!("locale switched to {next}");
            locale_signal.set(next);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar", dir: locale.dir(),
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "/",
                    span { class: "navbar__brand-mark", "Touriver" }
                }

                nav { class: "navbar__links", {links(locale)} }

                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!(locale, "nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: locale.code(),
                        oninput: on_change,
                        for choice in Locale::ALL {
                            option {
                                key: "{choice}",
                                value: choice.code(),
                                selected: choice == locale,
                                "{choice.flag()} {choice.native_name()}"
                            }
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: t!(locale, "nav-toggle-menu"),
                    aria_expanded: menu().is_open(),
                    onclick: move |_| menu.set(menu().toggle()),
                    "☰"
                }
            }

            if menu().is_open() {
                nav {
                    class: "navbar__sheet",
                    // Any link click closes the sheet.
                    onclick: move |_| menu.set(MenuState::Closed),
                    {links(locale)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_between_two_states() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.toggle(), MenuState::Open);
        assert_eq!(menu.toggle().toggle(), MenuState::Closed);
    }

    #[test]
    fn section_links_point_at_landing_anchors() {
        let hrefs: Vec<String> = SECTION_LINKS.iter().map(|a| a.href()).collect();
        assert_eq!(
            hrefs,
            [
                "/#home",
                "/#about",
                "/#services",
                "/#impact",
                "/#accommodations",
                "/#contact"
            ]
        );
    }
}
