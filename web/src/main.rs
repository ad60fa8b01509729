use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::SiteConfig;
use ui::views::{AccommodationDetails, Accommodations, Blog, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/accommodations")]
    Accommodations {},
    #[route("/accommodations/details?:id")]
    AccommodationDetails { id: String },
    #[route("/blog")]
    Blog {},
}

fn nav_accommodations(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Accommodations {},
        "{label}"
    })
}
fn nav_blog(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Blog {},
        "{label}"
    })
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(SiteConfig::embedded);
    let default_locale = config.default_locale;
    use_context_provider(|| config);

    // Shared locale signal; AppNavbar's switcher writes it, pages read it.
    let locale = use_signal(|| default_locale);
    use_context_provider(|| locale);

    register_nav(NavBuilder {
        all_stays: nav_accommodations,
        blog: nav_blog,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "Touriver" }

        Router::<Route> {}
    }
}

/// Web-specific layout wrapping the shared navbar so it can use this
/// crate's `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
