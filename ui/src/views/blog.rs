use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::data::blog::{filter_posts, CategoryFilter, BLOG_POSTS, FEATURED_POST};
use crate::sections::{Footer, PostCard};
use crate::t;

use super::use_locale;

#[component]
pub fn Blog() -> Element {
    let locale = use_locale();
    let mut filter = use_signal(CategoryFilter::default);

    let active = filter();
    let posts = filter_posts(BLOG_POSTS, active);
    debug!("blog filter {active:?}: {} posts", posts.len());
    let chips: Vec<(CategoryFilter, &'static str, String)> = CategoryFilter::options()
        .map(|option| {
            let class = if option == active { "chip chip--active" } else { "chip" };
            (option, class, option.label(locale))
        })
        .collect();

    rsx! {
        div { class: "page page-blog", dir: locale.dir(), lang: locale.code(),
            header { class: "blog__header",
                h1 { {t!(locale, "blog-page-title")} }
                p { {t!(locale, "blog-page-intro")} }
                input {
                    class: "blog__search",
                    r#type: "search",
                    placeholder: t!(locale, "blog-search-placeholder"),
                }
            }

            section { class: "section blog__featured",
                div { class: "section__inner",
                    span { class: "badge", {t!(locale, "blog-featured")} }
                    PostCard { locale, post: &FEATURED_POST }
                }
            }

            nav { class: "blog__filters",
                for (option, class, label) in chips {
                    button {
                        key: "{option:?}",
                        r#type: "button",
                        class: class,
                        aria_pressed: option == active,
                        onclick: move |_| filter.set(option),
                        "{label}"
                    }
                }
            }

            section { class: "section",
                div { class: "section__inner",
                    if posts.is_empty() {
                        p { class: "blog__empty", {t!(locale, "blog-empty")} }
                    } else {
                        div { class: "blog__grid",
                            for post in posts {
                                PostCard { key: "{post.id}", locale, post }
                            }
                        }
                    }
                    button { r#type: "button", class: "button button--outline blog__more",
                        {t!(locale, "blog-load-more")}
                    }
                }
            }

            section { class: "newsletter",
                h2 { {t!(locale, "blog-newsletter-title")} }
                p { {t!(locale, "blog-newsletter-intro")} }
                form {
                    class: "newsletter__form",
                    onsubmit: move |evt| evt.prevent_default(),
                    input {
                        r#type: "email",
                        placeholder: t!(locale, "blog-newsletter-placeholder"),
                    }
                    button { r#type: "submit", class: "button button--primary",
                        {t!(locale, "blog-subscribe")}
                    }
                }
            }

            Footer { locale }
        }
    }
}
