use dioxus::prelude::*;

use crate::core::format::format_post_date;
use crate::data::blog::PREVIEW_POSTS;
use crate::data::site::Anchor;
use crate::data::BlogPost;
use crate::i18n::Locale;
use crate::t;

/// Card used by both the landing teaser and the blog grid.
#[component]
pub fn PostCard(locale: Locale, post: &'static BlogPost) -> Element {
    let class = if post.featured {
        "post-card post-card--featured"
    } else {
        "post-card"
    };
    rsx! {
        article { class: class,
            img { class: "post-card__image", src: post.image, alt: post.title }
            div { class: "post-card__body",
                span { class: "tag", "{post.category}" }
                h3 { class: "post-card__title", "{post.title}" }
                p { class: "post-card__excerpt", "{post.excerpt}" }
                div { class: "post-card__meta",
                    span { "{post.author}" }
                    span { "{format_post_date(post.date)}" }
                    span { {t!(locale, "blog-min-read", minutes = post.read_time)} }
                }
                span { class: "post-card__more", {t!(locale, "common-read-more")} }
            }
        }
    }
}

#[component]
pub fn BlogPreview(locale: Locale) -> Element {
    let (featured, recent): (Vec<&'static BlogPost>, Vec<&'static BlogPost>) =
        PREVIEW_POSTS.iter().partition(|post| post.featured);

    rsx! {
        section { id: Anchor::Blog.id(), class: "section blog-preview",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(locale, "blog-preview-title")} }
                p { class: "section__intro", {t!(locale, "blog-preview-intro")} }
                div { class: "blog-preview__grid",
                    for post in featured {
                        PostCard { key: "{post.id}", locale, post }
                    }
                    div { class: "blog-preview__recent",
                        for post in recent {
                            PostCard { key: "{post.id}", locale, post }
                        }
                    }
                }
                Link { class: "button button--outline", to: "/blog",
                    {t!(locale, "blog-view-all")}
                }
            }
        }
    }
}
