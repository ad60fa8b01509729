use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::i18n::Locale;
use crate::t;

use super::model::{hidden_count, Gallery, ViewerCommand, ViewerState, GRID_THUMBNAILS};

const LOCK_SCROLL: &str = "document.body.style.overflow = 'hidden';";
const UNLOCK_SCROLL: &str = "document.body.style.overflow = '';";

/// Detail page gallery: a main image plus thumbnails on wide screens, a
/// swipeable carousel on narrow ones, and a full-screen viewer on click.
#[component]
pub fn ImageGallery(
    locale: Locale,
    name: &'static str,
    images: &'static [&'static str],
) -> Element {
    let mut viewer = use_signal(ViewerState::default);
    let mut carousel = use_signal(|| 0usize);

    let Some(position) = Gallery::at(images.len(), carousel()) else {
        return rsx! {};
    };
    let hidden = hidden_count(images.len());
    let main = images[0];
    let main_alt = format!("{name} - {}", t!(locale, "detail-main-view"));
    let thumbs: Vec<(usize, &'static str, String)> = images
        .iter()
        .enumerate()
        .skip(1)
        .take(GRID_THUMBNAILS)
        .map(|(i, src)| {
            let shown: usize = i + 1;
            (i, *src, format!("{name} - {}", t!(locale, "detail-view", index = shown)))
        })
        .collect();
    let last_thumb = GRID_THUMBNAILS.min(images.len().saturating_sub(1));
    let shown: usize = position.index() + 1;
    let slide_alt = format!("{name} - {}", t!(locale, "detail-image", index = shown));

    rsx! {
        div { class: "gallery",
            div { class: "gallery__grid",
                button {
                    r#type: "button",
                    class: "gallery__main",
                    onclick: move |_| viewer.set(ViewerState::open(0)),
                    img { src: main, alt: "{main_alt}" }
                }
                div { class: "gallery__thumbs",
                    for (i, src, alt) in thumbs {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: "gallery__thumb",
                            onclick: move |_| viewer.set(ViewerState::open(i)),
                            img { src: src, alt: "{alt}" }
                            if i == last_thumb {
                                if let Some(more) = hidden {
                                    span { class: "gallery__more", "+{more}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "gallery__carousel",
                button {
                    r#type: "button",
                    class: "gallery__slide",
                    onclick: move |_| viewer.set(ViewerState::open(carousel())),
                    img { src: images[position.index()], alt: "{slide_alt}" }
                }
                if position.len() > 1 {
                    button {
                        r#type: "button",
                        class: "gallery__step gallery__step--prev",
                        onclick: move |_| carousel.set(position.prev().index()),
                        "‹"
                    }
                    button {
                        r#type: "button",
                        class: "gallery__step gallery__step--next",
                        onclick: move |_| carousel.set(position.next().index()),
                        "›"
                    }
                }
                span { class: "gallery__counter", "{position.counter()}" }
            }

            if let ViewerState::Open { index } = viewer() {
                ImageModal {
                    locale,
                    name,
                    images,
                    index,
                    on_command: move |command| viewer.set(viewer().apply(command, images.len())),
                }
            }
        }
    }
}

/// Full-screen viewer. Background scrolling is locked for as long as this
/// component is mounted, however it ends up being dismissed.
#[component]
pub fn ImageModal(
    locale: Locale,
    name: &'static str,
    images: &'static [&'static str],
    index: usize,
    on_command: EventHandler<ViewerCommand>,
) -> Element {
    use_hook(|| {
        debug!("gallery viewer opened, locking scroll");
        document::eval(LOCK_SCROLL);
    });
    use_drop(|| {
        debug!("gallery viewer closed, releasing scroll");
        document::eval(UNLOCK_SCROLL);
    });

    let Some(position) = Gallery::at(images.len(), index) else {
        return rsx! {};
    };
    let src = images[position.index()];
    let shown: usize = position.index() + 1;
    let alt = format!("{name} - {}", t!(locale, "detail-image", index = shown));

    rsx! {
        div {
            class: "viewer",
            role: "dialog",
            aria_modal: "true",
            tabindex: 0,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| {
                if let Some(command) = ViewerCommand::from_key(&evt.key().to_string()) {
                    evt.prevent_default();
                    on_command.call(command);
                }
            },
            button {
                r#type: "button",
                class: "viewer__close",
                aria_label: t!(locale, "detail-close"),
                onclick: move |_| on_command.call(ViewerCommand::Close),
                "✕"
            }
            span { class: "viewer__counter", "{position.counter()}" }
            if position.len() > 1 {
                button {
                    r#type: "button",
                    class: "viewer__step viewer__step--prev",
                    onclick: move |_| on_command.call(ViewerCommand::Prev),
                    "‹"
                }
                button {
                    r#type: "button",
                    class: "viewer__step viewer__step--next",
                    onclick: move |_| on_command.call(ViewerCommand::Next),
                    "›"
                }
            }
            img {
                class: "viewer__image",
                src: src,
                alt: "{alt}",
            }
        }
    }
}
