use dioxus::prelude::*;

use crate::data::site::{Anchor, Feature, ImpactStat};
use crate::i18n::Locale;
use crate::t;

/// Feature cards followed by the impact figures (the `#impact` anchor).
#[component]
pub fn WhyChooseUs(locale: Locale) -> Element {
    rsx! {
        section { class: "section why",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(locale, "why-title")} }
                span { class: "badge why__badge", {t!(locale, "why-badge")} }
                p { class: "section__intro", {t!(locale, "why-intro")} }
                div { class: "why__grid",
                    for feature in Feature::ALL {
                        article { key: "{feature:?}", class: "feature-card",
                            img { class: "feature-card__image", src: feature.image(), alt: feature.title(locale) }
                            div { class: "feature-card__body",
                                span { class: "feature-card__icon", "{feature.icon()}" }
                                h3 { {feature.title(locale)} }
                                p { {feature.description(locale)} }
                            }
                        }
                    }
                }
            }
            div { id: Anchor::Impact.id(), class: "impact",
                for stat in ImpactStat::ALL {
                    div { key: "{stat:?}", class: "impact__stat",
                        span { class: "impact__value {stat.accent()}", "{stat.value()}" }
                        span { class: "impact__label", {stat.label(locale)} }
                    }
                }
            }
        }
    }
}
