use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use time::{Date, OffsetDateTime};

use crate::core::format::{format_price, format_short_date};
use crate::core::SiteConfig;
use crate::data::Accommodation;
use crate::i18n::Locale;
use crate::t;

use super::availability::AvailabilityMap;
use super::picker::{
    DateBounds, PickerView, SelectOutcome, SelectionContext, StayDates, WEEKDAY_LABELS,
};
use super::pricing::quote;

/// Calendar day in UTC; the booking window is anchored on it.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn commit(
    mut view: Signal<PickerView>,
    availability: Signal<AvailabilityMap>,
    bounds: DateBounds,
    day: Date,
    on_select: EventHandler<Date>,
) {
    let (next, outcome) = {
        let map = availability.read();
        let ctx = SelectionContext {
            today: today(),
            bounds,
            availability: &map,
        };
        view().select(day, &ctx)
    };
    view.set(next);
    if let SelectOutcome::Committed(date) = outcome {
        on_select.call(date);
    }
}

#[component]
pub fn DatePicker(
    locale: Locale,
    label: String,
    selected: Option<Date>,
    bounds: DateBounds,
    availability: Signal<AvailabilityMap>,
    on_select: EventHandler<Date>,
) -> Element {
    let mut view = use_signal(PickerView::default);

    let shown = selected
        .map(format_short_date)
        .unwrap_or_else(|| t!(locale, "picker-add-date"));

    let current = view();
    let cells = {
        let map = availability.read();
        let ctx = SelectionContext {
            today: today(),
            bounds,
            availability: &map,
        };
        current.cells(selected, &ctx)
    };

    rsx! {
        div { class: "date-picker",
            button {
                r#type: "button",
                class: "date-picker__field",
                aria_expanded: current.is_open(),
                onclick: move |_| view.set(view().toggle(selected, today())),
                span { class: "date-picker__label", "{label}" }
                span { class: "date-picker__value", "{shown}" }
            }

            if let PickerView::Browsing(month) = current {
                div {
                    class: "date-picker__backdrop",
                    onclick: move |_| view.set(view().close()),
                }
                div { class: "date-picker__popover", role: "dialog",
                    div { class: "date-picker__header",
                        button {
                            r#type: "button",
                            class: "date-picker__nav",
                            aria_label: t!(locale, "picker-prev-month"),
                            onclick: move |_| view.set(view().prev_month()),
                            "‹"
                        }
                        h4 { class: "date-picker__title", "{month.title()}" }
                        button {
                            r#type: "button",
                            class: "date-picker__nav",
                            aria_label: t!(locale, "picker-next-month"),
                            onclick: move |_| view.set(view().next_month()),
                            "›"
                        }
                    }
                    div { class: "date-picker__weekdays",
                        for day in WEEKDAY_LABELS {
                            span { key: "{day}", "{day}" }
                        }
                    }
                    div { class: "date-picker__grid",
                        for (i, cell) in cells.into_iter().enumerate() {
                            if let Some(date) = cell.date() {
                                button {
                                    key: "{i}",
                                    r#type: "button",
                                    class: cell.css_class(),
                                    disabled: !cell.is_selectable(),
                                    onclick: move |_| commit(view, availability, bounds, date, on_select),
                                    "{date.day()}"
                                }
                            } else {
                                span { key: "{i}", class: cell.css_class() }
                            }
                        }
                    }
                    div { class: "date-picker__legend",
                        span { class: "date-picker__swatch date-picker__swatch--available" }
                        span { {t!(locale, "picker-available")} }
                        span { class: "date-picker__swatch date-picker__swatch--unavailable" }
                        span { {t!(locale, "picker-unavailable")} }
                    }
                    button {
                        r#type: "button",
                        class: "date-picker__close",
                        onclick: move |_| view.set(view().close()),
                        {t!(locale, "picker-close")}
                    }
                }
            }
        }
    }
}

/// Sticky price card on the detail page: two bounded pickers and the live quote.
#[component]
pub fn BookingCard(
    locale: Locale,
    accommodation: &'static Accommodation,
    availability: Signal<AvailabilityMap>,
) -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let mut stay = use_signal(StayDates::default);

    let policy = config.booking;
    let dates = stay();
    let breakdown = quote(&dates, accommodation.price, &policy);
    let ready = dates.is_complete();
    let cta = if ready {
        t!(locale, "common-book-now")
    } else {
        t!(locale, "detail-select-dates")
    };
    let name = accommodation.name;

    rsx! {
        aside { class: "booking-card",
            div { class: "booking-card__price",
                span { class: "booking-card__amount", "{format_price(accommodation.price)}" }
                span { class: "booking-card__unit", " / " {t!(locale, "detail-night")} }
            }

            div { class: "booking-card__dates",
                DatePicker {
                    locale,
                    label: t!(locale, "detail-check-in"),
                    selected: dates.check_in,
                    bounds: dates.check_in_bounds(),
                    availability,
                    on_select: move |date| stay.set(stay().with_check_in(date)),
                }
                DatePicker {
                    locale,
                    label: t!(locale, "detail-check-out"),
                    selected: dates.check_out,
                    bounds: dates.check_out_bounds(),
                    availability,
                    on_select: move |date| stay.set(stay().with_check_out(date)),
                }
            }

            div { class: "booking-card__guests",
                span { class: "booking-card__label", {t!(locale, "detail-guests-label")} }
                span { {t!(locale, "detail-guests", count = accommodation.guests)} }
            }

            button {
                r#type: "button",
                class: "booking-card__cta",
                disabled: !ready,
                onclick: move |_| {
                    let dates = stay();
                    if let Some(q) = quote(&dates, accommodation.price, &policy) {
                        info!("booking preview for {name}: {} nights, total {}", q.nights, q.total);
                    }
                },
                "{cta}"
            }
            p { class: "booking-card__note", {t!(locale, "detail-not-charged")} }

            if let Some(q) = breakdown {
                ul { class: "booking-card__breakdown",
                    li {
                        span {
                            {t!(locale, "detail-nights-line", price = format_price(q.nightly_rate), nights = q.nights)}
                        }
                        span { "{format_price(q.subtotal)}" }
                    }
                    li {
                        span { {t!(locale, "detail-cleaning-fee")} }
                        span { "{format_price(q.cleaning_fee)}" }
                    }
                    li {
                        span { {t!(locale, "detail-service-fee")} }
                        span { "{format_price(q.service_fee)}" }
                    }
                    li { class: "booking-card__total",
                        span { {t!(locale, "detail-total")} }
                        span { "{format_price(q.total)}" }
                    }
                }
            }
        }
    }
}
