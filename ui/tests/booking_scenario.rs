//! End-to-end booking preview: pick check-in and check-out through the picker
//! state machine, then price the stay.

use time::{Date, Month};
use ui::booking::picker::{DateBounds, SelectionContext};
use ui::booking::{
    quote, AvailabilitySource, FixedAvailability, MonthCursor, PickerView, SelectOutcome,
    StayDates,
};
use ui::core::BookingPolicy;
use ui::data::accommodations;

fn june(day: u8) -> Date {
    Date::from_calendar_date(2025, Month::June, day).unwrap()
}

fn pick(
    view: PickerView,
    day: Date,
    today: Date,
    bounds: DateBounds,
    source: &FixedAvailability,
) -> (PickerView, SelectOutcome) {
    let map = source.availability(today);
    let ctx = SelectionContext {
        today,
        bounds,
        availability: &map,
    };
    view.select(day, &ctx)
}

#[test]
fn three_nights_at_the_atlas_lodge() {
    let today = june(1);
    let source = FixedAvailability::available_range(june(10), june(14)).unwrap();
    let lodge = accommodations::find("1").record();
    assert_eq!(lodge.price, 85);

    let mut stay = StayDates::default();

    let view = PickerView::Closed.toggle(stay.check_in, today);
    assert_eq!(view, PickerView::Browsing(MonthCursor::of(today)));
    let (view, outcome) = pick(view, june(10), today, stay.check_in_bounds(), &source);
    assert_eq!(view, PickerView::Closed);
    if let SelectOutcome::Committed(date) = outcome {
        stay = stay.with_check_in(date);
    }

    // A check-out on the check-in day is refused and leaves the picker open.
    let view = PickerView::Closed.toggle(stay.check_out, today);
    let (view, outcome) = pick(view, june(10), today, stay.check_out_bounds(), &source);
    assert!(matches!(outcome, SelectOutcome::Rejected(_)));
    assert!(view.is_open());

    let (view, outcome) = pick(view, june(13), today, stay.check_out_bounds(), &source);
    assert_eq!(view, PickerView::Closed);
    if let SelectOutcome::Committed(date) = outcome {
        stay = stay.with_check_out(date);
    }

    let q = quote(&stay, lodge.price, &BookingPolicy::default()).unwrap();
    assert_eq!(
        (q.nights, q.subtotal, q.cleaning_fee, q.service_fee, q.total),
        (3, 255, 50, 36, 341)
    );
}

#[test]
fn check_in_cannot_move_past_check_out() {
    let today = june(1);
    let source = FixedAvailability::available_range(june(10), june(14)).unwrap();
    let stay = StayDates::default().with_check_out(june(12));

    let open = PickerView::Browsing(MonthCursor::of(today));
    let (_, outcome) = pick(open, june(12), today, stay.check_in_bounds(), &source);
    assert!(matches!(outcome, SelectOutcome::Rejected(_)));
    let (_, outcome) = pick(open, june(11), today, stay.check_in_bounds(), &source);
    assert_eq!(outcome, SelectOutcome::Committed(june(11)));
}
