//! Date picker state machine and the check-in/check-out cross constraint.
//!
//! A picker is either `Closed` or browsing one month. Navigation moves the
//! month without touching the selection; a day click commits and closes only
//! when the day is selectable, otherwise nothing changes.

use time::{Date, Month};

use super::availability::AvailabilityMap;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A calendar month being browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: Month,
}

impl MonthCursor {
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        match self.month {
            Month::December => Self {
                year: self.year + 1,
                month: Month::January,
            },
            month => Self {
                year: self.year,
                month: month.next(),
            },
        }
    }

    pub fn prev(self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            month => Self {
                year: self.year,
                month: month.previous(),
            },
        }
    }

    pub fn days_in_month(self) -> u8 {
        self.month.length(self.year)
    }

    pub fn day(self, day: u8) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, day).ok()
    }

    /// e.g. `June 2025`.
    pub fn title(self) -> String {
        format!("{} {}", self.month, self.year)
    }

    /// Sunday-first grid: leading blanks, then one entry per day of the month.
    pub fn grid(self) -> Vec<Option<Date>> {
        let leading = self
            .day(1)
            .map(|first| first.weekday().number_days_from_sunday())
            .unwrap_or(0);
        let mut cells: Vec<Option<Date>> = vec![None; usize::from(leading)];
        cells.extend((1..=self.days_in_month()).map(|d| self.day(d)));
        cells
    }
}

/// Optional inclusive bounds supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    pub min: Option<Date>,
    pub max: Option<Date>,
}

/// Everything a selection is checked against.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub today: Date,
    pub bounds: DateBounds,
    pub availability: &'a AvailabilityMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectRejection {
    Past,
    BeforeMin,
    AfterMax,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Committed(Date),
    Rejected(SelectRejection),
}

/// Why (or whether) `day` can be picked.
pub fn check(day: Date, ctx: &SelectionContext<'_>) -> Result<(), SelectRejection> {
    if day < ctx.today {
        return Err(SelectRejection::Past);
    }
    if ctx.bounds.min.is_some_and(|min| day < min) {
        return Err(SelectRejection::BeforeMin);
    }
    if ctx.bounds.max.is_some_and(|max| day > max) {
        return Err(SelectRejection::AfterMax);
    }
    if !ctx.availability.is_available(day) {
        return Err(SelectRejection::Unavailable);
    }
    Ok(())
}

/// Render state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    Blank,
    /// Past or outside the bounds.
    Disabled(Date),
    Unavailable(Date),
    Available(Date),
    Selected(Date),
}

impl DayCell {
    pub fn date(self) -> Option<Date> {
        match self {
            DayCell::Blank => None,
            DayCell::Disabled(d)
            | DayCell::Unavailable(d)
            | DayCell::Available(d)
            | DayCell::Selected(d) => Some(d),
        }
    }

    pub fn is_selectable(self) -> bool {
        matches!(self, DayCell::Available(_) | DayCell::Selected(_))
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DayCell::Blank => "date-picker__day date-picker__day--blank",
            DayCell::Disabled(_) => "date-picker__day date-picker__day--disabled",
            DayCell::Unavailable(_) => "date-picker__day date-picker__day--unavailable",
            DayCell::Available(_) => "date-picker__day date-picker__day--available",
            DayCell::Selected(_) => "date-picker__day date-picker__day--selected",
        }
    }
}

fn classify(date: Date, selected: Option<Date>, ctx: &SelectionContext<'_>) -> DayCell {
    match check(date, ctx) {
        Err(SelectRejection::Unavailable) => DayCell::Unavailable(date),
        Err(_) => DayCell::Disabled(date),
        Ok(()) if selected == Some(date) => DayCell::Selected(date),
        Ok(()) => DayCell::Available(date),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerView {
    #[default]
    Closed,
    Browsing(MonthCursor),
}

impl PickerView {
    pub fn is_open(self) -> bool {
        matches!(self, PickerView::Browsing(_))
    }

    /// Opens on the selected day's month (or today's); closes when open.
    pub fn toggle(self, selected: Option<Date>, today: Date) -> Self {
        match self {
            PickerView::Closed => PickerView::Browsing(MonthCursor::of(selected.unwrap_or(today))),
            PickerView::Browsing(_) => PickerView::Closed,
        }
    }

    pub fn close(self) -> Self {
        PickerView::Closed
    }

    pub fn next_month(self) -> Self {
        match self {
            PickerView::Browsing(month) => PickerView::Browsing(month.next()),
            closed => closed,
        }
    }

    pub fn prev_month(self) -> Self {
        match self {
            PickerView::Browsing(month) => PickerView::Browsing(month.prev()),
            closed => closed,
        }
    }

    /// Commit `day` and close, or stay put if it is not selectable.
    pub fn select(self, day: Date, ctx: &SelectionContext<'_>) -> (Self, SelectOutcome) {
        match check(day, ctx) {
            Ok(()) => (PickerView::Closed, SelectOutcome::Committed(day)),
            Err(reason) => (self, SelectOutcome::Rejected(reason)),
        }
    }

    /// Grid cells of the month being browsed (empty while closed).
    pub fn cells(self, selected: Option<Date>, ctx: &SelectionContext<'_>) -> Vec<DayCell> {
        match self {
            PickerView::Closed => Vec::new(),
            PickerView::Browsing(month) => month
                .grid()
                .into_iter()
                .map(|cell| match cell {
                    Some(date) => classify(date, selected, ctx),
                    None => DayCell::Blank,
                })
                .collect(),
        }
    }
}

/// Check-in / check-out pair. Each picker is bounded by the other's selection,
/// so a zero or negative stay cannot be picked in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StayDates {
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
}

impl StayDates {
    /// Check-in must end at least one day before the chosen check-out.
    pub fn check_in_bounds(&self) -> DateBounds {
        DateBounds {
            min: None,
            max: self.check_out.and_then(Date::previous_day),
        }
    }

    /// Check-out must start at least one day after the chosen check-in.
    pub fn check_out_bounds(&self) -> DateBounds {
        DateBounds {
            min: self.check_in.and_then(Date::next_day),
            max: None,
        }
    }

    pub fn with_check_in(self, date: Date) -> Self {
        Self {
            check_in: Some(date),
            ..self
        }
    }

    pub fn with_check_out(self, date: Date) -> Self {
        Self {
            check_out: Some(date),
            ..self
        }
    }

    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::availability::FixedAvailability;

    fn june(d: u8) -> Date {
        Date::from_calendar_date(2025, Month::June, d).unwrap()
    }

    fn june_10_to_14() -> AvailabilityMap {
        FixedAvailability::available_range(june(10), june(14)).unwrap().0
    }

    #[test]
    fn month_lengths_follow_the_calendar() {
        let feb = |year| MonthCursor { year, month: Month::February };
        assert_eq!(feb(2024).days_in_month(), 29);
        assert_eq!(feb(2025).days_in_month(), 28);
        assert_eq!(MonthCursor::of(june(1)).days_in_month(), 30);
    }

    #[test]
    fn june_2025_grid_starts_on_sunday() {
        let grid = MonthCursor::of(june(1)).grid();
        // 1 June 2025 is a Sunday: no leading blanks.
        assert_eq!(grid[0], Some(june(1)));
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn grid_pads_to_the_first_weekday() {
        let july = MonthCursor::of(june(1)).next();
        let grid = july.grid();
        // 1 July 2025 is a Tuesday.
        assert_eq!(&grid[..2], &[None, None]);
        assert_eq!(grid.len(), 2 + 31);
        assert_eq!(july.title(), "July 2025");
    }

    #[test]
    fn month_navigation_wraps_years() {
        let dec = MonthCursor {
            year: 2025,
            month: Month::December,
        };
        assert_eq!(dec.next(), MonthCursor { year: 2026, month: Month::January });
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn toggle_opens_on_selection_then_closes() {
        let view = PickerView::Closed.toggle(Some(june(20)), june(1));
        assert_eq!(view, PickerView::Browsing(MonthCursor::of(june(20))));
        assert_eq!(view.toggle(None, june(1)), PickerView::Closed);
    }

    #[test]
    fn navigation_is_a_no_op_while_closed() {
        assert_eq!(PickerView::Closed.next_month(), PickerView::Closed);
        assert_eq!(PickerView::Closed.prev_month(), PickerView::Closed);
    }

    #[test]
    fn selecting_an_available_day_commits_and_closes() {
        let map = june_10_to_14();
        let ctx = SelectionContext {
            today: june(1),
            bounds: DateBounds::default(),
            availability: &map,
        };
        let open = PickerView::Closed.toggle(None, june(1));
        let (view, outcome) = open.select(june(12), &ctx);
        assert_eq!(view, PickerView::Closed);
        assert_eq!(outcome, SelectOutcome::Committed(june(12)));
    }

    #[test]
    fn invalid_days_are_ignored() {
        let map = june_10_to_14();
        let ctx = SelectionContext {
            today: june(11),
            bounds: DateBounds {
                min: None,
                max: Some(june(13)),
            },
            availability: &map,
        };
        let open = PickerView::Browsing(MonthCursor::of(june(1)));
        for (day, reason) in [
            (june(10), SelectRejection::Past),
            (june(14), SelectRejection::AfterMax),
            (june(9), SelectRejection::Past),
        ] {
            assert_eq!(open.select(day, &ctx), (open, SelectOutcome::Rejected(reason)));
        }
        let later = SelectionContext {
            today: june(1),
            bounds: DateBounds {
                min: Some(june(11)),
                max: None,
            },
            availability: &map,
        };
        assert_eq!(
            open.select(june(10), &later).1,
            SelectOutcome::Rejected(SelectRejection::BeforeMin)
        );
        assert_eq!(
            open.select(june(20), &later).1,
            SelectOutcome::Rejected(SelectRejection::Unavailable)
        );
    }

    #[test]
    fn cells_classify_each_day() {
        let map = june_10_to_14();
        let ctx = SelectionContext {
            today: june(11),
            bounds: DateBounds::default(),
            availability: &map,
        };
        let cells = PickerView::Browsing(MonthCursor::of(june(1))).cells(Some(june(12)), &ctx);
        assert_eq!(cells[9], DayCell::Disabled(june(10)));
        assert_eq!(cells[10], DayCell::Available(june(11)));
        assert_eq!(cells[11], DayCell::Selected(june(12)));
        assert_eq!(cells[19], DayCell::Unavailable(june(20)));
        assert!(PickerView::Closed.cells(None, &ctx).is_empty());
    }

    #[test]
    fn stay_bounds_follow_the_other_picker() {
        let stay = StayDates::default().with_check_in(june(10));
        assert_eq!(stay.check_out_bounds().min, Some(june(11)));
        assert_eq!(stay.check_in_bounds().max, None);

        let stay = stay.with_check_out(june(13));
        assert_eq!(stay.check_in_bounds().max, Some(june(12)));
        assert!(stay.is_complete());
    }

    #[test]
    fn check_out_cannot_land_on_or_before_check_in() {
        let map = june_10_to_14();
        let stay = StayDates::default().with_check_in(june(12));
        let ctx = SelectionContext {
            today: june(1),
            bounds: stay.check_out_bounds(),
            availability: &map,
        };
        for day in [june(10), june(11), june(12)] {
            assert!(check(day, &ctx).is_err());
        }
        assert!(check(june(13), &ctx).is_ok());
    }
}
