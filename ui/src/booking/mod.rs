//! Booking preview: availability calendar, date pickers and the price quote.

pub mod availability;
pub mod picker;
pub mod pricing;
mod view;

pub use availability::{
    AvailabilityMap, AvailabilityProvider, AvailabilitySource, FixedAvailability,
    RandomAvailability,
};
pub use picker::{DateBounds, DayCell, MonthCursor, PickerView, SelectOutcome, StayDates};
pub use pricing::{nights, quote, PriceBreakdown};
pub use view::{today, BookingCard, DatePicker};
