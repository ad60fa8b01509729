//! Stay pricing: nights x nightly rate, plus the flat cleaning fee and the
//! percentage service fee from [`BookingPolicy`].

use time::Date;

use super::picker::StayDates;
use crate::core::BookingPolicy;

/// Whole days between the two dates; 0 while either is unset or the range is empty.
pub fn nights(check_in: Option<Date>, check_out: Option<Date>) -> u32 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            u32::try_from((check_out - check_in).whole_days()).unwrap_or(0)
        }
        _ => 0,
    }
}

/// `percent`% of `subtotal`, rounded half-up to a whole unit.
pub fn service_fee(subtotal: u32, percent: u32) -> u32 {
    let scaled = u64::from(subtotal) * u64::from(percent);
    u32::try_from((scaled + 50) / 100).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub nights: u32,
    pub nightly_rate: u32,
    pub subtotal: u32,
    pub cleaning_fee: u32,
    pub service_fee: u32,
    pub total: u32,
}

/// `None` until the stay covers at least one night.
pub fn quote(dates: &StayDates, nightly_rate: u32, policy: &BookingPolicy) -> Option<PriceBreakdown> {
    let nights = nights(dates.check_in, dates.check_out);
    if nights == 0 {
        return None;
    }
    let subtotal = nights.saturating_mul(nightly_rate);
    let service_fee = service_fee(subtotal, policy.service_fee_percent);
    Some(PriceBreakdown {
        nights,
        nightly_rate,
        subtotal,
        cleaning_fee: policy.cleaning_fee,
        service_fee,
        total: subtotal
            .saturating_add(policy.cleaning_fee)
            .saturating_add(service_fee),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use time::{Duration, Month};

    fn june(d: u8) -> Date {
        Date::from_calendar_date(2025, Month::June, d).unwrap()
    }

    #[test]
    fn three_nights_at_85() {
        let stay = StayDates {
            check_in: Some(june(10)),
            check_out: Some(june(13)),
        };
        let q = quote(&stay, 85, &BookingPolicy::default()).unwrap();
        assert_eq!(
            q,
            PriceBreakdown {
                nights: 3,
                nightly_rate: 85,
                subtotal: 255,
                cleaning_fee: 50,
                service_fee: 36,
                total: 341,
            }
        );
    }

    #[test]
    fn no_quote_without_both_dates() {
        let policy = BookingPolicy::default();
        assert_eq!(quote(&StayDates::default(), 85, &policy), None);
        let half = StayDates::default().with_check_in(june(10));
        assert_eq!(quote(&half, 85, &policy), None);
        assert_eq!(nights(Some(june(10)), None), 0);
    }

    #[test]
    fn reversed_range_counts_zero_nights() {
        assert_eq!(nights(Some(june(13)), Some(june(10))), 0);
        assert_eq!(nights(Some(june(10)), Some(june(10))), 0);
    }

    #[test]
    fn service_fee_rounds_half_up() {
        // 14% of 25 = 3.5
        assert_eq!(service_fee(25, 14), 4);
        // 14% of 255 = 35.7
        assert_eq!(service_fee(255, 14), 36);
        // 14% of 65 = 9.1
        assert_eq!(service_fee(65, 14), 9);
        assert_eq!(service_fee(0, 14), 0);
    }

    proptest! {
        #[test]
        fn total_is_sum_of_lines(n in 1i64..60, rate in 1u32..1000) {
            let stay = StayDates {
                check_in: Some(june(1)),
                check_out: Some(june(1) + Duration::days(n)),
            };
            let policy = BookingPolicy::default();
            let q = quote(&stay, rate, &policy).unwrap();
            prop_assert_eq!(q.nights as i64, n);
            prop_assert_eq!(q.subtotal, q.nights * rate);
            prop_assert_eq!(q.total, q.subtotal + q.cleaning_fee + q.service_fee);
            // Within half a unit of the exact fee.
            let exact = f64::from(q.subtotal) * 0.14;
            prop_assert!((f64::from(q.service_fee) - exact).abs() <= 0.5);
        }
    }
}
