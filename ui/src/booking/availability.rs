//! Availability calendar: which days in the booking window may be selected.
//!
//! The calendar comes from an [`AvailabilitySource`]. The site uses
//! [`RandomAvailability`] (fresh draws every time a detail page mounts); tests
//! and previews inject a [`FixedAvailability`] instead.

use std::collections::BTreeMap;
use std::rc::Rc;

use rand::Rng;
use time::{Date, Duration};

use crate::core::config::AvailabilityPolicy;
use crate::core::error::{Result, SiteError};
use crate::core::format::{iso_date, parse_iso_date};

/// Day -> available. Days outside the map are unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityMap {
    days: BTreeMap<Date, bool>,
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_days<I: IntoIterator<Item = (Date, bool)>>(days: I) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Build from `YYYY-MM-DD` keys.
    pub fn from_iso<'a, I: IntoIterator<Item = (&'a str, bool)>>(days: I) -> Result<Self> {
        let mut map = Self::new();
        for (raw, available) in days {
            map.insert(parse_iso_date(raw)?, available);
        }
        Ok(map)
    }

    pub fn insert(&mut self, date: Date, available: bool) {
        self.days.insert(date, available);
    }

    pub fn is_available(&self, date: Date) -> bool {
        self.days.get(&date).copied().unwrap_or(false)
    }

    /// Lookup by ISO key; `None` when the day is outside the window or the key is malformed.
    pub fn get_iso(&self, key: &str) -> Option<bool> {
        parse_iso_date(key)
            .ok()
            .and_then(|date| self.days.get(&date).copied())
    }

    /// First and last day covered.
    pub fn window(&self) -> Option<(Date, Date)> {
        let first = self.days.keys().next()?;
        let last = self.days.keys().next_back()?;
        Some((*first, *last))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.days.values().filter(|v| **v).count()
    }

    pub fn iter_iso(&self) -> impl Iterator<Item = (String, bool)> + '_ {
        self.days.iter().map(|(d, v)| (iso_date(*d), *v))
    }
}

/// Produces the availability calendar for a detail-page session starting `today`.
pub trait AvailabilitySource {
    fn availability(&self, today: Date) -> AvailabilityMap;
}

/// Independent draw per day over a rolling window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomAvailability {
    policy: AvailabilityPolicy,
}

impl RandomAvailability {
    pub fn new(policy: AvailabilityPolicy) -> Self {
        Self { policy }
    }

    pub fn generate_with<R: Rng>(&self, rng: &mut R, today: Date) -> AvailabilityMap {
        let ratio = if self.policy.available_ratio.is_nan() {
            0.0
        } else {
            self.policy.available_ratio.clamp(0.0, 1.0)
        };
        let days = (0..i64::from(self.policy.window_days))
            .filter_map(|offset| today.checked_add(Duration::days(offset)))
            .map(|date| (date, rng.gen_bool(ratio)));
        AvailabilityMap::from_days(days)
    }
}

impl AvailabilitySource for RandomAvailability {
    fn availability(&self, today: Date) -> AvailabilityMap {
        self.generate_with(&mut rand::thread_rng(), today)
    }
}

/// A fixed calendar, independent of `today`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedAvailability(pub AvailabilityMap);

impl FixedAvailability {
    /// Every day in `first..=last` available.
    pub fn available_range(first: Date, last: Date) -> Result<Self> {
        if last < first {
            return Err(SiteError::DateOutOfRange(iso_date(last)));
        }
        let mut map = AvailabilityMap::new();
        let mut day = first;
        loop {
            map.insert(day, true);
            if day == last {
                break;
            }
            day = day
                .next_day()
                .ok_or_else(|| SiteError::DateOutOfRange(iso_date(day)))?;
        }
        Ok(Self(map))
    }
}

impl AvailabilitySource for FixedAvailability {
    fn availability(&self, _today: Date) -> AvailabilityMap {
        self.0.clone()
    }
}

/// Context handle so a platform (or a test harness) can swap the source.
#[derive(Clone)]
pub struct AvailabilityProvider(pub Rc<dyn AvailabilitySource>);

impl AvailabilityProvider {
    pub fn new<S: AvailabilitySource + 'static>(source: S) -> Self {
        Self(Rc::new(source))
    }

    pub fn availability(&self, today: Date) -> AvailabilityMap {
        self.0.availability(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use time::Month;

    fn day(d: u8) -> Date {
        Date::from_calendar_date(2025, Month::June, d).unwrap()
    }

    #[test]
    fn random_window_covers_ninety_days_from_today() {
        let source = RandomAvailability::new(AvailabilityPolicy::default());
        let map = source.generate_with(&mut StdRng::seed_from_u64(7), day(1));
        assert_eq!(map.len(), 90);
        let (first, last) = map.window().unwrap();
        assert_eq!(first, day(1));
        assert_eq!((last - first).whole_days(), 89);
    }

    #[test]
    fn random_draws_are_roughly_seventy_percent() {
        let source = RandomAvailability::new(AvailabilityPolicy {
            window_days: 1000,
            available_ratio: 0.7,
        });
        let map = source.generate_with(&mut StdRng::seed_from_u64(42), day(1));
        let share = map.available_count() as f64 / map.len() as f64;
        assert!((0.6..0.8).contains(&share), "share was {share}");
    }

    #[test]
    fn days_outside_the_map_are_unavailable() {
        let map = FixedAvailability::available_range(day(10), day(14)).unwrap().0;
        assert!(map.is_available(day(10)));
        assert!(map.is_available(day(14)));
        assert!(!map.is_available(day(15)));
        assert_eq!(map.get_iso("2025-06-12"), Some(true));
        assert_eq!(map.get_iso("2025-06-20"), None);
        assert_eq!(map.get_iso("garbage"), None);
    }

    #[test]
    fn iso_keys_build_the_same_map() {
        let map = AvailabilityMap::from_iso([("2025-06-10", true), ("2025-06-11", false)]).unwrap();
        assert!(map.is_available(day(10)));
        assert!(!map.is_available(day(11)));
        let keys: Vec<_> = map.iter_iso().collect();
        assert_eq!(keys[0], ("2025-06-10".to_string(), true));
        assert!(AvailabilityMap::from_iso([("2025-6-x", true)]).is_err());
    }

    #[test]
    fn fixed_source_ignores_today() {
        let fixed = FixedAvailability::available_range(day(10), day(14)).unwrap();
        let provider = AvailabilityProvider::new(fixed.clone());
        assert_eq!(provider.availability(day(1)), fixed.0);
        assert!(FixedAvailability::available_range(day(14), day(10)).is_err());
    }
}
