//! Site configuration: booking fees, availability generation and default locale.
//!
//! The platform root builds one [`SiteConfig`] (normally from the embedded
//! `assets/site.json`) and provides it through context; everything below reads
//! it, nothing mutates it.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

use super::error::{Result, SiteError};
use crate::i18n::Locale;

const EMBEDDED_SITE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_locale: Locale,
    pub booking: BookingPolicy,
    pub availability: AvailabilityPolicy,
}

/// Fixed fees applied on top of the nightly subtotal (whole currency units).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPolicy {
    pub cleaning_fee: u32,
    pub service_fee_percent: u32,
}

/// Shape of the synthetic availability calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityPolicy {
    pub window_days: u16,
    pub available_ratio: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::DEFAULT,
            booking: BookingPolicy::default(),
            availability: AvailabilityPolicy::default(),
        }
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            cleaning_fee: 50,
            service_fee_percent: 14,
        }
    }
}

impl Default for AvailabilityPolicy {
    fn default() -> Self {
        Self {
            window_days: 90,
            available_ratio: 0.7,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded configuration, or defaults if it fails to parse.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_SITE_JSON).unwrap_or_else(|err| {
            warn!("[config] embedded site.json rejected ({err}); using defaults");
            Self::default()
        })
    }

    fn validate(&self) -> Result<()> {
        if self.booking.service_fee_percent > 100 {
            return Err(SiteError::ServiceFeeOutOfRange(
                self.booking.service_fee_percent,
            ));
        }
        let ratio = self.availability.available_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(SiteError::RatioOutOfRange(ratio));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(SiteConfig::embedded(), SiteConfig::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "default_locale": "fr" }"#).unwrap();
        assert_eq!(config.default_locale, Locale::Fr);
        assert_eq!(config.booking.cleaning_fee, 50);
        assert_eq!(config.availability.window_days, 90);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "booking": { "service_fee_percent": 140 } }"#),
            Err(SiteError::ServiceFeeOutOfRange(140))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "availability": { "available_ratio": 1.5 } }"#),
            Err(SiteError::RatioOutOfRange(_))
        ));
        assert!(matches!(
            SiteConfig::from_json("not json"),
            Err(SiteError::Config(_))
        ));
    }
}
