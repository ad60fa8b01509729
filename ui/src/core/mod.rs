//! Cross-cutting pieces shared by every page: configuration, errors, formatting.

pub mod config;
pub mod error;
pub mod format;

pub use config::{AvailabilityPolicy, BookingPolicy, SiteConfig};
pub use error::SiteError;
