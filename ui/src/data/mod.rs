//! Static demo content. Everything here is a `'static` literal, never mutated.

pub mod accommodations;
pub mod blog;
pub mod site;

pub use accommodations::{Accommodation, Host, Lookup, ACCOMMODATIONS};
pub use blog::{filter_posts, BlogCategory, BlogPost, CategoryFilter};
pub use site::{Anchor, Feature, ImpactStat, Service};
