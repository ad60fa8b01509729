//! Landing page sections. Each one takes the active locale and renders static content.

mod about;
mod accommodations;
mod blog_preview;
mod contact;
mod footer;
mod hero;
mod services;
mod why_choose_us;

pub use about::About;
pub use accommodations::{AccommodationCard, Accommodations};
pub use blog_preview::{BlogPreview, PostCard};
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use services::Services;
pub use why_choose_us::WhyChooseUs;
