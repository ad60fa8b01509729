//! Image gallery with a full-screen viewer.

pub mod model;
mod view;

pub use model::{Gallery, ViewerCommand, ViewerState};
pub use view::{ImageGallery, ImageModal};
