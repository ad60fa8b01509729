//! Shared UI crate for Touriver. Domain logic, demo content and every page live
//! here; the platform crates only supply routing and launch.

pub mod booking;
pub mod components;
pub mod core;
pub mod data;
pub mod gallery;
pub mod i18n;
pub mod sections;
pub mod views;


use dioxus::prelude::*;

/// Shared theme, linked by the web launcher and inlined by the desktop one.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
