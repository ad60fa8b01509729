#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css` at compile time, so a renamed
//! or dropped class only shows up as unstyled markup at runtime. These checks keep the
//! classes the booking, gallery and landing components emit present in the theme.
//!
//! Renaming a class means touching the component markup and `REQUIRED_SELECTORS` together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".page[dir=\"rtl\"]",
    ".section__inner",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--ghost",
    ".badge",
    ".tag",
    // Landing sections
    ".hero__title",
    ".service-card",
    ".feature-card",
    ".impact__stat",
    ".stay-card",
    ".post-card",
    ".contact__form",
    ".footer__grid",
    // Blog page
    ".chip--active",
    ".blog__grid",
    ".newsletter__form",
    // Detail page
    ".details__layout",
    ".details__amenities",
    ".host-card",
    // Gallery & viewer
    ".gallery__grid",
    ".gallery__more",
    ".gallery__carousel",
    ".viewer {",
    ".viewer__counter",
    // Booking card & date picker
    ".booking-card__cta:disabled",
    ".booking-card__breakdown",
    ".date-picker__popover",
    ".date-picker__day--selected",
    ".date-picker__day--unavailable",
    ".date-picker__day--disabled",
    ".date-picker__legend",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_is_present_and_not_truncated() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn picker_day_states_are_styled() {
    // Each selectable/unselectable day state needs a visual distinction.
    let states = ["available", "selected", "unavailable", "disabled"];
    let missing: Vec<_> = states
        .iter()
        .filter(|state| !THEME_CSS.contains(&format!(".date-picker__day--{state}")))
        .collect();
    assert!(missing.is_empty(), "Unstyled picker day states: {missing:?}");
}
