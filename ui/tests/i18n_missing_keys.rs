//! Cross-locale checks on the Fluent tables shipped in `ui/i18n/`.
//!
//! `fl!` only validates ids against `en` at compile time, so these keep the
//! other tables in step with it: same ids, same `{ $var }` placeables, no
//! duplicate or empty messages.

use std::collections::{BTreeMap, BTreeSet};

const EN: &str = include_str!("../i18n/en/touriver-ui.ftl");
const TRANSLATIONS: [(&str, &str); 2] = [
    ("fr", include_str!("../i18n/fr/touriver-ui.ftl")),
    ("ar", include_str!("../i18n/ar/touriver-ui.ftl")),
];

/// A single-line message: its value and the variables it references.
struct Message {
    value: String,
    variables: BTreeSet<String>,
}

/// Messages by id, plus any ids defined more than once.
fn messages(src: &str) -> (BTreeMap<String, Message>, Vec<String>) {
    let mut out = BTreeMap::new();
    let mut duplicates = Vec::new();
    for line in src.lines() {
        // Comments, blank lines, attributes and indented continuations.
        if line.trim().is_empty() || line.starts_with(['#', ' ', '\t', '.']) {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim().to_string();
        let variables = value
            .split("{ $")
            .skip(1)
            .filter_map(|rest| rest.split([' ', '}']).next())
            .map(str::to_string)
            .collect();
        let message = Message {
            value: value.trim().to_string(),
            variables,
        };
        if out.insert(id.clone(), message).is_some() {
            duplicates.push(id);
        }
    }
    (out, duplicates)
}

#[test]
fn translations_define_exactly_the_fallback_ids() {
    let (fallback, duplicates) = messages(EN);
    assert!(!fallback.is_empty(), "en table is empty");
    assert!(duplicates.is_empty(), "en defines {duplicates:?} twice");

    for (locale, src) in TRANSLATIONS {
        let (table, duplicates) = messages(src);
        assert!(duplicates.is_empty(), "{locale} defines {duplicates:?} twice");

        let missing: Vec<_> = fallback.keys().filter(|id| !table.contains_key(*id)).collect();
        let extra: Vec<_> = table.keys().filter(|id| !fallback.contains_key(*id)).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");
        assert!(extra.is_empty(), "{locale} has ids unknown to en: {extra:?}");
    }
}

#[test]
fn placeables_match_fallback() {
    let (fallback, _) = messages(EN);
    for (locale, src) in TRANSLATIONS {
        let (table, _) = messages(src);
        for (id, message) in &fallback {
            if let Some(translated) = table.get(id) {
                assert_eq!(
                    translated.variables, message.variables,
                    "{locale}: placeables of {id} differ from en"
                );
            }
        }
    }
}

#[test]
fn no_message_is_blank() {
    for (locale, src) in std::iter::once(("en", EN)).chain(TRANSLATIONS) {
        let (table, _) = messages(src);
        let blank: Vec<_> = table
            .iter()
            .filter(|(_, m)| m.value.is_empty())
            .map(|(id, _)| id)
            .collect();
        assert!(blank.is_empty(), "{locale} has blank messages: {blank:?}");
    }
}

#[test]
fn fluent_domain_names_the_table_files() {
    // `fl!` resolves `i18n/<lang>/<domain>.ftl`; without an explicit domain it
    // derives one from the package name with `-` turned into `_`.
    let config = include_str!("../i18n.toml");
    assert!(
        config.lines().any(|l| l.trim() == r#"domain = "touriver-ui""#),
        "i18n.toml must set domain = \"touriver-ui\""
    );
}
