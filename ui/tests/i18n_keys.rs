//! Translation guards for `briefs-ui`.
//!
//! - every `t!("...")` key used under `src/` exists in the en-US fallback;
//! - every locale defines every fallback key, without duplicates;
//! - no fallback key is left unused.
//!
//! Adding a locale: create `i18n/<lang>/briefs_ui.ftl`, copy the en-US keys,
//! translate the values, then add it to `LOCALES` below.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK: &str = include_str!("../i18n/en-US/briefs_ui.ftl");
const LOCALES: &[(&str, &str)] = &[("es-ES", include_str!("../i18n/es-ES/briefs_ui.ftl"))];

/// Message ids of a Fluent file. Comments, terms, attributes and continuation
/// lines are skipped; only `id = value` lines count.
fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_id_char))
        .map(str::to_string)
        .collect()
}

fn valid_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!(` calls in every `.rs` file below `root`.
fn keys_used_in_source(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let mut offset = 0;
        while let Some(pos) = content[offset..].find("t!(\"") {
            let at = offset + pos;
            let start = at + 4;
            offset = start;
            // `format!(` and `assert!(` also end in `t!(`.
            let standalone = content[..at]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            if !standalone {
                continue;
            }
            if let Some(end) = content[start..].find('"') {
                let key = &content[start..start + end];
                if !key.is_empty() && key.chars().all(valid_id_char) {
                    found.insert(key.to_string());
                }
                offset = start + end;
            }
        }
    }

    found
}

fn src_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

#[test]
fn source_keys_exist_in_fallback() {
    let fallback: HashSet<String> = message_ids(FALLBACK).into_iter().collect();
    let used = keys_used_in_source(&src_root());
    assert!(!used.is_empty(), "no t!() calls found under src/");

    let missing: Vec<&String> = used.iter().filter(|k| !fallback.contains(*k)).collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from en-US: {missing:?}"
    );
}

#[test]
fn fallback_keys_are_all_used() {
    let used = keys_used_in_source(&src_root());
    let unused: Vec<String> = message_ids(FALLBACK)
        .into_iter()
        .filter(|k| !used.contains(k))
        .collect();
    assert!(unused.is_empty(), "unused en-US keys: {unused:?}");
}

#[test]
fn every_locale_has_every_fallback_key() {
    let fallback: BTreeSet<String> = message_ids(FALLBACK).into_iter().collect();
    assert!(!fallback.is_empty(), "en-US defines no messages");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys: BTreeSet<String> = message_ids(src).into_iter().collect();
        let missing: Vec<&String> = fallback.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing {missing:?}"));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn no_duplicate_definitions() {
    let all = std::iter::once(("en-US", FALLBACK)).chain(LOCALES.iter().copied());
    for (locale, src) in all {
        let mut seen = HashSet::new();
        let dups: Vec<String> = message_ids(src)
            .into_iter()
            .filter(|id| !seen.insert(id.clone()))
            .collect();
        assert!(dups.is_empty(), "duplicate ids in {locale}: {dups:?}");
    }
}
