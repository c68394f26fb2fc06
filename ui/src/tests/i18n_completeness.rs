//! Cross-checks `t!` call sites against the embedded Fluent files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "moab-ui.ftl";
const I18N_DIR: &str = "i18n";
const FALLBACK: &str = "en-US";

/// Message IDs defined in a Fluent file. Terms (`-foo`), comments and
/// continuation lines are skipped.
fn message_ids(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!("...")` under `root`.
///
/// Keys built at runtime or looked up through `fl!` directly are not seen.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let key = &chunk[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn every_referenced_key_is_translated_everywhere() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);
    let used = referenced_keys(&crate_root.join("src"));
    assert!(!used.is_empty(), "no t!(\"...\") call sites found under src/");

    let locales = locale_dirs(&i18n_root);
    assert!(
        locales.iter().any(|l| l == FALLBACK),
        "fallback locale {FALLBACK} missing from {i18n_root:?}"
    );

    let mut report = String::new();
    for locale in &locales {
        let path = i18n_root.join(locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("cannot read {path:?}: {err}"));
        let defined = message_ids(&content);
        let missing: Vec<_> = used.difference(&defined).cloned().collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {locale}: {}\n", missing.join(", ")));
        }
    }

    assert!(
        report.is_empty(),
        "keys used in source but not defined:\n{report}"
    );
}

#[test]
fn fallback_has_no_unused_keys() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let used = referenced_keys(&crate_root.join("src"));
    let path = crate_root.join(I18N_DIR).join(FALLBACK).join(FTL_FILENAME);
    let defined = message_ids(&fs::read_to_string(&path).expect("read fallback FTL"));

    let unused: Vec<_> = defined.difference(&used).cloned().collect();
    assert!(unused.is_empty(), "unused fallback keys: {}", unused.join(", "));
}
