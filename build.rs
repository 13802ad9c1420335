// SPDX-License-Identifier: MPL-2.0
//! Build script for the localization key table.
//!
//! Reads the canonical English dictionary and generates one `Key` constant
//! per leaf path, so UI code can only request strings that exist in the
//! canonical locale. The other shipped dictionaries are compared against the
//! canonical one and every missing or extra path is reported as a cargo
//! warning.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const LOCALES_DIR: &str = "assets/locales";
const CANONICAL: &str = "en";
const OTHERS: [&str; 2] = ["es", "id"];

fn main() {
    println!("cargo:rerun-if-changed={LOCALES_DIR}");

    let canonical = read_leaf_paths(&locale_file(CANONICAL));

    for tag in OTHERS {
        let paths = read_leaf_paths(&locale_file(tag));
        for missing in canonical.difference(&paths) {
            println!("cargo:warning=locale `{tag}` is missing key `{missing}`");
        }
        for extra in paths.difference(&canonical) {
            println!("cargo:warning=locale `{tag}` has key `{extra}` not present in `{CANONICAL}`");
        }
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("keys.rs"), render_keys(&canonical))
        .expect("failed to write generated key table");
}

fn locale_file(tag: &str) -> PathBuf {
    Path::new(LOCALES_DIR).join(format!("{tag}.json"))
}

fn read_leaf_paths(path: &Path) -> BTreeSet<String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let root: Value = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()));

    let mut leaves = BTreeSet::new();
    collect_leaves(&root, String::new(), path, &mut leaves);
    leaves
}

fn collect_leaves(node: &Value, prefix: String, file: &Path, out: &mut BTreeSet<String>) {
    match node {
        Value::String(_) => {
            out.insert(prefix);
        }
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(child, path, file, out);
            }
        }
        other => panic!(
            "{}: `{prefix}` must be a string or an object, found {other}",
            file.display()
        ),
    }
}

/// `hero.ctaWaitlist` -> `HERO_CTA_WAITLIST`, `how.1.title` -> `HOW_1_TITLE`.
fn const_name(path: &str) -> String {
    let mut name = String::with_capacity(path.len() + 8);
    let mut prev_lower = false;
    for ch in path.chars() {
        match ch {
            '.' | '-' => {
                name.push('_');
                prev_lower = false;
            }
            c if c.is_ascii_uppercase() => {
                if prev_lower {
                    name.push('_');
                }
                name.push(c);
                prev_lower = false;
            }
            c => {
                name.push(c.to_ascii_uppercase());
                prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            }
        }
    }
    name
}

fn render_keys(paths: &BTreeSet<String>) -> String {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    let mut out = String::from("// @generated by build.rs from assets/locales/en.json\n\n");

    for path in paths {
        let name = const_name(path);
        if let Some(previous) = seen.insert(name.clone(), path) {
            panic!("keys `{previous}` and `{path}` both map to constant `{name}`");
        }
        out.push_str(&format!("pub const {name}: Key = Key({path:?});\n"));
    }

    out.push_str("\n/// Every leaf path of the canonical dictionary.\n");
    out.push_str("pub const ALL: &[Key] = &[\n");
    for name in seen.keys() {
        out.push_str(&format!("    {name},\n"));
    }
    out.push_str("];\n");
    out
}
