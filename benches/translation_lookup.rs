// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for translation lookup.
//!
//! Measures the performance of:
//! - Resolving a generated key in the active locale
//! - Falling back on an unknown path
//! - Rendering every key after a locale switch

use criterion::{criterion_group, criterion_main, Criterion};
use lowuder::i18n::{keys, Catalog, I18n, Locale, LocaleStore, MemoryStorage};
use std::hint::black_box;

fn i18n() -> I18n {
    I18n::new(
        Catalog::embedded(),
        LocaleStore::new(Box::new(MemoryStorage::new())),
    )
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation_lookup");
    let i18n = i18n();

    group.bench_function("known_key", |b| {
        b.iter(|| black_box(i18n.t(black_box(keys::HOW_1_TITLE))));
    });

    group.bench_function("unknown_path", |b| {
        b.iter(|| black_box(i18n.tr(black_box("nonexistent.deeply.nested.key"))));
    });

    group.finish();
}

/// Resolves every key once per locale, roughly what a full re-render after
/// a language switch costs.
fn bench_locale_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_switch");
    let mut i18n = i18n();

    group.bench_function("all_keys_all_locales", |b| {
        b.iter(|| {
            for locale in Locale::ALL {
                i18n.set_locale(locale);
                for key in keys::ALL {
                    black_box(i18n.t(*key));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_locale_switch);
criterion_main!(benches);
