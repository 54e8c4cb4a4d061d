use criterion::{criterion_group, criterion_main, Criterion};
use icu_properties::{maps, sets};

mod group;

group!(
    general_category,
    test_general_category,
    "general_category",
    "icu",
    |code| maps::general_category().get32(code),
    icu_properties::GeneralCategory
);

group!(
    combining_class,
    test_combining_class,
    "combining_class",
    "icu",
    |code| maps::canonical_combining_class().get32(code).0,
    u8
);

group!(
    alphabetic,
    test_alphabetic,
    "alphabetic",
    "icu",
    |code| sets::alphabetic().contains32(code),
    bool
);

criterion_group!(benches, general_category, combining_class, alphabetic);
criterion_main!(benches);
