use criterion::{criterion_group, criterion_main, Criterion};
use unicode_tables::GeneralCategory;
use unicode_tables_benches::TABLES;

mod group;

group!(
    general_category,
    test_general_category,
    "general_category",
    "tables",
    |code| TABLES.general_category().lookup(code),
    GeneralCategory
);

group!(
    combining_class,
    test_combining_class,
    "combining_class",
    "tables",
    |code| TABLES.combining_class().lookup(code),
    u8
);

group!(
    alphabetic,
    test_alphabetic,
    "alphabetic",
    "tables",
    |code| TABLES.alphabetic().lookup(code),
    bool
);

/// буквы через групповой предикат категории
group!(
    letters,
    test_letters,
    "letters",
    "tables",
    |code| GeneralCategory::is_letter(&TABLES.general_category().lookup(code)),
    bool
);

criterion_group!(benches, general_category, combining_class, alphabetic, letters);
criterion_main!(benches);
