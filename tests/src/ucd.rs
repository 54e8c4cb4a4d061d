use unicode_tables::GeneralCategory;
use unicode_tables_prepare::tables::GENERAL_CATEGORY_COVERAGE;
use unicode_tables_prepare::{coalesce, is_minimal, split_planes};
use unicode_tables_source::RangeMark;

use crate::data::{codepoints, has_property, Narrow, NARROW, TABLES};

/// значения в таблицах совпадают со значениями в записях
#[test]
fn records()
{
    let general_category = NARROW.general_category();
    let combining_class = NARROW.combining_class();

    for (code, record) in codepoints() {
        assert_eq!(general_category.lookup(code), record.gc, "U+{:04X}", code);
        assert_eq!(combining_class.lookup(code), u8::from(record.ccc), "U+{:04X}", code);
    }
}

/// кодпоинты, которых нет в выборке - Cn
#[test]
fn gaps()
{
    let general_category = NARROW.general_category();
    let listed: Vec<u32> = codepoints().iter().map(|(code, _)| *code).collect();

    for code in (0 ..= 0x10FFFF).step_by(7) {
        if listed.binary_search(&code).is_err() {
            assert_eq!(general_category.lookup(code), GeneralCategory::Unassigned, "U+{:04X}", code);
        }
    }
}

#[test]
fn case_mappings()
{
    let uppercase = Narrow::delta(&NARROW.uppercase);
    let lowercase = Narrow::delta(&NARROW.lowercase);
    let titlecase = Narrow::delta(&NARROW.titlecase);

    for (code, record) in codepoints() {
        let expected = |mapping: Option<u32>| mapping.unwrap_or(code);

        assert_eq!(uppercase.map(code), expected(record.simple_uppercase_mapping.into()));
        assert_eq!(lowercase.map(code), expected(record.simple_lowercase_mapping.into()));
        assert_eq!(titlecase.map(code), expected(record.simple_titlecase_mapping.into()));
    }
}

/// там, где полное отображение состоит из одного символа, оно совпадает с простым
#[test]
fn case_mappings_std()
{
    let uppercase = Narrow::delta(&NARROW.uppercase);
    let lowercase = Narrow::delta(&NARROW.lowercase);

    for (code, _) in codepoints() {
        let c = match char::from_u32(code) {
            Some(c) => c,
            None => continue,
        };

        let mut upper = c.to_uppercase();

        if let (Some(u), None) = (upper.next(), upper.next()) {
            assert_eq!(uppercase.map(code), u as u32, "U+{:04X}", code);
        }

        let mut lower = c.to_lowercase();

        if let (Some(l), None) = (lower.next(), lower.next()) {
            assert_eq!(lowercase.map(code), l as u32, "U+{:04X}", code);
        }
    }
}

#[test]
fn derived_properties()
{
    for name in ["Alphabetic", "Lowercase", "Uppercase"] {
        let table = NARROW.derived(name);

        for (code, _) in codepoints() {
            assert_eq!(table.lookup(code), has_property(name, code), "{}: U+{:04X}", name, code);
        }
    }
}

/// списки интервалов минимальны, BMP и остальные плоскости не смешиваются
#[test]
fn minimal()
{
    let mappings = TABLES.case_mappings.as_ref().unwrap();

    assert!(is_minimal(&TABLES.general_category.merged()));
    assert!(is_minimal(&TABLES.combining_class.merged()));
    assert!(is_minimal(&mappings.uppercase.merged()));
    assert!(is_minimal(&mappings.lowercase.merged()));
    assert!(is_minimal(&mappings.titlecase.merged()));

    for table in TABLES.derived.values() {
        assert!(is_minimal(&table.merged()));
    }

    assert!(TABLES.general_category.bmp.iter().all(|i| i.high <= 0xFFFF));
    assert!(TABLES.general_category.others.iter().all(|i| i.low >= 0x10000));
}

/// повторная свёртка развёрнутой таблицы даёт ту же таблицу
#[test]
fn idempotence()
{
    let intervals = TABLES.general_category.merged();

    let expanded = intervals
        .iter()
        .flat_map(|i| (i.low ..= i.high).map(move |code| (code, RangeMark::None, i.value)));

    let again = split_planes(coalesce(expanded, GENERAL_CATEGORY_COVERAGE).unwrap()).unwrap();

    assert_eq!(again, TABLES.general_category);
}
