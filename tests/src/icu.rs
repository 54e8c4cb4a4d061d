use icu_properties::{maps, sets};

use crate::data::{codepoints, NARROW};

/// сравниваем с данными ICU кодпоинты, которые есть в выборке UCD
#[test]
fn general_category()
{
    let icu = maps::general_category();
    let table = NARROW.general_category();

    for (code, _) in codepoints() {
        assert_eq!(
            format!("{:?}", table.lookup(code)),
            format!("{:?}", icu.get32(code)),
            "U+{:04X}",
            code
        );
    }
}

#[test]
fn combining_class()
{
    let icu = maps::canonical_combining_class();
    let table = NARROW.combining_class();

    for (code, _) in codepoints() {
        assert_eq!(table.lookup(code), icu.get32(code).0, "U+{:04X}", code);
    }
}

#[test]
fn derived_properties()
{
    macro_rules! test {
        ($(($name: expr, $icu: expr)),+) => {
            $(
                let icu = $icu;
                let table = NARROW.derived($name);

                for (code, _) in codepoints() {
                    assert_eq!(table.lookup(code), icu.contains32(code), "{}: U+{:04X}", $name, code);
                }
            )+
        };
    }

    test!(
        ("Alphabetic", sets::alphabetic()),
        ("Lowercase", sets::lowercase()),
        ("Uppercase", sets::uppercase())
    );
}
