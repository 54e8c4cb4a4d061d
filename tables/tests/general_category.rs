use unicode_tables::GeneralCategory;

#[test]
fn abbreviations_round_trip()
{
    for category in GeneralCategory::all() {
        assert_eq!(GeneralCategory::try_from(category.abbr()), Ok(category));
        assert_eq!(GeneralCategory::try_from(u8::from(category)), Ok(category));
    }

    assert_eq!(GeneralCategory::all().count(), 30);
    assert!(GeneralCategory::try_from("LC").is_err());
    assert!(GeneralCategory::try_from("").is_err());
    assert!(GeneralCategory::try_from(15u8).is_err());
    assert!(GeneralCategory::try_from(27u8).is_err());
}

#[test]
fn groups()
{
    let group = |predicate: fn(&GeneralCategory) -> bool| -> String {
        GeneralCategory::all()
            .filter(predicate)
            .map(|c| c.abbr())
            .collect::<Vec<&str>>()
            .join(" ")
    };

    assert_eq!(group(GeneralCategory::is_cased_letter), "Lu Ll Lt");
    assert_eq!(group(GeneralCategory::is_letter), "Lu Ll Lt Lm Lo");
    assert_eq!(group(GeneralCategory::is_combining_mark), "Mn Mc Me");
    assert_eq!(group(GeneralCategory::is_numeric), "Nd Nl No");
    assert_eq!(group(GeneralCategory::is_separator), "Zs Zl Zp");
    assert_eq!(group(GeneralCategory::is_control), "Cn Cc Cf Cs Co");
    assert_eq!(group(GeneralCategory::is_punctuation), "Pc Pd Ps Pe Pi Pf Po");
    assert_eq!(group(GeneralCategory::is_symbol), "Sm Sc Sk So");
}
