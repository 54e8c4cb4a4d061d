#[macro_use]
extern crate lazy_static;

use unicode_tables::{GeneralCategory, SparseTable, SparseTableData, TotalTable};
use unicode_tables_prepare::{compile_str, Catalogue, NarrowTable};
use unicode_tables_source::DerivedProperties;

/// выборка UCD, из которой собираются таблицы для замеров
const UNICODE_DATA: &str = include_str!("./../../test_data/ucd/UnicodeData.txt");
const DERIVED_CORE_PROPERTIES: &str = include_str!("./../../test_data/ucd/DerivedCoreProperties.txt");

/// таблицы, подготовленные один раз на все замеры
pub struct Tables
{
    pub general_category: NarrowTable<GeneralCategory>,
    pub combining_class: NarrowTable<u8>,
    pub alphabetic: NarrowTable<bool>,
}

lazy_static! {
    pub static ref TABLES: Tables = prepare();
}

fn prepare() -> Tables
{
    let catalogue = Catalogue {
        derived: vec!["Alphabetic".to_owned()],
        case_mappings: false,
    };

    let derived = DerivedProperties::parse(DERIVED_CORE_PROPERTIES, &catalogue.derived).unwrap();
    let tables = compile_str(UNICODE_DATA, &derived, &catalogue).unwrap();

    Tables {
        general_category: tables.general_category.narrow().unwrap(),
        combining_class: tables.combining_class.narrow().unwrap(),
        alphabetic: tables.derived["Alphabetic"].narrow().unwrap(),
    }
}

impl Tables
{
    pub fn general_category(&self) -> TotalTable<'_, GeneralCategory>
    {
        TotalTable::from_baked(self.general_category.data())
    }

    pub fn combining_class(&self) -> SparseTable<'_, u8>
    {
        SparseTable::from_baked(SparseTableData {
            data: self.combining_class.data(),
            default: 0,
        })
    }

    pub fn alphabetic(&self) -> SparseTable<'_, bool>
    {
        SparseTable::from_baked(SparseTableData {
            data: self.alphabetic.data(),
            default: false,
        })
    }
}

/// наборы кодпоинтов для замеров
pub fn inputs() -> Vec<(&'static str, Vec<u32>)>
{
    vec![
        ("ascii", (0x00 .. 0x80).collect()),
        ("bmp", (0x0000 ..= 0xFFFF).step_by(97).collect()),
        ("supplementary", (0x10000 ..= 0x10FFFF).step_by(1009).collect()),
    ]
}
