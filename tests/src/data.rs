use unicode_tables::{SparseTable, SparseTableData, TotalTable};
use unicode_tables::{DeltaTable, GeneralCategory};
use unicode_tables_prepare::{compile_str, Catalogue, CompiledTables, NarrowTable};
use unicode_tables_source::{parse_unicode_data, DerivedProperties, RangeMark, Record};

/// выборка из UnicodeData.txt: ASCII, латиница, греческий, диапазоны First/Last, дополнительные плоскости
pub const UNICODE_DATA: &str = include_str!("./../../test_data/ucd/UnicodeData.txt");
/// те же кодпоинты в DerivedCoreProperties.txt
pub const DERIVED_CORE_PROPERTIES: &str = include_str!("./../../test_data/ucd/DerivedCoreProperties.txt");

lazy_static! {
    pub static ref RECORDS: Vec<Record> = parse_unicode_data(UNICODE_DATA).unwrap();
    pub static ref DERIVED: DerivedProperties =
        DerivedProperties::parse(DERIVED_CORE_PROPERTIES, &Catalogue::default().derived).unwrap();
    pub static ref TABLES: CompiledTables =
        compile_str(UNICODE_DATA, &DERIVED, &Catalogue::default()).unwrap();
    pub static ref NARROW: Narrow = Narrow::new(&TABLES);
}

/// подготовленные таблицы в том виде, в каком их видит поиск
pub struct Narrow
{
    pub general_category: NarrowTable<GeneralCategory>,
    pub combining_class: NarrowTable<u8>,
    pub uppercase: NarrowTable<i32>,
    pub lowercase: NarrowTable<i32>,
    pub titlecase: NarrowTable<i32>,
    pub derived: Vec<(String, NarrowTable<bool>)>,
}

impl Narrow
{
    fn new(tables: &CompiledTables) -> Self
    {
        let mappings = tables.case_mappings.as_ref().unwrap();

        Self {
            general_category: tables.general_category.narrow().unwrap(),
            combining_class: tables.combining_class.narrow().unwrap(),
            uppercase: mappings.uppercase.narrow().unwrap(),
            lowercase: mappings.lowercase.narrow().unwrap(),
            titlecase: mappings.titlecase.narrow().unwrap(),
            derived: tables
                .derived
                .iter()
                .map(|(name, table)| (name.clone(), table.narrow().unwrap()))
                .collect(),
        }
    }

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

    pub fn delta(table: &NarrowTable<i32>) -> DeltaTable<'_>
    {
        DeltaTable::from_baked(SparseTableData {
            data: table.data(),
            default: 0,
        })
    }

    pub fn derived(&self, name: &str) -> SparseTable<'_, bool>
    {
        let (_, table) = self.derived.iter().find(|(n, _)| n == name).unwrap();

        SparseTable::from_baked(SparseTableData {
            data: table.data(),
            default: false,
        })
    }
}

/// кодпоинты, описанные записями; диапазоны First/Last разворачиваются целиком
pub fn codepoints() -> Vec<(u32, &'static Record)>
{
    let mut result = vec![];
    let mut first = None;

    for record in RECORDS.iter() {
        match record.range_mark() {
            RangeMark::First => first = Some(record.code),
            RangeMark::Last => {
                let from = first.take().unwrap();
                result.extend((from ..= record.code).map(|code| (code, record)));
            }
            RangeMark::None => result.push((record.code, record)),
        }
    }

    result
}

/// обладает ли кодпоинт производным свойством по исходным данным
pub fn has_property(name: &str, code: u32) -> bool
{
    DERIVED
        .get(name)
        .iter()
        .any(|&(from, to)| from <= code && code <= to)
}
