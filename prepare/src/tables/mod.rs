mod catalogue;
pub use catalogue::*;

use std::collections::BTreeMap;

use unicode_tables::GeneralCategory;
use unicode_tables_source::{records, DerivedProperties, Record, SourceError};

use crate::coalesce::{pad_code_space, Coalescer};
use crate::planes::{split_planes, SplitTable};
use crate::ranges::ranges_to_intervals;
use crate::CompileError;

/// подготовленные таблицы свойств
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTables
{
    /// основная категория, покрывает U+0000 ..= U+10FFFF
    pub general_category: SplitTable<GeneralCategory>,
    /// класс канонического комбинирования, только ненулевые значения
    pub combining_class: SplitTable<u8>,
    /// simple case mapping, если выбраны
    pub case_mappings: Option<CaseMappings>,
    /// выбранные производные свойства
    pub derived: BTreeMap<String, SplitTable<bool>>,
}

/// simple case mapping в виде разницы между результатом и исходным кодпоинтом
#[derive(Debug, Clone, PartialEq)]
pub struct CaseMappings
{
    pub uppercase: SplitTable<i32>,
    pub lowercase: SplitTable<i32>,
    pub titlecase: SplitTable<i32>,
}

/// свойства, получаемые из UnicodeData.txt, собираются за один проход по записям
struct RecordCoalescers
{
    general_category: Coalescer<GeneralCategory>,
    combining_class: Coalescer<u8>,
    case_mappings: Option<[Coalescer<i32>; 3]>,
}

impl RecordCoalescers
{
    fn new(catalogue: &Catalogue) -> Self
    {
        Self {
            general_category: Coalescer::new(GENERAL_CATEGORY_COVERAGE),
            combining_class: Coalescer::new(COMBINING_CLASS_COVERAGE),
            case_mappings: match catalogue.case_mappings {
                true => Some([
                    Coalescer::new(CASE_MAPPING_COVERAGE),
                    Coalescer::new(CASE_MAPPING_COVERAGE),
                    Coalescer::new(CASE_MAPPING_COVERAGE),
                ]),
                false => None,
            },
        }
    }

    fn push(&mut self, record: &Record) -> Result<(), CompileError>
    {
        let code = record.code;
        let mark = record.range_mark();

        self.general_category.push(code, mark, record.gc)?;
        self.combining_class.push(code, mark, u8::from(record.ccc))?;

        if let Some([uppercase, lowercase, titlecase]) = self.case_mappings.as_mut() {
            uppercase.push(code, mark, record.simple_uppercase_mapping.delta(code))?;
            lowercase.push(code, mark, record.simple_lowercase_mapping.delta(code))?;
            titlecase.push(code, mark, record.simple_titlecase_mapping.delta(code))?;
        }

        Ok(())
    }
}

/// подготовить таблицы по записям UnicodeData.txt (в порядке возрастания кодпоинтов)
/// и диапазонам производных свойств
pub fn compile<I>(
    records: I,
    derived: &DerivedProperties,
    catalogue: &Catalogue,
) -> Result<CompiledTables, CompileError>
where
    I: IntoIterator<Item = Result<Record, SourceError>>,
{
    let mut coalescers = RecordCoalescers::new(catalogue);

    for record in records {
        coalescers.push(&record?)?;
    }

    let general_category = pad_code_space(
        coalescers.general_category.finish(),
        GENERAL_CATEGORY_COVERAGE.default_value(),
    );
    log::debug!("{}: {} интервалов", GENERAL_CATEGORY, general_category.len());

    let combining_class = coalescers.combining_class.finish();
    log::debug!("{}: {} интервалов", COMBINING_CLASS, combining_class.len());

    let case_mappings = match coalescers.case_mappings {
        Some([uppercase, lowercase, titlecase]) => Some(CaseMappings {
            uppercase: split_planes(uppercase.finish())?,
            lowercase: split_planes(lowercase.finish())?,
            titlecase: split_planes(titlecase.finish())?,
        }),
        None => None,
    };

    let mut derived_tables = BTreeMap::new();

    for name in catalogue.derived.iter() {
        let intervals = ranges_to_intervals(derived.get(name))?;
        log::debug!("{}: {} интервалов", name, intervals.len());

        derived_tables.insert(name.clone(), split_planes(intervals)?);
    }

    Ok(CompiledTables {
        general_category: split_planes(general_category)?,
        combining_class: split_planes(combining_class)?,
        case_mappings,
        derived: derived_tables,
    })
}

/// подготовить таблицы по тексту UnicodeData.txt
pub fn compile_str(
    unicode_data: &str,
    derived: &DerivedProperties,
    catalogue: &Catalogue,
) -> Result<CompiledTables, CompileError>
{
    compile(records(unicode_data), derived, catalogue)
}
