use crate::properties::*;

/// количество полей в строке UnicodeData.txt
pub const UNICODE_DATA_FIELDS: usize = 15;

/// запись UnicodeData.txt о кодпоинте
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct Record
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// декомпозиция и её тег
    pub decomposition: Option<Decomposition>,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: SimpleCaseMapping,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: SimpleCaseMapping,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: SimpleCaseMapping,
}

/// граница диапазона, записанного парой строк вида
/// `3400;<CJK Ideograph Extension A, First>` / `4DBF;<CJK Ideograph Extension A, Last>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMark
{
    None,
    First,
    Last,
}

impl Record
{
    /// является ли запись границей диапазона?
    pub fn range_mark(&self) -> RangeMark
    {
        RangeMark::of(self.name.as_str())
    }
}

impl RangeMark
{
    pub fn of(name: &str) -> Self
    {
        match name {
            name if name.ends_with("First>") => Self::First,
            name if name.ends_with("Last>") => Self::Last,
            _ => Self::None,
        }
    }
}

/// разбор строки UnicodeData.txt
///
/// строка с количеством полей, отличным от 15, пропускается (Ok(None)) - это не ошибка.
/// некорректные значения полей - ошибка
pub fn parse_record(line: &str) -> Result<Option<Record>, PropertiesError>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() != UNICODE_DATA_FIELDS {
        return Ok(None);
    }

    // код и название
    let code = parse_code("code point", props[0])?;
    let name = props[1].to_owned();

    // категория и CCC
    let gc = GeneralCategory::try_from(props[2])
        .map_err(|_| PropertiesError::unknown("general category", props[2]))?;
    let ccc = CanonicalCombiningClass::try_from(props[3])?;

    // декомпозиция и тег декомпозиции
    let decomposition = Decomposition::parse(props[5])?;

    // пропускаем колонки 4, 6 - 11:
    //
    // * Bidi_Class, Numeric_Type / Numeric_Value, Bidi_Mirrored
    // * Unicode_1_Name (Obsolete as of 6.2.0)
    // * ISO_Comment (Obsolete as of 5.2.0; Deprecated and Stabilized as of 6.0.0)

    // связанные символы в другом регистре (если есть)
    let simple_uppercase_mapping = SimpleCaseMapping::try_from(props[12])?;
    let simple_lowercase_mapping = SimpleCaseMapping::try_from(props[13])?;
    let simple_titlecase_mapping = SimpleCaseMapping::try_from(props[14])?;

    Ok(Some(Record {
        code,
        name,
        gc,
        ccc,
        decomposition,
        simple_uppercase_mapping,
        simple_lowercase_mapping,
        simple_titlecase_mapping,
    }))
}
