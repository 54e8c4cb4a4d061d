use super::{parse_code, PropertiesError};

/// Simple Uppercase/Lowercase/Titlecase Mapping
/// берется из UCD: 13, 14, 15 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SimpleCaseMapping
{
    None,
    Some(u32),
}

impl SimpleCaseMapping
{
    /// разница между отображением и исходным кодпоинтом, 0 - если отображения нет
    #[inline]
    pub fn delta(&self, code: u32) -> i32
    {
        match self {
            Self::None => 0,
            Self::Some(mapped) => (i64::from(*mapped) - i64::from(code)) as i32,
        }
    }
}

impl TryFrom<&str> for SimpleCaseMapping
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.is_empty() {
            true => Self::None,
            false => Self::Some(parse_code("simple case mapping", value)?),
        })
    }
}

impl From<SimpleCaseMapping> for Option<u32>
{
    #[inline]
    fn from(value: SimpleCaseMapping) -> Self
    {
        match value {
            SimpleCaseMapping::None => None,
            SimpleCaseMapping::Some(mapped) => Some(mapped),
        }
    }
}
