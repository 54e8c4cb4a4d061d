mod canonical_combining_class;
mod decomposition;
mod simple_case_mapping;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use simple_case_mapping::SimpleCaseMapping;

pub use unicode_tables::GeneralCategory;

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum PropertiesError
{
    #[error("{property}: неизвестное значение {value:?}")]
    UnknownPropertyValue
    {
        property: &'static str,
        value: String,
    },
}

impl PropertiesError
{
    pub fn unknown(property: &'static str, value: &str) -> Self
    {
        Self::UnknownPropertyValue {
            property,
            value: value.to_owned(),
        }
    }
}

/// разбор шестнадцатеричного кодпоинта
pub fn parse_code(property: &'static str, value: &str) -> Result<u32, PropertiesError>
{
    u32::from_str_radix(value.trim(), 16).map_err(|_| PropertiesError::unknown(property, value))
}
