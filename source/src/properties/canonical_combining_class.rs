use super::PropertiesError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: четвёртая колонка UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CanonicalCombiningClass(u8);

impl From<u8> for CanonicalCombiningClass
{
    #[inline]
    fn from(value: u8) -> Self
    {
        Self(value)
    }
}

impl From<CanonicalCombiningClass> for u8
{
    #[inline]
    fn from(value: CanonicalCombiningClass) -> Self
    {
        value.0
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        match value.parse::<u8>() {
            Ok(ccc) => Ok(Self(ccc)),
            Err(_) => Err(PropertiesError::unknown("canonical combining class", value)),
        }
    }
}
