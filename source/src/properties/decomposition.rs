use super::{parse_code, PropertiesError};

/// декомпозиция
/// берется из UCD: шестая колонка UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition
{
    /// тег декомпозиции, None - каноническая декомпозиция
    pub tag: Option<DecompositionTag>,
    /// декомпозиция
    pub codes: Vec<u32>,
}

impl Decomposition
{
    /// пустое поле - декомпозиции нет
    pub fn parse(value: &str) -> Result<Option<Self>, PropertiesError>
    {
        if value.is_empty() {
            return Ok(None);
        }

        let (tag_string, decomposition_string) = match value.starts_with('<') {
            true => value
                .split_once(' ')
                .ok_or_else(|| PropertiesError::unknown("decomposition", value))?,
            false => ("", value),
        };

        let tag = match !tag_string.is_empty() {
            true => Some(DecompositionTag::try_from(tag_string)?),
            false => None,
        };

        let codes = decomposition_string
            .split_whitespace()
            .map(|v| parse_code("decomposition", v))
            .collect::<Result<Vec<u32>, PropertiesError>>()?;

        if codes.is_empty() {
            return Err(PropertiesError::unknown("decomposition", value));
        }

        Ok(Some(Self { tag, codes }))
    }

    /// каноническая декомпозиция?
    pub fn is_canonical(&self) -> bool
    {
        self.tag.is_none()
    }
}

/// тег декомпозиции совместимости
/// берется из UCD: шестая колонка UnicodeData.txt
#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font = 0,
    /// неразрывная версия пробела или дефиса
    NoBreak = 1,
    /// начальная форма представления (арабский)
    Initial = 2,
    /// средняя форма представления (арабский)
    Medial = 3,
    /// конечная форма представления (арабский)
    Final = 4,
    /// изолированная форма представления (арабский)
    Isolated = 5,
    /// окруженная форма
    Circle = 6,
    /// надстрочная форма
    Super = 7,
    /// подстрочная форма
    Sub = 8,
    /// вертикальная форма представления
    Vertical = 9,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide = 10,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow = 11,
    /// малая вариантная форма (совместимость CNS (Chinese National Standard))
    Small = 12,
    /// вариант шрифта в квадрате CJK
    Square = 13,
    /// форма обыкновенной дроби
    Fraction = 14,
    /// неопределенный символ для обеспечения совместимости
    Compat = 15,
}

const TAGS: [(DecompositionTag, &str); 16] = [
    (DecompositionTag::Font, "<font>"),
    (DecompositionTag::NoBreak, "<noBreak>"),
    (DecompositionTag::Initial, "<initial>"),
    (DecompositionTag::Medial, "<medial>"),
    (DecompositionTag::Final, "<final>"),
    (DecompositionTag::Isolated, "<isolated>"),
    (DecompositionTag::Circle, "<circle>"),
    (DecompositionTag::Super, "<super>"),
    (DecompositionTag::Sub, "<sub>"),
    (DecompositionTag::Vertical, "<vertical>"),
    (DecompositionTag::Wide, "<wide>"),
    (DecompositionTag::Narrow, "<narrow>"),
    (DecompositionTag::Small, "<small>"),
    (DecompositionTag::Square, "<square>"),
    (DecompositionTag::Fraction, "<fraction>"),
    (DecompositionTag::Compat, "<compat>"),
];

impl TryFrom<&str> for DecompositionTag
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        TAGS.iter()
            .find(|(_, value)| *value == abbr)
            .map(|(tag, _)| *tag)
            .ok_or_else(|| PropertiesError::unknown("decomposition tag", abbr))
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = TAGS[*self as usize].1;

        write!(f, "{}", value)
    }
}
