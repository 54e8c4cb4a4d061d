use std::collections::BTreeMap;
use std::path::Path;

use crate::properties::{parse_code, PropertiesError};
use crate::{read_source, SourceError};

/// диапазоны кодпоинтов выбранных производных свойств
/// источник - UCD, DerivedCoreProperties.txt
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DerivedProperties
{
    ranges: BTreeMap<String, Vec<(u32, u32)>>,
}

impl DerivedProperties
{
    /// разбор файла; учитываются только свойства из списка selected
    pub fn parse(data: &str, selected: &[String]) -> Result<Self, SourceError>
    {
        let mut ranges: BTreeMap<String, Vec<(u32, u32)>> = selected
            .iter()
            .map(|name| (name.clone(), vec![]))
            .collect();

        for (i, line) in data.lines().enumerate() {
            let (from, to, property) = match parse_derived_line(line)
                .map_err(|source| SourceError::InvalidLine { line: i + 1, source })?
            {
                Some(entry) => entry,
                None => continue,
            };

            if let Some(list) = ranges.get_mut(property) {
                list.push((from, to));
            }
        }

        for (name, list) in ranges.iter() {
            match list.is_empty() {
                true => log::warn!("производное свойство {} не найдено в исходных данных", name),
                false => log::debug!("{}: {} диапазонов", name, list.len()),
            }
        }

        Ok(Self { ranges })
    }

    /// прочитать и разобрать DerivedCoreProperties.txt
    pub fn read(path: &Path, selected: &[String]) -> Result<Self, SourceError>
    {
        Self::parse(read_source(path)?.as_str(), selected)
    }

    /// диапазоны свойства в порядке следования в файле
    pub fn get(&self, name: &str) -> &[(u32, u32)]
    {
        match self.ranges.get(name) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// свойства в алфавитном порядке
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(u32, u32)])>
    {
        self.ranges
            .iter()
            .map(|(name, list)| (name.as_str(), list.as_slice()))
    }

    pub fn is_empty(&self) -> bool
    {
        self.ranges.is_empty()
    }
}

/// разбор строки вида `0041..005A    ; Alphabetic # L&  [26] LATIN CAPITAL LETTER A..`
///
/// комментарии, пустые строки и строки без `;` - Ok(None).
/// у некоторых свойств есть третья колонка (`094D ; InCB; Linker`), её не учитываем
pub fn parse_derived_line(line: &str) -> Result<Option<(u32, u32, &str)>, PropertiesError>
{
    let line = match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    };

    let mut fields = line.split(';').map(str::trim);

    let (codepoints, property) = match (fields.next(), fields.next()) {
        (Some(codepoints), Some(property)) if !codepoints.is_empty() => (codepoints, property),
        _ => return Ok(None),
    };

    let (from, to) = match codepoints.split_once("..") {
        Some((from, to)) => (parse_code("range", from)?, parse_code("range", to)?),
        None => {
            let code = parse_code("range", codepoints)?;
            (code, code)
        }
    };

    if from > to {
        return Err(PropertiesError::unknown("range", codepoints));
    }

    Ok(Some((from, to, property)))
}
