use std::path::Path;

use crate::{parse_record, read_source, Record, SourceError};

/// записи UnicodeData.txt в порядке следования строк
/// строки с неверным количеством полей пропускаются
pub fn records(data: &str) -> impl Iterator<Item = Result<Record, SourceError>> + '_
{
    data.lines()
        .enumerate()
        .filter_map(|(i, line)| match parse_record(line) {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(source) => Some(Err(SourceError::InvalidLine { line: i + 1, source })),
        })
}

/// разбор UnicodeData.txt из UCD
pub fn parse_unicode_data(data: &str) -> Result<Vec<Record>, SourceError>
{
    records(data).collect()
}

/// прочитать и разобрать UnicodeData.txt
pub fn read_unicode_data(path: &Path) -> Result<Vec<Record>, SourceError>
{
    let data = read_source(path)?;
    let records = parse_unicode_data(data.as_str())?;

    log::debug!("{}: {} записей", path.display(), records.len());

    Ok(records)
}
