use std::io::ErrorKind;
use std::path::Path;

use crate::SourceError;

/// основная таблица свойств кодпоинтов
pub const UNICODE_DATA: &str = "UnicodeData.txt";
/// производные свойства: Alphabetic, Lowercase, Uppercase и т.д.
pub const DERIVED_CORE_PROPERTIES: &str = "DerivedCoreProperties.txt";

/// прочитать исходный файл целиком
/// отсутствие файла - отдельная ошибка, с путём к нему
pub fn read_source(path: &Path) -> Result<String, SourceError>
{
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::Missing {
            path: path.to_owned(),
        },
        _ => SourceError::Io {
            path: path.to_owned(),
            source,
        },
    })
}
