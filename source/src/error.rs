use std::path::PathBuf;

use thiserror::Error;

use crate::properties::PropertiesError;

/// ошибки чтения исходных файлов UCD
#[derive(Debug, Error)]
pub enum SourceError
{
    /// без исходного файла подготовка данных невозможна
    #[error("не найден файл UCD: {}", path.display())]
    Missing
    {
        path: PathBuf,
    },
    #[error("не удалось прочитать {}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// строка с правильным количеством полей, но некорректным значением
    #[error("строка {line}: {source}")]
    InvalidLine
    {
        line: usize,
        #[source]
        source: PropertiesError,
    },
}
