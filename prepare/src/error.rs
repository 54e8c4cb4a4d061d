use std::path::PathBuf;

use thiserror::Error;
use unicode_tables_source::SourceError;

/// ошибки подготовки таблиц
#[derive(Debug, Error)]
pub enum CompileError
{
    #[error(transparent)]
    Source(#[from] SourceError),
    /// записи UnicodeData.txt должны идти строго по возрастанию кодпоинтов
    #[error("кодпоинты идут не по возрастанию: U+{previous:04X}, затем U+{code:04X}")]
    Unsorted
    {
        previous: u32,
        code: u32,
    },
    #[error("кодпоинт U+{0:04X} за пределами Unicode")]
    OutOfRange(u32),
    #[error("диапазон U+{from:04X} ..= U+{to:04X}: начало больше конца")]
    InvertedRange
    {
        from: u32,
        to: u32,
    },
    #[error("диапазон U+{first:04X} ..= U+{last:04X} (First/Last) пересекает границу BMP")]
    PairStraddlesBmp
    {
        first: u32,
        last: u32,
    },
    #[error("у границ диапазона U+{first:04X} ..= U+{last:04X} (First/Last) разные значения свойства")]
    PairValueMismatch
    {
        first: u32,
        last: u32,
    },
    #[error("интервал U+{low:04X} ..= U+{high:04X} пересекает границу BMP")]
    IntervalStraddlesBmp
    {
        low: u32,
        high: u32,
    },
    #[error("не удалось записать {}: {source}", path.display())]
    Output
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
