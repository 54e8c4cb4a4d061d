use unicode_tables_source::RangeMark;

use crate::interval::crosses_bmp;
use crate::CompileError;

/// пара записей `<..., First>` / `<..., Last>` задаёт диапазон кодпоинтов с одинаковыми свойствами,
/// промежуток между ними не является разрывом
#[inline]
pub fn is_range_pair(previous: RangeMark, current: RangeMark) -> bool
{
    previous == RangeMark::First && current == RangeMark::Last
}

/// такой диапазон не может быть разрезан по границе BMP без потери смысла записи,
/// в UCD таких нет - проверяем явно
pub fn check_range_pair(first: u32, last: u32) -> Result<(), CompileError>
{
    match crosses_bmp(first, last) {
        true => Err(CompileError::PairStraddlesBmp { first, last }),
        false => Ok(()),
    }
}
