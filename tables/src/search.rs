use core::cmp::Ordering;

/// двоичный поиск кодпоинта в отсортированной таблице непересекающихся интервалов
/// интервалы закрыты с обеих сторон: low <= code <= high
///
/// если середина лежит целиком левее кодпоинта (high < code) - ищем в правой половине,
/// если правее (code < low) - в левой, иначе кодпоинт внутри интервала.
/// None означает, что кодпоинт попал в промежуток между интервалами
#[inline]
pub fn search<B, V>(table: &[(B, B, V)], code: B) -> Option<V>
where
    B: Copy + Ord,
    V: Copy,
{
    table
        .binary_search_by(|&(low, high, _)| match high < code {
            true => Ordering::Less,
            false => match code < low {
                true => Ordering::Greater,
                false => Ordering::Equal,
            },
        })
        .ok()
        .map(|index| table[index].2)
}
