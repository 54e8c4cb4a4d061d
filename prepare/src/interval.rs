use unicode_tables::{BMP_END, SUPPLEMENTARY_START};

/// интервал кодпоинтов low ..= high с одинаковым значением свойства
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<V>
{
    pub low: u32,
    pub high: u32,
    pub value: V,
}

impl<V> Interval<V>
{
    pub fn new(low: u32, high: u32, value: V) -> Self
    {
        debug_assert!(low <= high, "U+{:04X} > U+{:04X}", low, high);

        Self { low, high, value }
    }

    /// интервал начинается в BMP, а заканчивается за её пределами
    pub fn straddles_bmp(&self) -> bool
    {
        crosses_bmp(self.low, self.high)
    }
}

/// low лежит в BMP, high - за её пределами
#[inline]
pub fn crosses_bmp(low: u32, high: u32) -> bool
{
    low <= BMP_END && high > BMP_END
}

/// интервалы отсортированы, не пересекаются и не касаются друг друга с одинаковым значением
/// в пределах одной плоскости (т.е. список минимален)
pub fn is_minimal<V: PartialEq>(intervals: &[Interval<V>]) -> bool
{
    intervals.iter().all(|i| i.low <= i.high)
        && intervals.windows(2).all(|pair| {
            let (a, b) = (&pair[0], &pair[1]);

            a.high < b.low && !(a.high + 1 == b.low && a.value == b.value && b.low != SUPPLEMENTARY_START)
        })
}

/// дописать интервал, объединив его с предыдущим, если они соприкасаются, имеют одинаковое
/// значение и находятся в одной плоскости
pub(crate) fn append<V: Copy + PartialEq>(output: &mut Vec<Interval<V>>, interval: Interval<V>)
{
    if let Some(last) = output.last_mut() {
        if last.high + 1 == interval.low
            && last.value == interval.value
            && interval.low != SUPPLEMENTARY_START
        {
            last.high = interval.high;
            return;
        }
    }

    output.push(interval);
}

/// дописать интервал, разрезав его по границе BMP, если он её пересекает
pub(crate) fn append_cut<V: Copy + PartialEq>(output: &mut Vec<Interval<V>>, low: u32, high: u32, value: V)
{
    match crosses_bmp(low, high) {
        true => {
            append(output, Interval::new(low, BMP_END, value));
            append(output, Interval::new(SUPPLEMENTARY_START, high, value));
        }
        false => append(output, Interval::new(low, high, value)),
    }
}
