use unicode_tables::LAST_CODEPOINT;

use crate::interval::{append_cut, Interval};
use crate::CompileError;

/// диапазоны производного свойства (DerivedCoreProperties.txt) в список интервалов:
/// диапазоны уже заданы целиком, поэтому сворачивать по кодпоинтам не нужно - достаточно
/// отсортировать, объединить пересекающиеся и соседние и разрезать по границе BMP
pub fn ranges_to_intervals(ranges: &[(u32, u32)]) -> Result<Vec<Interval<bool>>, CompileError>
{
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(sorted.len());

    for (from, to) in sorted {
        if from > to {
            return Err(CompileError::InvertedRange { from, to });
        }

        if to > LAST_CODEPOINT {
            return Err(CompileError::OutOfRange(to));
        }

        match merged.last_mut() {
            Some(last) if from <= last.1 + 1 => last.1 = last.1.max(to),
            _ => merged.push((from, to)),
        }
    }

    let mut intervals = Vec::with_capacity(merged.len());

    for (from, to) in merged {
        append_cut(&mut intervals, from, to, true);
    }

    Ok(intervals)
}
