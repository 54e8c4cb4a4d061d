use unicode_tables::LAST_CODEPOINT;
use unicode_tables_source::RangeMark;

use crate::interval::{append, append_cut, crosses_bmp, Interval};
use crate::pairing::{check_range_pair, is_range_pair};
use crate::CompileError;

/// как поступать с кодпоинтами, для которых нет записей
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage<V>
{
    /// свойство определено для каждого кодпоинта (general category):
    /// промежутки заполняются явными интервалами со значением filler
    Total
    {
        filler: V,
    },
    /// разреженное свойство (CCC, производные свойства): промежутки остаются пустыми,
    /// интервалы со значением default не записываются - поиск вернёт его сам
    Sparse
    {
        default: V,
    },
}

impl<V: Copy> Coverage<V>
{
    /// значение для кодпоинтов без записей
    pub fn default_value(&self) -> V
    {
        match *self {
            Coverage::Total { filler } => filler,
            Coverage::Sparse { default } => default,
        }
    }
}

/// причина, по которой текущая последовательность кодпоинтов прерывается
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuity
{
    /// следующий кодпоинт или вторая половина пары First/Last
    Contiguous,
    /// между кодпоинтами есть неназначенные
    Gap,
    /// переход из BMP в дополнительные плоскости
    PlaneBoundary,
}

/// текущая последовательность кодпоинтов с одинаковым значением
#[derive(Debug, Clone, Copy)]
struct Run<V>
{
    value: V,
    start: u32,
    end: u32,
    /// метка последней записи последовательности
    mark: RangeMark,
}

/// сворачивает упорядоченный поток значений свойства по кодпоинтам в минимальный
/// отсортированный список непересекающихся интервалов
#[derive(Debug, Clone)]
pub struct Coalescer<V>
{
    coverage: Coverage<V>,
    run: Option<Run<V>>,
    output: Vec<Interval<V>>,
}

impl<V: Copy + PartialEq> Coalescer<V>
{
    pub fn new(coverage: Coverage<V>) -> Self
    {
        Self {
            coverage,
            run: None,
            output: vec![],
        }
    }

    /// очередная запись: кодпоинт, его метка First/Last и значение свойства
    pub fn push(&mut self, code: u32, mark: RangeMark, value: V) -> Result<(), CompileError>
    {
        if code > LAST_CODEPOINT {
            return Err(CompileError::OutOfRange(code));
        }

        let mut run = match self.run.take() {
            Some(run) => run,
            None => {
                // первая запись - предыдущей последовательности нет
                self.run = Some(Run {
                    value,
                    start: code,
                    end: code,
                    mark,
                });
                return Ok(());
            }
        };

        if code <= run.end {
            return Err(CompileError::Unsorted {
                previous: run.end,
                code,
            });
        }

        let continuity = match is_range_pair(run.mark, mark) {
            true => {
                check_range_pair(run.end, code)?;

                if run.value != value {
                    return Err(CompileError::PairValueMismatch {
                        first: run.end,
                        last: code,
                    });
                }

                Continuity::Contiguous
            }
            false => continuity(run.end, code),
        };

        if continuity == Continuity::Contiguous && run.value == value {
            run.end = code;
            run.mark = mark;
            self.run = Some(run);

            return Ok(());
        }

        self.close(run);

        if continuity == Continuity::Gap {
            if let Coverage::Total { filler } = self.coverage {
                append_cut(&mut self.output, run.end + 1, code - 1, filler);
            }
        }

        self.run = Some(Run {
            value,
            start: code,
            end: code,
            mark,
        });

        Ok(())
    }

    /// закрыть последнюю последовательность и получить результат
    pub fn finish(mut self) -> Vec<Interval<V>>
    {
        if let Some(run) = self.run.take() {
            self.close(run);
        }

        self.output
    }

    fn close(&mut self, run: Run<V>)
    {
        if let Coverage::Sparse { default } = self.coverage {
            if run.value == default {
                return;
            }
        }

        append(&mut self.output, Interval::new(run.start, run.end, run.value));
    }
}

/// разрыв между соседними записями (не являющимися парой First/Last)
#[inline]
fn continuity(previous: u32, code: u32) -> Continuity
{
    if code > previous + 1 {
        return Continuity::Gap;
    }

    match crosses_bmp(previous, code) {
        true => Continuity::PlaneBoundary,
        false => Continuity::Contiguous,
    }
}

/// свернуть поток (кодпоинт, метка, значение) в список интервалов
pub fn coalesce<V, I>(entries: I, coverage: Coverage<V>) -> Result<Vec<Interval<V>>, CompileError>
where
    V: Copy + PartialEq,
    I: IntoIterator<Item = (u32, RangeMark, V)>,
{
    let mut coalescer = Coalescer::new(coverage);

    for (code, mark, value) in entries {
        coalescer.push(code, mark, value)?;
    }

    Ok(coalescer.finish())
}

/// дополнить список интервалов свойства, определённого для всех кодпоинтов, до U+0000 ..= U+10FFFF:
/// перед первым интервалом и после последнего добавляются интервалы со значением filler
pub fn pad_code_space<V: Copy + PartialEq>(intervals: Vec<Interval<V>>, filler: V) -> Vec<Interval<V>>
{
    let (first, last) = match (intervals.first(), intervals.last()) {
        (Some(first), Some(last)) => (first.low, last.high),
        _ => {
            let mut padded = vec![];
            append_cut(&mut padded, 0, LAST_CODEPOINT, filler);
            return padded;
        }
    };

    let mut padded = Vec::with_capacity(intervals.len() + 2);

    if first > 0 {
        append_cut(&mut padded, 0, first - 1, filler);
    }

    for interval in intervals {
        append(&mut padded, interval);
    }

    if last < LAST_CODEPOINT {
        append_cut(&mut padded, last + 1, LAST_CODEPOINT, filler);
    }

    padded
}
