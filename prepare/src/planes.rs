use unicode_tables::{TableData, BMP_END};

use crate::interval::Interval;
use crate::CompileError;

/// список интервалов свойства, разделённый по границе BMP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTable<V>
{
    /// интервалы с high <= U+FFFF
    pub bmp: Vec<Interval<V>>,
    /// интервалы с low > U+FFFF
    pub others: Vec<Interval<V>>,
}

/// таблица в виде, пригодном для поиска и записи: границы BMP укладываются в 16 бит
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowTable<V>
{
    pub bmp: Vec<(u16, u16, V)>,
    pub others: Vec<(u32, u32, V)>,
}

/// разделить отсортированный список интервалов на BMP и остальные плоскости.
/// точка разделения - первый интервал, верхняя граница которого больше U+FFFF
pub fn split_planes<V>(mut intervals: Vec<Interval<V>>) -> Result<SplitTable<V>, CompileError>
{
    let split = intervals.partition_point(|interval| interval.high <= BMP_END);

    if let Some(interval) = intervals.get(split) {
        if interval.straddles_bmp() {
            return Err(CompileError::IntervalStraddlesBmp {
                low: interval.low,
                high: interval.high,
            });
        }
    }

    let others = intervals.split_off(split);

    Ok(SplitTable {
        bmp: intervals,
        others,
    })
}

impl<V: Copy> SplitTable<V>
{
    /// обратная операция: склеить части в исходный список
    pub fn merged(&self) -> Vec<Interval<V>>
    {
        self.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval<V>>
    {
        self.bmp.iter().chain(self.others.iter())
    }

    pub fn len(&self) -> usize
    {
        self.bmp.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// перевести BMP-часть в 16-битные границы
    pub fn narrow(&self) -> Result<NarrowTable<V>, CompileError>
    {
        let bmp = self
            .bmp
            .iter()
            .map(|i| match (u16::try_from(i.low), u16::try_from(i.high)) {
                (Ok(low), Ok(high)) => Ok((low, high, i.value)),
                _ => Err(CompileError::IntervalStraddlesBmp {
                    low: i.low,
                    high: i.high,
                }),
            })
            .collect::<Result<Vec<_>, CompileError>>()?;

        let others = self.others.iter().map(|i| (i.low, i.high, i.value)).collect();

        Ok(NarrowTable { bmp, others })
    }
}

impl<V: Copy> NarrowTable<V>
{
    /// представление для поиска
    pub fn data(&self) -> TableData<'_, V>
    {
        TableData {
            bmp: self.bmp.as_slice(),
            others: self.others.as_slice(),
        }
    }

    /// размер таблиц в байтах
    pub fn size(&self) -> usize
    {
        self.bmp.len() * core::mem::size_of::<(u16, u16, V)>()
            + self.others.len() * core::mem::size_of::<(u32, u32, V)>()
    }
}
