use crate::data::{SparseTableData, TableData};
use crate::search::search;
use crate::{BMP_END, LAST_CODEPOINT};

/// таблица интервалов, разделённая по границе BMP
#[derive(Debug, Clone, Copy)]
pub struct RangeTable<'a, V>
{
    bmp: &'a [(u16, u16, V)],
    others: &'a [(u32, u32, V)],
}

impl<'a, V: Copy> RangeTable<'a, V>
{
    /// заранее подготовленные данные
    pub fn from_baked(source: TableData<'a, V>) -> Self
    {
        Self {
            bmp: source.bmp,
            others: source.others,
        }
    }

    /// значение интервала, содержащего кодпоинт, None - если кодпоинт попал в промежуток
    #[inline]
    pub fn find(&self, code: u32) -> Option<V>
    {
        match code <= BMP_END {
            true => search(self.bmp, code as u16),
            false => search(self.others, code),
        }
    }

    /// количество интервалов в обеих частях таблицы
    pub fn len(&self) -> usize
    {
        self.bmp.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

/// таблица свойства, определённого для каждого кодпоинта (например, general category).
/// промежутки заполнены явными интервалами при подготовке
#[derive(Debug, Clone, Copy)]
pub struct TotalTable<'a, V>(RangeTable<'a, V>);

impl<'a, V: Copy> TotalTable<'a, V>
{
    pub fn from_baked(source: TableData<'a, V>) -> Self
    {
        Self(RangeTable::from_baked(source))
    }

    /// значение свойства для кодпоинта
    ///
    /// кодпоинт за пределами U+10FFFF - ошибка вызывающего, паникуем.
    /// отсутствие интервала означает, что таблица собрана неверно - тоже паникуем
    #[inline]
    pub fn lookup(&self, code: u32) -> V
    {
        if code > LAST_CODEPOINT {
            panic!("U+{:04X}: значение за пределами кодового пространства Unicode", code);
        }

        match self.0.find(code) {
            Some(value) => value,
            None => panic!(
                "U+{:04X}: кодпоинт не покрыт ни одним интервалом таблицы",
                code
            ),
        }
    }

    pub fn ranges(&self) -> &RangeTable<'a, V>
    {
        &self.0
    }
}

/// таблица разреженного свойства (CCC, производные свойства):
/// кодпоинт, попавший в промежуток, получает значение по умолчанию
#[derive(Debug, Clone, Copy)]
pub struct SparseTable<'a, V>
{
    table: RangeTable<'a, V>,
    default: V,
}

impl<'a, V: Copy> SparseTable<'a, V>
{
    pub fn from_baked(source: SparseTableData<'a, V>) -> Self
    {
        Self {
            table: RangeTable::from_baked(source.data),
            default: source.default,
        }
    }

    #[inline]
    pub fn lookup(&self, code: u32) -> V
    {
        self.table.find(code).unwrap_or(self.default)
    }

    pub fn default_value(&self) -> V
    {
        self.default
    }

    pub fn ranges(&self) -> &RangeTable<'a, V>
    {
        &self.table
    }
}

/// отображение кодпоинтов (simple case mapping), хранящееся как разница между
/// результатом и исходным кодпоинтом. 0 - кодпоинт отображается сам в себя
#[derive(Debug, Clone, Copy)]
pub struct DeltaTable<'a>(SparseTable<'a, i32>);

impl<'a> DeltaTable<'a>
{
    pub fn from_baked(source: SparseTableData<'a, i32>) -> Self
    {
        Self(SparseTable::from_baked(source))
    }

    #[inline]
    pub fn map(&self, code: u32) -> u32
    {
        code.wrapping_add_signed(self.0.lookup(code))
    }

    pub fn ranges(&self) -> &RangeTable<'a, i32>
    {
        self.0.ranges()
    }
}
