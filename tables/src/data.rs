/// запечённая таблица свойства: интервалы BMP в 16 битах, остальных плоскостей - в 32 битах
/// в таком виде таблицы записываются при подготовке данных и подключаются через include!
#[derive(Debug, Clone, Copy)]
pub struct TableData<'a, V>
{
    /// интервалы с кодпоинтами <= U+FFFF
    pub bmp: &'a [(u16, u16, V)],
    /// интервалы с кодпоинтами > U+FFFF
    pub others: &'a [(u32, u32, V)],
}

/// таблица разреженного свойства и значение для кодпоинтов, не попавших ни в один интервал
#[derive(Debug, Clone, Copy)]
pub struct SparseTableData<'a, V>
{
    pub data: TableData<'a, V>,
    pub default: V,
}
