use crate::planes::SplitTable;
use crate::tables::*;
use crate::CompileError;

use super::format::EmitValue;

/// размеры подготовленной таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats
{
    pub name: String,
    /// интервалов в BMP
    pub bmp: usize,
    /// интервалов в остальных плоскостях
    pub others: usize,
    /// размер запечённых таблиц в байтах
    pub size: usize,
}

impl TableStats
{
    pub fn of<V: EmitValue>(name: &str, table: &SplitTable<V>) -> Result<Self, CompileError>
    {
        Ok(Self {
            name: name.to_owned(),
            bmp: table.bmp.len(),
            others: table.others.len(),
            size: table.narrow()?.size(),
        })
    }
}

/// размеры всех подготовленных таблиц
pub fn collect(tables: &CompiledTables) -> Result<Vec<TableStats>, CompileError>
{
    let mut stats = vec![
        TableStats::of(GENERAL_CATEGORY, &tables.general_category)?,
        TableStats::of(COMBINING_CLASS, &tables.combining_class)?,
    ];

    if let Some(mappings) = &tables.case_mappings {
        stats.push(TableStats::of(UPPERCASE_MAPPING, &mappings.uppercase)?);
        stats.push(TableStats::of(LOWERCASE_MAPPING, &mappings.lowercase)?);
        stats.push(TableStats::of(TITLECASE_MAPPING, &mappings.titlecase)?);
    }

    for (name, table) in tables.derived.iter() {
        stats.push(TableStats::of(name, table)?);
    }

    Ok(stats)
}

/// информация о подготовленных таблицах
pub fn print(stats: &[TableStats])
{
    for table in stats {
        log::info!(
            "{}: интервалов в BMP: {}, в остальных плоскостях: {}, размер: {} байт",
            table.name,
            table.bmp,
            table.others,
            table.size,
        );
    }

    log::info!(
        "общий размер: {} байт",
        stats.iter().map(|table| table.size).sum::<usize>()
    );
}
