use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::planes::NarrowTable;
use crate::tables::*;
use crate::CompileError;

use self::format::format_ranges;
pub use self::format::EmitValue;

pub mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;

/// получатель подготовленных таблиц
pub trait TableEmitter
{
    /// таблица свойства, определённого для всех кодпоинтов
    fn emit_total<V: EmitValue>(&mut self, name: &str, table: &NarrowTable<V>) -> Result<(), CompileError>;

    /// таблица разреженного свойства и его значение по умолчанию
    fn emit_sparse<V: EmitValue>(
        &mut self,
        name: &str,
        table: &NarrowTable<V>,
        default: V,
    ) -> Result<(), CompileError>;
}

/// передать все таблицы получателю
pub fn write<E: TableEmitter>(tables: &CompiledTables, emitter: &mut E) -> Result<(), CompileError>
{
    emitter.emit_total(GENERAL_CATEGORY, &tables.general_category.narrow()?)?;
    emitter.emit_sparse(
        COMBINING_CLASS,
        &tables.combining_class.narrow()?,
        COMBINING_CLASS_COVERAGE.default_value(),
    )?;

    if let Some(mappings) = &tables.case_mappings {
        let default = CASE_MAPPING_COVERAGE.default_value();

        emitter.emit_sparse(UPPERCASE_MAPPING, &mappings.uppercase.narrow()?, default)?;
        emitter.emit_sparse(LOWERCASE_MAPPING, &mappings.lowercase.narrow()?, default)?;
        emitter.emit_sparse(TITLECASE_MAPPING, &mappings.titlecase.narrow()?, default)?;
    }

    for (name, table) in tables.derived.iter() {
        emitter.emit_sparse(
            name.to_lowercase().as_str(),
            &table.narrow()?,
            DERIVED_COVERAGE.default_value(),
        )?;
    }

    Ok(())
}

/// выражение TableData::<V> { .. } для подключения через include!
pub fn format_table<V: EmitValue>(table: &NarrowTable<V>) -> String
{
    format!(
        "TableData::<{}> {{\n  \
            bmp: &[{}  ],\n  \
            others: &[{}  ],\n\
        }}",
        V::TYPE,
        format_ranges(table.bmp.as_slice(), FORMAT_STRING_LENGTH),
        format_ranges(table.others.as_slice(), FORMAT_STRING_LENGTH),
    )
}

/// выражение SparseTableData::<V> { .. } для подключения через include!
pub fn format_sparse_table<V: EmitValue>(table: &NarrowTable<V>, default: V) -> String
{
    format!(
        "SparseTableData::<{}> {{\n  \
            data: {},\n  \
            default: {},\n\
        }}",
        V::TYPE,
        format_table(table),
        default.literal(),
    )
}

/// пишем каждую таблицу в отдельный файл <каталог>/<название>.rs.txt
pub struct DirectoryEmitter
{
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryEmitter
{
    pub fn new(dir: &Path) -> Self
    {
        Self {
            dir: dir.to_owned(),
            written: vec![],
        }
    }

    /// записанные файлы
    pub fn written(&self) -> &[PathBuf]
    {
        self.written.as_slice()
    }

    fn write_file(&mut self, name: &str, contents: String) -> Result<(), CompileError>
    {
        let path = self.dir.join(format!("{}.rs.txt", name));
        let error = |source| CompileError::Output {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(error)?;

        let mut file = File::create(&path).map_err(error)?;
        writeln!(file, "{}", contents).map_err(error)?;

        log::debug!("записана таблица {}", path.display());
        self.written.push(path);

        Ok(())
    }
}

impl TableEmitter for DirectoryEmitter
{
    fn emit_total<V: EmitValue>(&mut self, name: &str, table: &NarrowTable<V>) -> Result<(), CompileError>
    {
        self.write_file(name, format_table(table))
    }

    fn emit_sparse<V: EmitValue>(
        &mut self,
        name: &str,
        table: &NarrowTable<V>,
        default: V,
    ) -> Result<(), CompileError>
    {
        self.write_file(name, format_sparse_table(table, default))
    }
}
