use std::path::PathBuf;

use clap::Parser;

use crate::tables::DEFAULT_DERIVED_PROPERTIES;

/// подготовка таблиц свойств Unicode из файлов UCD
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config
{
    /// каталог с файлами UCD (UnicodeData.txt, DerivedCoreProperties.txt)
    #[arg(long, default_value = "./../data/ucd")]
    pub ucd: PathBuf,

    /// каталог, в который записываются подготовленные таблицы
    #[arg(long, default_value = "./../data/tables")]
    pub output: PathBuf,

    /// производное свойство из DerivedCoreProperties.txt, можно указать несколько раз
    #[arg(long = "property", value_name = "NAME", default_values_t = DEFAULT_DERIVED_PROPERTIES.map(String::from))]
    pub properties: Vec<String>,

    /// не готовить таблицы производных свойств, DerivedCoreProperties.txt не требуется
    #[arg(long, conflicts_with = "properties")]
    pub no_derived_properties: bool,

    /// не готовить таблицы simple case mapping
    #[arg(long)]
    pub no_case_mappings: bool,
}
