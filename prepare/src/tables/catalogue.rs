use unicode_tables::GeneralCategory;

use crate::coalesce::Coverage;
use crate::config::Config;

/// название таблицы основной категории
pub const GENERAL_CATEGORY: &str = "general_category";
/// название таблицы CCC
pub const COMBINING_CLASS: &str = "combining_class";
/// названия таблиц simple case mapping
pub const UPPERCASE_MAPPING: &str = "uppercase_mapping";
pub const LOWERCASE_MAPPING: &str = "lowercase_mapping";
pub const TITLECASE_MAPPING: &str = "titlecase_mapping";

/// производные свойства, подготавливаемые по умолчанию
pub const DEFAULT_DERIVED_PROPERTIES: [&str; 3] = ["Alphabetic", "Lowercase", "Uppercase"];

/// общая категория определена для каждого кодпоинта, пропуски - Cn
pub const GENERAL_CATEGORY_COVERAGE: Coverage<GeneralCategory> = Coverage::Total {
    filler: GeneralCategory::Unassigned,
};
/// CCC по умолчанию - 0 (Not_Reordered)
pub const COMBINING_CLASS_COVERAGE: Coverage<u8> = Coverage::Sparse { default: 0 };
/// разница между отображением и кодпоинтом, 0 - отображения нет
pub const CASE_MAPPING_COVERAGE: Coverage<i32> = Coverage::Sparse { default: 0 };
/// производные свойства: кодпоинты, не упомянутые в файле, свойством не обладают
pub const DERIVED_COVERAGE: Coverage<bool> = Coverage::Sparse { default: false };

/// набор подготавливаемых свойств, фиксируется перед началом подготовки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue
{
    /// выбранные производные свойства из DerivedCoreProperties.txt
    pub derived: Vec<String>,
    /// готовить ли таблицы simple case mapping
    pub case_mappings: bool,
}

impl Default for Catalogue
{
    fn default() -> Self
    {
        Self {
            derived: DEFAULT_DERIVED_PROPERTIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            case_mappings: true,
        }
    }
}

impl From<&Config> for Catalogue
{
    fn from(config: &Config) -> Self
    {
        let mut derived = match config.no_derived_properties {
            true => vec![],
            false => config.properties.clone(),
        };

        derived.sort();
        derived.dedup();

        Self {
            derived,
            case_mappings: !config.no_case_mappings,
        }
    }
}
