pub use data::SparseTableData;
pub use data::TableData;
pub use general_category::GeneralCategory;
pub use general_category::UnknownGeneralCategory;
pub use search::search;
pub use table::DeltaTable;
pub use table::RangeTable;
pub use table::SparseTable;
pub use table::TotalTable;

mod data;
mod general_category;
mod search;
mod table;

/// последний кодпоинт базовой многоязычной плоскости (BMP)
pub const BMP_END: u32 = 0xFFFF;
/// первый кодпоинт дополнительных плоскостей
pub const SUPPLEMENTARY_START: u32 = 0x10000;
/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;
