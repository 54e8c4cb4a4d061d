pub mod properties;

mod derived_properties;
mod error;
mod files;
mod record;
mod unicode_data;

pub use derived_properties::parse_derived_line;
pub use derived_properties::DerivedProperties;

pub use error::SourceError;

pub use files::read_source;
pub use files::DERIVED_CORE_PROPERTIES;
pub use files::UNICODE_DATA;

pub use record::parse_record;
pub use record::RangeMark;
pub use record::Record;
pub use record::UNICODE_DATA_FIELDS;

pub use unicode_data::records;
pub use unicode_data::parse_unicode_data;
pub use unicode_data::read_unicode_data;
