pub mod coalesce;
pub mod config;
pub mod interval;
pub mod output;
pub mod pairing;
pub mod planes;
pub mod ranges;
pub mod tables;

mod error;

pub use coalesce::{coalesce, pad_code_space, Coalescer, Coverage};
pub use config::Config;
pub use error::CompileError;
pub use interval::{is_minimal, Interval};
pub use planes::{split_planes, NarrowTable, SplitTable};
pub use ranges::ranges_to_intervals;
pub use tables::{compile, compile_str, Catalogue, CompiledTables};
