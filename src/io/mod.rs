pub mod dot_writer;
pub mod edge_list_reader;
pub mod edge_list_writer;
pub mod records;

pub use dot_writer::*;
pub use edge_list_reader::*;
pub use edge_list_writer::*;
pub use records::{EdgeRecord, EdgeRecordGraph};

type Result<T> = std::result::Result<T, crate::errors::ReadError>;
