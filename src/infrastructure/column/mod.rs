//! Column infrastructure: default column initializer and storage

mod initializer;
mod repository;

pub use initializer::ColumnInitializer;
pub use repository::InMemoryColumnTitleRepository;
