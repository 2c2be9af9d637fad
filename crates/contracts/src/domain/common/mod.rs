//! Общие типы для агрегатов

pub mod entity_metadata;

pub use entity_metadata::EntityMetadata;
