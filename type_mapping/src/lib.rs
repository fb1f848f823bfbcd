//! Logical field type mapping for Oracle
//! This crate turns dialect-agnostic field descriptors into Oracle column declarations

pub mod errors;
pub mod field;
pub mod resolver;

pub use errors::TypeMappingError;
pub use field::{DataType, FieldDescriptor, TagSettings};
pub use resolver::{data_type_of, TypeMappingConfig, DEFAULT_STRING_SIZE, INDEXABLE_STRING_SIZE};
