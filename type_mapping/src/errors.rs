use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMappingError {
    /// The field carries no type the dialect can express.
    #[error("invalid sql type {type_name} for field '{field}' in oracle")]
    InvalidType { field: String, type_name: String },
}
