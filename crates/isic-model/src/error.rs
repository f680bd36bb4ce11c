use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unsupported value for {field}: '{value}'")]
    UnknownTerm { field: &'static str, value: String },
    #[error("unknown diagnosis: '{0}'")]
    UnknownDiagnosis(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
