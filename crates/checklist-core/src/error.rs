use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("invalid predicate '{0}': expected file_exists(\"<path>\") terms joined by 'or'")]
    InvalidPredicate(String),

    #[error("duplicate task id: {0}")]
    DuplicateTaskId(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
