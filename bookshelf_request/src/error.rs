use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,
    #[error("no table selected")]
    MissingTable,
    #[error("expected at least one value for `{0}`")]
    EmptyValueSet(String),
    #[error("expected a non-empty pattern for `{0}`")]
    EmptyPattern(String),
}

pub type SqlResult<T> = Result<T, SqlError>;
