use thiserror::Error;

pub type OResult<T> = Result<T, OptionalError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    #[error("optional has no value")]
    Empty,
}
