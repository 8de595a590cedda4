use crate::rings::RingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NtruError {
    #[error("Ring arithmetic failed: {source}")]
    Ring {
        #[from]
        source: RingError,
    },

    #[error("Invalid parameter: {message}")]
    ParameterError { message: String },

    #[error("No invertible secret polynomial found in {attempts} attempts")]
    KeyGenExhausted { attempts: usize },

    #[error("Recorded field `{field}` disagrees with recomputation")]
    ValidationMismatch { field: &'static str },
}

impl NtruError {
    pub(crate) fn parameter(message: impl Into<String>) -> Self {
        Self::ParameterError {
            message: message.into(),
        }
    }
}

pub type NtruResult<T> = Result<T, NtruError>;
