use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidLanguageTag { tag: String, reason: &'static str },
    InvalidCount(String),
    InvalidInput(&'static str),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidLanguageTag { tag, reason } => {
                write!(f, "invalid language tag {tag:?}: {reason}")
            }
            CoreError::InvalidCount(value) => write!(f, "invalid plural count {value:?}"),
            CoreError::InvalidInput(message) => write!(f, "invalid input: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
