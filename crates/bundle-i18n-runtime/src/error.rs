use bundle_i18n_core::{CoreError, LanguageTag};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("message {id:?} already exists for locale {locale}")]
    DuplicateMessage { locale: LanguageTag, id: String },
    #[error("message {id:?} not found for locale {locale}")]
    MessageNotFound { locale: LanguageTag, id: String },
    #[error("invalid message file {path}: {reason}")]
    InvalidMessageFile { path: String, reason: String },
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
