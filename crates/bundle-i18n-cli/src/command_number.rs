use std::path::PathBuf;

use bundle_i18n_core::{CoreError, FormatBackend, LanguageTag, PluralCount};
use bundle_i18n_runtime::GroupingFormatBackend;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumberCommandError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone)]
pub struct NumberOptions {
    pub locale: String,
    pub value: String,
    pub config_path: PathBuf,
}

pub fn run_number(options: &NumberOptions) -> Result<String, NumberCommandError> {
    let locale = LanguageTag::parse(&options.locale)?;
    let value = PluralCount::parse(&options.value)?;
    Ok(GroupingFormatBackend.format_count(&locale, value.get())?)
}
