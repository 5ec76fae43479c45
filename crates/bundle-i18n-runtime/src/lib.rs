#![forbid(unsafe_code)]

mod bundle;
mod error;
mod loader;
mod localize_config;
mod localizer;
mod message_file;
mod number_format;

pub use crate::bundle::Bundle;
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::loader::{load_message_file, locale_from_path, parse_message_file};
pub use crate::localize_config::{CountArg, LocalizeConfig};
pub use crate::localizer::Localizer;
pub use crate::message_file::{FileFormat, MessageEntries, MessageEntry, MessageFile, VariantEntry};
pub use crate::number_format::{GroupingFormatBackend, number_locale};
