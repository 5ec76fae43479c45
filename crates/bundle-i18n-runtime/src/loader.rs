use std::fs;
use std::path::Path;

use bundle_i18n_core::LanguageTag;

use crate::error::{RuntimeError, RuntimeResult};
use crate::message_file::{FileFormat, MessageEntries, MessageFile};

pub fn load_message_file(path: &Path) -> RuntimeResult<MessageFile> {
    let contents = fs::read_to_string(path)?;
    parse_message_file(&contents, path)
}

/// Parses message file contents; `path` supplies the locale and format.
///
/// `en.json`, `active.pt-BR.toml` and `translate.fr.json` all name their
/// locale in the last dot-separated segment of the file stem.
pub fn parse_message_file(contents: &str, path: &Path) -> RuntimeResult<MessageFile> {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(FileFormat::from_extension)
        .ok_or_else(|| invalid_file(path, "unsupported file extension".to_string()))?;
    let locale = locale_from_path(path)?;

    let entries: MessageEntries = match format {
        FileFormat::Json => serde_json::from_str(contents)?,
        FileFormat::Toml => toml::from_str(contents)?,
    };

    let mut messages = Vec::with_capacity(entries.len());
    for (id, entry) in entries {
        let message = entry
            .into_message(&id)
            .map_err(|reason| invalid_file(path, reason))?;
        messages.push(message);
    }

    Ok(MessageFile {
        path: path.to_path_buf(),
        locale,
        format,
        messages,
    })
}

pub fn locale_from_path(path: &Path) -> RuntimeResult<LanguageTag> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| invalid_file(path, "missing file name".to_string()))?;
    let tag = stem.rsplit('.').next().unwrap_or(stem);
    LanguageTag::parse(tag).map_err(|err| invalid_file(path, err.to_string()))
}

fn invalid_file(path: &Path, reason: String) -> RuntimeError {
    RuntimeError::InvalidMessageFile {
        path: path.display().to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::{load_message_file, locale_from_path, parse_message_file};
    use crate::error::RuntimeError;
    use crate::message_file::FileFormat;
    use bundle_i18n_core::PluralCategory;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("bundle_i18n_loader_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    #[test]
    fn reads_locale_from_file_name() {
        let tag = locale_from_path(Path::new("locales/active.pt-BR.toml")).expect("tag");
        assert_eq!(tag.normalized(), "pt-BR");
        let tag = locale_from_path(Path::new("en.json")).expect("tag");
        assert_eq!(tag.normalized(), "en");
    }

    #[test]
    fn rejects_file_without_locale() {
        let err = locale_from_path(Path::new("messages.json")).expect_err("no locale");
        assert!(matches!(err, RuntimeError::InvalidMessageFile { .. }));
    }

    #[test]
    fn parses_toml_messages() {
        let contents = r#"
hello = "Hello!"

[pluralMSG]
one = "You have {{.PluralCount}} message!"
other = "You have {{.PluralCount}} messages!"
"#;
        let file = parse_message_file(contents, Path::new("active.en.toml")).expect("parse");
        assert_eq!(file.format, FileFormat::Toml);
        assert_eq!(file.locale.normalized(), "en");
        assert_eq!(file.messages.len(), 2);
        let plural = file
            .messages
            .iter()
            .find(|message| message.id().as_str() == "pluralMSG")
            .expect("plural message");
        assert!(plural.variant(PluralCategory::One).is_some());
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = parse_message_file("hello: Hi", Path::new("en.yaml")).expect_err("yaml");
        assert!(matches!(err, RuntimeError::InvalidMessageFile { .. }));
    }

    #[test]
    fn reports_missing_other_variant() {
        let err = parse_message_file(r#"{"n": {"one": "x"}}"#, Path::new("en.json"))
            .expect_err("missing other");
        match err {
            RuntimeError::InvalidMessageFile { reason, .. } => {
                assert!(reason.contains("other"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_json_from_disk() {
        let dir = temp_dir();
        let path = dir.join("fr.json");
        fs::write(&path, r#"{"hello": "Bonjour!"}"#).expect("write");
        let file = load_message_file(&path).expect("load");
        assert_eq!(file.locale.normalized(), "fr");
        assert_eq!(file.messages[0].other(), "Bonjour!");
        fs::remove_dir_all(&dir).ok();
    }
}
