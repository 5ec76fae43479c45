use std::path::PathBuf;

use bundle_i18n_core::{CoreError, LanguageTag, Message};
use bundle_i18n_runtime::{Bundle, LocalizeConfig, Localizer, RuntimeError};
use thiserror::Error;
use tracing::info;

use crate::config::CliConfig;

#[derive(Debug, Error)]
pub enum LocalizeCommandError {
    #[error("no message files given (use --messages or message_files in the config)")]
    NoMessageFiles,
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone)]
pub struct LocalizeOptions {
    pub message_files: Vec<PathBuf>,
    pub langs: Vec<String>,
    pub id: String,
    pub count: Option<String>,
    pub default_message: Option<String>,
    pub default_locale: Option<String>,
    pub config_path: PathBuf,
}

pub fn run_localize(
    options: &LocalizeOptions,
    config: &CliConfig,
) -> Result<String, LocalizeCommandError> {
    let default_locale = options
        .default_locale
        .as_deref()
        .unwrap_or(&config.default_locale);
    let mut bundle = Bundle::new(LanguageTag::parse(default_locale)?);

    let files: Vec<PathBuf> = if options.message_files.is_empty() {
        config.message_files.iter().map(PathBuf::from).collect()
    } else {
        options.message_files.clone()
    };
    if files.is_empty() {
        return Err(LocalizeCommandError::NoMessageFiles);
    }
    for path in &files {
        let locale = bundle.load_message_file(path)?;
        info!(path = %path.display(), %locale, "loaded message file");
    }

    let tags: Vec<&str> = options
        .langs
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect();
    let localizer = Localizer::from_tags(&bundle, &tags)?;

    let mut request = LocalizeConfig::new(options.id.as_str());
    if let Some(count) = &options.count {
        request = request.with_count(count.as_str());
    }
    if let Some(text) = &options.default_message {
        request = request.with_default_message(Message::new(options.id.as_str(), text.as_str())?);
    }
    Ok(localizer.localize_with(&request)?)
}

#[cfg(test)]
mod tests {
    use super::{LocalizeCommandError, LocalizeOptions, run_localize};
    use crate::config::CliConfig;
    use bundle_i18n_runtime::RuntimeError;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("bundle_i18n_localize_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn write_fixtures(dir: &PathBuf) -> Vec<PathBuf> {
        let en = dir.join("active.en.toml");
        fs::write(
            &en,
            "hello = \"Hello!\"\n\n[pluralMSG]\none = \"You have {{.PluralCount}} message!\"\nother = \"You have {{.PluralCount}} messages!\"\n",
        )
        .expect("write en");
        let fr = dir.join("active.fr.json");
        fs::write(&fr, r#"{"hello": "Bonjour!"}"#).expect("write fr");
        vec![en, fr]
    }

    fn options(files: Vec<PathBuf>, langs: &str, id: &str) -> LocalizeOptions {
        LocalizeOptions {
            message_files: files,
            langs: vec![langs.to_string()],
            id: id.to_string(),
            count: None,
            default_message: None,
            default_locale: None,
            config_path: PathBuf::from("bundle-i18n.toml"),
        }
    }

    #[test]
    fn localizes_from_files() {
        let dir = temp_dir();
        let files = write_fixtures(&dir);
        let config = CliConfig::default();

        let output = run_localize(&options(files.clone(), "fr,en", "hello"), &config)
            .expect("localize");
        assert_eq!(output, "Bonjour!");

        let mut plural = options(files, "en", "pluralMSG");
        plural.count = Some("3".to_string());
        let output = run_localize(&plural, &config).expect("plural");
        assert_eq!(output, "You have 3 messages!");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn default_message_fills_missing_id() {
        let dir = temp_dir();
        let files = write_fixtures(&dir);
        let mut request = options(files, "en", "default");
        request.default_message = Some("THIS IS A DEFAULT MESSAGE".to_string());
        let output = run_localize(&request, &CliConfig::default()).expect("default");
        assert_eq!(output, "THIS IS A DEFAULT MESSAGE");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_message_is_reported() {
        let dir = temp_dir();
        let files = write_fixtures(&dir);
        let err = run_localize(&options(files, "en", "nope"), &CliConfig::default())
            .expect_err("missing");
        assert!(matches!(
            err,
            LocalizeCommandError::Runtime(RuntimeError::MessageNotFound { .. })
        ));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn requires_message_files() {
        let err = run_localize(&options(Vec::new(), "en", "hello"), &CliConfig::default())
            .expect_err("no files");
        assert!(matches!(err, LocalizeCommandError::NoMessageFiles));
    }
}
