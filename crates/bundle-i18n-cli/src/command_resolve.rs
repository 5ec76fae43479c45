use std::path::PathBuf;

use bundle_i18n_core::{CoreError, LanguageTag, MatchKind, negotiate_lookup_with_trace};
use thiserror::Error;

use crate::config::CliConfig;

#[derive(Debug, Error)]
pub enum ResolveCommandError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub langs: Vec<String>,
    pub available: Vec<String>,
    pub default_locale: Option<String>,
    pub trace: bool,
    pub config_path: PathBuf,
}

pub fn run_resolve(
    options: &ResolveOptions,
    config: &CliConfig,
) -> Result<String, ResolveCommandError> {
    let requested = parse_tag_list(&options.langs)?;
    let available = parse_tag_list(&options.available)?;
    let default_locale = LanguageTag::parse(
        options
            .default_locale
            .as_deref()
            .unwrap_or(&config.default_locale),
    )?;

    let result = negotiate_lookup_with_trace(&requested, &available, &default_locale);
    let mut output = format!("{} ({})", result.selected, match_label(result.kind));
    if options.trace {
        if let Some(trace) = &result.trace {
            for attempt in &trace.attempts {
                output.push_str(&format!("\ntried {attempt}"));
            }
        }
    }
    Ok(output)
}

fn parse_tag_list(values: &[String]) -> Result<Vec<LanguageTag>, CoreError> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(LanguageTag::parse)
        .collect()
}

fn match_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Exact => "exact",
        MatchKind::Language => "language",
        MatchKind::Default => "default",
    }
}
