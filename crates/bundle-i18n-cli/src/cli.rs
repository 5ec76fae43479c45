use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::command_localize::{LocalizeCommandError, LocalizeOptions, run_localize};
use crate::command_number::{NumberCommandError, NumberOptions, run_number};
use crate::command_resolve::{ResolveCommandError, ResolveOptions, run_resolve};
use crate::config::{CliConfig, load_config_or_default};
use crate::error::CliError;
use crate::logging::init_logging;

const DEFAULT_CONFIG: &str = "bundle-i18n.toml";

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] CliError),
    #[error(transparent)]
    Localize(#[from] LocalizeCommandError),
    #[error(transparent)]
    Resolve(#[from] ResolveCommandError),
    #[error(transparent)]
    Number(#[from] NumberCommandError),
}

pub fn run() -> Result<String, CliAppError> {
    run_with_args(std::env::args().skip(1).collect())
}

fn run_with_args(args: Vec<String>) -> Result<String, CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "localize" => {
            let options = parse_localize_options(args.collect())?;
            let config = prepare(&options.config_path)?;
            Ok(run_localize(&options, &config)?)
        }
        "resolve" => {
            let options = parse_resolve_options(args.collect())?;
            let config = prepare(&options.config_path)?;
            Ok(run_resolve(&options, &config)?)
        }
        "number" => {
            let options = parse_number_options(args.collect())?;
            prepare(&options.config_path)?;
            Ok(run_number(&options)?)
        }
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn prepare(config_path: &Path) -> Result<CliConfig, CliAppError> {
    let config = load_config_or_default(config_path)?;
    init_logging(&config.log_level);
    Ok(config)
}

fn parse_localize_options(args: Vec<String>) -> Result<LocalizeOptions, CliAppError> {
    let mut message_files = Vec::new();
    let mut langs = Vec::new();
    let mut id = None;
    let mut count = None;
    let mut default_message = None;
    let mut default_locale = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--messages" => message_files.push(PathBuf::from(next_value("--messages", &mut iter)?)),
            "--lang" => langs.push(next_value("--lang", &mut iter)?),
            "--id" => id = Some(next_value("--id", &mut iter)?),
            "--count" => count = Some(next_value("--count", &mut iter)?),
            "--default-message" => {
                default_message = Some(next_value("--default-message", &mut iter)?)
            }
            "--default-locale" => default_locale = Some(next_value("--default-locale", &mut iter)?),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let id = id.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(LocalizeOptions {
        message_files,
        langs,
        id,
        count,
        default_message,
        default_locale,
        config_path,
    })
}

fn parse_resolve_options(args: Vec<String>) -> Result<ResolveOptions, CliAppError> {
    let mut langs = Vec::new();
    let mut available = Vec::new();
    let mut default_locale = None;
    let mut trace = false;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => langs.push(next_value("--lang", &mut iter)?),
            "--available" => available.push(next_value("--available", &mut iter)?),
            "--default-locale" => default_locale = Some(next_value("--default-locale", &mut iter)?),
            "--trace" => trace = true,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    if available.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(ResolveOptions {
        langs,
        available,
        default_locale,
        trace,
        config_path,
    })
}

fn parse_number_options(args: Vec<String>) -> Result<NumberOptions, CliAppError> {
    let mut locale = None;
    let mut value = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => locale = Some(next_value("--locale", &mut iter)?),
            "--value" => value = Some(next_value("--value", &mut iter)?),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let locale = locale.ok_or_else(|| CliAppError::Usage(usage()))?;
    let value = value.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(NumberOptions {
        locale,
        value,
        config_path,
    })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: bundle-i18n localize --id <message-id> [--lang <tags>...] [--messages <path>...] [--count <n>] [--default-message <text>] [--default-locale <tag>] [--config <path>]\n       bundle-i18n resolve --available <tags> [--available <tags>...] [--lang <tags>...] [--default-locale <tag>] [--trace] [--config <path>]\n       bundle-i18n number --locale <tag> --value <n> [--config <path>]".to_string()
}
