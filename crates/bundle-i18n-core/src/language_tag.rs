use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

/// A language subtag with an optional region, e.g. `en`, `en-GB`, `es-419`.
///
/// Tags compare and sort by their normalized form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag {
    normalized: String,
    language: String,
    region: Option<String>,
}

impl LanguageTag {
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid(trimmed, "language tag is empty"));
        }

        let mut subtags = trimmed.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        let region = subtags.next();
        if subtags.next().is_some() {
            return Err(invalid(trimmed, "only language and region subtags are supported"));
        }

        let language = parse_language(language).map_err(|reason| invalid(trimmed, reason))?;
        let region = match region {
            Some(region) => Some(parse_region(region).map_err(|reason| invalid(trimmed, reason))?),
            None => None,
        };
        Ok(Self::from_parts(language, region))
    }

    /// Builds a tag from separately supplied subtags, validating each.
    pub fn compose(language: &str, region: Option<&str>) -> CoreResult<Self> {
        let label = match region {
            Some(region) => format!("{language}-{region}"),
            None => language.to_string(),
        };
        let language = parse_language(language).map_err(|reason| invalid(&label, reason))?;
        let region = match region {
            Some(region) => Some(parse_region(region).map_err(|reason| invalid(&label, reason))?),
            None => None,
        };
        Ok(Self::from_parts(language, region))
    }

    fn from_parts(language: String, region: Option<String>) -> Self {
        let normalized = match &region {
            Some(region) => format!("{language}-{region}"),
            None => language.clone(),
        };
        Self {
            normalized,
            language,
            region,
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn same_language(&self, other: &LanguageTag) -> bool {
        self.language == other.language
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for LanguageTag {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LanguageTag::parse(value)
    }
}

impl TryFrom<&str> for LanguageTag {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        LanguageTag::parse(value)
    }
}

fn invalid(tag: &str, reason: &'static str) -> CoreError {
    CoreError::InvalidLanguageTag {
        tag: tag.to_string(),
        reason,
    }
}

fn parse_language(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        return Err("language tag has empty subtag");
    }
    if !is_alpha(value) || !(2..=3).contains(&value.len()) {
        return Err("invalid language subtag");
    }
    Ok(value.to_ascii_lowercase())
}

fn parse_region(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        return Err("language tag has empty subtag");
    }
    if !is_region(value) {
        return Err("invalid region subtag");
    }
    Ok(value.to_ascii_uppercase())
}

fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_region(value: &str) -> bool {
    (value.len() == 2 && is_alpha(value))
        || (value.len() == 3 && value.chars().all(|ch| ch.is_ascii_digit()))
}
