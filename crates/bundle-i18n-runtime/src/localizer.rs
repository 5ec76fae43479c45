use bundle_i18n_core::{
    FormatBackend, LanguageTag, NegotiationResult, negotiate_lookup, parse_accept_language,
};
use tracing::debug;

use crate::bundle::Bundle;
use crate::error::RuntimeResult;
use crate::localize_config::{CountArg, LocalizeConfig};
use crate::number_format::GroupingFormatBackend;

/// A bundle seen through an ordered list of locale preferences.
///
/// The locale is negotiated once, when the localizer is created, against the
/// locales that hold messages in the bundle.
pub struct Localizer<'a> {
    bundle: &'a Bundle,
    preferences: Vec<LanguageTag>,
    negotiation: NegotiationResult,
    backend: &'a dyn FormatBackend,
}

impl<'a> Localizer<'a> {
    pub fn new(bundle: &'a Bundle, preferences: Vec<LanguageTag>) -> Self {
        let available = bundle.languages();
        let negotiation = negotiate_lookup(&preferences, &available, bundle.default_locale());
        debug!(
            preferences = ?preferences.iter().map(LanguageTag::normalized).collect::<Vec<_>>(),
            selected = %negotiation.selected,
            kind = ?negotiation.kind,
            "negotiated locale"
        );
        Self {
            bundle,
            preferences,
            negotiation,
            backend: &GroupingFormatBackend,
        }
    }

    /// Parses each tag strictly; any malformed tag is an error.
    pub fn from_tags(bundle: &'a Bundle, tags: &[&str]) -> RuntimeResult<Self> {
        let preferences = tags
            .iter()
            .map(|tag| LanguageTag::parse(tag))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(bundle, preferences))
    }

    /// Accepts raw `Accept-Language` values such as `"fr-CH, fr;q=0.9"`,
    /// skipping entries that do not parse.
    pub fn from_accept_language(bundle: &'a Bundle, values: &[&str]) -> Self {
        let preferences = values
            .iter()
            .flat_map(|value| parse_accept_language(value))
            .collect();
        Self::new(bundle, preferences)
    }

    pub fn with_backend(mut self, backend: &'a dyn FormatBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn preferences(&self) -> &[LanguageTag] {
        &self.preferences
    }

    pub fn selected_locale(&self) -> &LanguageTag {
        &self.negotiation.selected
    }

    pub fn negotiation(&self) -> &NegotiationResult {
        &self.negotiation
    }

    pub fn localize(&self, message_id: &str, count: Option<CountArg>) -> RuntimeResult<String> {
        let config = LocalizeConfig::new(message_id).with_optional_count(count);
        self.localize_with(&config)
    }

    pub fn localize_plural(
        &self,
        message_id: &str,
        count: impl Into<CountArg>,
    ) -> RuntimeResult<String> {
        self.localize(message_id, Some(count.into()))
    }

    pub fn localize_with(&self, config: &LocalizeConfig) -> RuntimeResult<String> {
        self.bundle
            .localize_with(&self.negotiation.selected, config, self.backend)
    }
}
