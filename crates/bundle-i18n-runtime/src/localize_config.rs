use bundle_i18n_core::{Args, CoreResult, Message, PluralCount};

/// A plural count as supplied by a caller, before coercion.
///
/// Integers pass through; text must parse as an integer or localization
/// fails with an invalid-count error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountArg {
    Int(i64),
    Text(String),
}

impl CountArg {
    pub fn coerce(&self) -> CoreResult<PluralCount> {
        match self {
            CountArg::Int(value) => Ok(PluralCount::new(*value)),
            CountArg::Text(text) => PluralCount::parse(text),
        }
    }
}

impl From<i64> for CountArg {
    fn from(value: i64) -> Self {
        CountArg::Int(value)
    }
}

impl From<i32> for CountArg {
    fn from(value: i32) -> Self {
        CountArg::Int(i64::from(value))
    }
}

impl From<u32> for CountArg {
    fn from(value: u32) -> Self {
        CountArg::Int(i64::from(value))
    }
}

impl From<PluralCount> for CountArg {
    fn from(value: PluralCount) -> Self {
        CountArg::Int(value.get())
    }
}

impl From<&str> for CountArg {
    fn from(value: &str) -> Self {
        CountArg::Text(value.to_string())
    }
}

impl From<String> for CountArg {
    fn from(value: String) -> Self {
        CountArg::Text(value)
    }
}

/// One localization request.
#[derive(Clone, Debug)]
pub struct LocalizeConfig {
    message_id: String,
    plural_count: Option<CountArg>,
    template_data: Args,
    default_message: Option<Message>,
}

impl LocalizeConfig {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            plural_count: None,
            template_data: Args::new(),
            default_message: None,
        }
    }

    pub fn with_count(mut self, count: impl Into<CountArg>) -> Self {
        self.plural_count = Some(count.into());
        self
    }

    pub fn with_optional_count(mut self, count: Option<CountArg>) -> Self {
        self.plural_count = count;
        self
    }

    pub fn with_template_data(mut self, data: Args) -> Self {
        self.template_data = data;
        self
    }

    /// Used when no bundle locale has `message_id`.
    pub fn with_default_message(mut self, message: Message) -> Self {
        self.default_message = Some(message);
        self
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn plural_count(&self) -> CoreResult<Option<PluralCount>> {
        self.plural_count.as_ref().map(CountArg::coerce).transpose()
    }

    pub fn template_data(&self) -> &Args {
        &self.template_data
    }

    pub fn default_message(&self) -> Option<&Message> {
        self.default_message.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use bundle_i18n_core::{CoreError, PluralCount};

    use super::{CountArg, LocalizeConfig};

    #[test]
    fn coerces_numeric_text() {
        let config = LocalizeConfig::new("pluralMSG").with_count("3");
        assert_eq!(config.plural_count(), Ok(Some(PluralCount::new(3))));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let config = LocalizeConfig::new("pluralMSG").with_count("many");
        assert_eq!(
            config.plural_count(),
            Err(CoreError::InvalidCount("many".to_string()))
        );
    }

    #[test]
    fn absent_count_is_none() {
        let config = LocalizeConfig::new("hello");
        assert_eq!(config.plural_count(), Ok(None));
        assert_eq!(config.message_id(), "hello");
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(CountArg::from(2), CountArg::Int(2));
        assert_eq!(CountArg::from(7u32), CountArg::Int(7));
        assert_eq!(CountArg::from(PluralCount::new(-1)), CountArg::Int(-1));
    }
}
