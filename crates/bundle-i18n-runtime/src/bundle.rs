use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use bundle_i18n_core::{
    Args, FormatBackend, Key, LanguageTag, Message, PLURAL_COUNT, PluralRule, PluralRules, Value,
    render,
};
use tracing::{debug, trace, warn};

use crate::error::{RuntimeError, RuntimeResult};
use crate::loader::load_message_file;
use crate::localize_config::LocalizeConfig;
use crate::message_file::MessageFile;
use crate::number_format::GroupingFormatBackend;

/// Messages for every locale plus the default locale they fall back to.
///
/// A bundle is filled through `&mut self` and read through `&self`, so it can
/// be shared across threads (`Arc<Bundle>`) once setup is done.
#[derive(Clone, Debug)]
pub struct Bundle {
    default_locale: LanguageTag,
    messages: BTreeMap<LanguageTag, BTreeMap<Key, Message>>,
    plural_rules: PluralRules,
}

impl Bundle {
    pub fn new(default_locale: LanguageTag) -> Self {
        Self {
            default_locale,
            messages: BTreeMap::new(),
            plural_rules: PluralRules::builtin(),
        }
    }

    pub fn default_locale(&self) -> &LanguageTag {
        &self.default_locale
    }

    /// Adds one message. An id already present for `locale` is rejected and
    /// the existing message is kept.
    pub fn add_message(&mut self, locale: &LanguageTag, message: Message) -> RuntimeResult<()> {
        self.add_messages(locale, [message])
    }

    /// Adds a batch of messages, all or nothing.
    pub fn add_messages(
        &mut self,
        locale: &LanguageTag,
        messages: impl IntoIterator<Item = Message>,
    ) -> RuntimeResult<()> {
        let messages: Vec<Message> = messages.into_iter().collect();
        let existing = self.messages.get(locale);
        let mut incoming = BTreeSet::new();
        for message in &messages {
            let id = message.id();
            let taken = existing.is_some_and(|entries| entries.contains_key(id));
            if taken || !incoming.insert(id) {
                return Err(RuntimeError::DuplicateMessage {
                    locale: locale.clone(),
                    id: id.to_string(),
                });
            }
        }

        let entries = self.messages.entry(locale.clone()).or_default();
        for message in messages {
            trace!(locale = %locale, id = %message.id(), "added message");
            entries.insert(message.id().clone(), message);
        }
        Ok(())
    }

    pub fn add_message_file(&mut self, file: MessageFile) -> RuntimeResult<()> {
        debug!(
            path = %file.path.display(),
            locale = %file.locale,
            count = file.messages.len(),
            "adding message file"
        );
        self.add_messages(&file.locale, file.messages)
    }

    /// Loads a `.json` or `.toml` message file and returns its locale.
    pub fn load_message_file(&mut self, path: &Path) -> RuntimeResult<LanguageTag> {
        let file = load_message_file(path)?;
        let locale = file.locale.clone();
        self.add_message_file(file)?;
        Ok(locale)
    }

    /// Locales that hold at least one message, in sorted order.
    pub fn languages(&self) -> Vec<LanguageTag> {
        self.messages
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(locale, _)| locale.clone())
            .collect()
    }

    pub fn message(&self, locale: &LanguageTag, id: &str) -> Option<&Message> {
        self.messages.get(locale).and_then(|entries| entries.get(id))
    }

    pub fn plural_rules(&self) -> &PluralRules {
        &self.plural_rules
    }

    pub fn set_plural_rule(&mut self, language: &str, rule: PluralRule) {
        self.plural_rules.register(language, rule);
    }

    /// Localizes `message_id` for `locale`, falling back to the default
    /// locale, with counts grouped per locale.
    pub fn localize(
        &self,
        message_id: &str,
        locale: &LanguageTag,
        count: Option<i64>,
    ) -> RuntimeResult<String> {
        let mut config = LocalizeConfig::new(message_id);
        if let Some(count) = count {
            config = config.with_count(count);
        }
        self.localize_with(locale, &config, &GroupingFormatBackend)
    }

    pub fn localize_with(
        &self,
        locale: &LanguageTag,
        config: &LocalizeConfig,
        backend: &dyn FormatBackend,
    ) -> RuntimeResult<String> {
        let count = config.plural_count()?;
        let message_id = config.message_id();

        let (render_locale, message) = match self.lookup(locale, message_id) {
            Some(found) => found,
            None => match config.default_message() {
                Some(message) => {
                    warn!(
                        locale = %locale,
                        id = message_id,
                        "message missing from bundle, using default message"
                    );
                    (&self.default_locale, message)
                }
                None => {
                    return Err(RuntimeError::MessageNotFound {
                        locale: locale.clone(),
                        id: message_id.to_string(),
                    });
                }
            },
        };

        let mut args = localized_args(config.template_data(), render_locale, backend)?;
        let template = match count {
            None => message.other(),
            Some(count) => {
                let category = self
                    .plural_rules
                    .category(render_locale.language(), count.get());
                if args.get(PLURAL_COUNT).is_none() {
                    args.insert(PLURAL_COUNT, backend.format_count(render_locale, count.get())?);
                }
                debug!(
                    locale = %render_locale,
                    id = message_id,
                    count = count.get(),
                    %category,
                    "selected plural variant"
                );
                message.select(category)
            }
        };
        Ok(render(template, &args))
    }

    fn lookup(&self, locale: &LanguageTag, id: &str) -> Option<(&LanguageTag, &Message)> {
        [locale, &self.default_locale].into_iter().find_map(|tag| {
            let (tag, entries) = self.messages.get_key_value(tag)?;
            entries.get(id).map(|message| (tag, message))
        })
    }
}

/// Integer template data is grouped for `locale` like the plural count.
fn localized_args(
    data: &Args,
    locale: &LanguageTag,
    backend: &dyn FormatBackend,
) -> RuntimeResult<Args> {
    let mut args = Args::new();
    for (name, value) in data.iter() {
        let value = match value {
            Value::Int(number) => Value::Str(backend.format_count(locale, *number)?),
            other => other.clone(),
        };
        args.insert(name, value);
    }
    Ok(args)
}
