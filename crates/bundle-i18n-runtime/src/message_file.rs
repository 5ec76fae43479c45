use std::collections::BTreeMap;
use std::path::PathBuf;

use bundle_i18n_core::{LanguageTag, Message, PluralCategory};
use serde::{Deserialize, Serialize};

/// Messages parsed from one file, tagged with the file's locale.
#[derive(Debug, Clone)]
pub struct MessageFile {
    pub path: PathBuf,
    pub locale: LanguageTag,
    pub format: FileFormat,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// On-disk form of a message: a bare string or a table of plural variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageEntry {
    Text(String),
    Variants(VariantEntry),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub few: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub many: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

pub type MessageEntries = BTreeMap<String, MessageEntry>;

impl MessageEntry {
    pub fn into_message(self, id: &str) -> Result<Message, String> {
        match self {
            MessageEntry::Text(text) => Message::new(id, text).map_err(|err| err.to_string()),
            MessageEntry::Variants(entry) => entry.into_message(id),
        }
    }
}

impl VariantEntry {
    fn into_message(self, id: &str) -> Result<Message, String> {
        let other = self
            .other
            .ok_or_else(|| format!("message {id:?} has no \"other\" variant"))?;
        let mut message = Message::new(id, other).map_err(|err| err.to_string())?;
        if let Some(description) = self.description {
            message = message.with_description(description);
        }
        let variants = [
            (PluralCategory::Zero, self.zero),
            (PluralCategory::One, self.one),
            (PluralCategory::Two, self.two),
            (PluralCategory::Few, self.few),
            (PluralCategory::Many, self.many),
        ];
        for (category, template) in variants {
            if let Some(template) = template {
                message.set_variant(category, template);
            }
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use bundle_i18n_core::PluralCategory;

    use super::{FileFormat, MessageEntries, MessageEntry, VariantEntry};

    #[test]
    fn parses_text_and_variant_entries() {
        let json = r#"{
            "hello": "Hello!",
            "pluralMSG": {
                "description": "unread counter",
                "one": "You have {{.PluralCount}} message!",
                "other": "You have {{.PluralCount}} messages!"
            }
        }"#;
        let entries: MessageEntries = serde_json::from_str(json).expect("json");
        assert_eq!(entries["hello"], MessageEntry::Text("Hello!".to_string()));
        let message = entries["pluralMSG"]
            .clone()
            .into_message("pluralMSG")
            .expect("message");
        assert_eq!(message.description(), Some("unread counter"));
        assert_eq!(
            message.variant(PluralCategory::One),
            Some("You have {{.PluralCount}} message!")
        );
    }

    #[test]
    fn requires_other_variant() {
        let entry = MessageEntry::Variants(VariantEntry {
            one: Some("one".to_string()),
            ..VariantEntry::default()
        });
        let err = entry.into_message("count").expect_err("missing other");
        assert_eq!(err, "message \"count\" has no \"other\" variant");
    }

    #[test]
    fn rejects_unknown_variant_names() {
        let json = r#"{"hello": {"other": "Hi", "several": "Hey"}}"#;
        assert!(serde_json::from_str::<MessageEntries>(json).is_err());
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(FileFormat::from_extension("JSON"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("toml"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("yaml"), None);
    }
}
