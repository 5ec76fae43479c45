use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::{CoreResult, Key, PluralCategory};

/// A translatable message: one template per plural category.
///
/// The `other` template is required at construction and is the fallback for
/// every category without its own template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    id: Key,
    description: Option<String>,
    other: String,
    variants: BTreeMap<PluralCategory, String>,
}

impl Message {
    pub fn new(id: impl Into<String>, other: impl Into<String>) -> CoreResult<Self> {
        Ok(Self {
            id: Key::new(id)?,
            description: None,
            other: other.into(),
            variants: BTreeMap::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variant(mut self, category: PluralCategory, template: impl Into<String>) -> Self {
        self.set_variant(category, template);
        self
    }

    pub fn set_variant(&mut self, category: PluralCategory, template: impl Into<String>) {
        let template = template.into();
        if category == PluralCategory::Other {
            self.other = template;
        } else {
            self.variants.insert(category, template);
        }
    }

    pub fn id(&self) -> &Key {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn other(&self) -> &str {
        &self.other
    }

    /// The template registered for `category`, if any.
    pub fn variant(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Other => Some(&self.other),
            _ => self.variants.get(&category).map(String::as_str),
        }
    }

    /// The template for `category`, falling back to `other`.
    pub fn select(&self, category: PluralCategory) -> &str {
        self.variant(category).unwrap_or(&self.other)
    }
}
