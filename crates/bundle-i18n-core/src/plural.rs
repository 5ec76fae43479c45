//! Plural category selection for integer counts.
//!
//! Rules are looked up by language subtag. Languages without a registered
//! rule use the English-like rule: `one` for 1, `other` for everything else.
//! Negative counts are classified by their absolute value.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the absolute value of a count to its category.
pub type PluralRule = fn(u64) -> PluralCategory;

pub fn english(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

pub fn french(n: u64) -> PluralCategory {
    if n <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

pub fn no_plural(_n: u64) -> PluralCategory {
    PluralCategory::Other
}

pub fn east_slavic(n: u64) -> PluralCategory {
    let (mod10, mod100) = (n % 10, n % 100);
    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

pub fn polish(n: u64) -> PluralCategory {
    let (mod10, mod100) = (n % 10, n % 100);
    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

pub fn arabic(n: u64) -> PluralCategory {
    match (n, n % 100) {
        (0, _) => PluralCategory::Zero,
        (1, _) => PluralCategory::One,
        (2, _) => PluralCategory::Two,
        (_, 3..=10) => PluralCategory::Few,
        (_, 11..=99) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}

#[derive(Clone, Debug)]
pub struct PluralRules {
    rules: BTreeMap<String, PluralRule>,
    fallback: PluralRule,
}

impl PluralRules {
    /// A registry with only the English-like fallback.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
            fallback: english,
        }
    }

    pub fn builtin() -> Self {
        let mut rules = Self::empty();
        let table: [(&[&str], PluralRule); 5] = [
            (&["fr", "pt", "hi"], french),
            (&["ja", "zh", "ko", "vi", "th", "id"], no_plural),
            (&["ru", "uk", "be"], east_slavic),
            (&["pl"], polish),
            (&["ar"], arabic),
        ];
        for (languages, rule) in table {
            for language in languages {
                rules.register(language, rule);
            }
        }
        rules
    }

    /// Registers `rule` for a language subtag, replacing any previous rule.
    pub fn register(&mut self, language: &str, rule: PluralRule) {
        self.rules.insert(language.to_ascii_lowercase(), rule);
    }

    pub fn rule_for(&self, language: &str) -> PluralRule {
        self.rules.get(language).copied().unwrap_or(self.fallback)
    }

    pub fn category(&self, language: &str, count: i64) -> PluralCategory {
        (self.rule_for(language))(count.unsigned_abs())
    }
}

impl Default for PluralRules {
    fn default() -> Self {
        Self::builtin()
    }
}
