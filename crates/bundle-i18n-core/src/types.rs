use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::InvalidInput("key is empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Key {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Key::new(value)
    }
}

impl core::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// An integer count used for plural selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluralCount(i64);

impl PluralCount {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Coerces a numeric string such as `"3"` or `" -12 "` into a count.
    ///
    /// Fractions, exponents and non-numeric text are rejected.
    pub fn parse(input: &str) -> CoreResult<Self> {
        input
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidCount(input.to_string()))
    }
}

impl fmt::Display for PluralCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PluralCount {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for PluralCount {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u32> for PluralCount {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

impl TryFrom<u64> for PluralCount {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self)
            .map_err(|_| CoreError::InvalidCount(value.to_string()))
    }
}

impl TryFrom<&str> for PluralCount {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PluralCount::parse(value)
    }
}

impl FromStr for PluralCount {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PluralCount::parse(value)
    }
}

impl From<PluralCount> for i64 {
    fn from(value: PluralCount) -> Self {
        value.0
    }
}
