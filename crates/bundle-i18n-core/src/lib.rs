#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod accept_language;
mod args;
mod error;
mod format_backend;
mod language_tag;
mod message;
mod negotiation;
pub mod plural;
pub mod template;
mod types;

pub use accept_language::parse_accept_language;
pub use args::{Args, Value};
pub use error::{CoreError, CoreResult};
pub use format_backend::{FormatBackend, PlainFormatBackend};
pub use language_tag::LanguageTag;
pub use message::Message;
pub use negotiation::{
    MatchKind, NegotiationResult, NegotiationTrace, negotiate_lookup, negotiate_lookup_with_trace,
};
pub use plural::{PluralCategory, PluralRule, PluralRules};
pub use template::{PLURAL_COUNT, render};
pub use types::{Key, PluralCount};
