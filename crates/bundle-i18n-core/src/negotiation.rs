use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::LanguageTag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Language,
    Default,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiationResult {
    pub selected: LanguageTag,
    pub requested: Option<LanguageTag>,
    pub kind: MatchKind,
    pub trace: Option<NegotiationTrace>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiationTrace {
    pub attempts: Vec<String>,
}

/// Picks the best available locale for an ordered preference list.
///
/// Each preference is tried first as an exact tag, then as a language-only
/// match against `available` in sorted order. The default is selected when
/// no preference matches; the result is always in `available` or the default.
pub fn negotiate_lookup(
    requested: &[LanguageTag],
    available: &[LanguageTag],
    default_locale: &LanguageTag,
) -> NegotiationResult {
    negotiate_lookup_internal(requested, available, default_locale, false)
}

pub fn negotiate_lookup_with_trace(
    requested: &[LanguageTag],
    available: &[LanguageTag],
    default_locale: &LanguageTag,
) -> NegotiationResult {
    negotiate_lookup_internal(requested, available, default_locale, true)
}

fn negotiate_lookup_internal(
    requested: &[LanguageTag],
    available: &[LanguageTag],
    default_locale: &LanguageTag,
    with_trace: bool,
) -> NegotiationResult {
    let mut trace = if with_trace {
        Some(NegotiationTrace {
            attempts: Vec::new(),
        })
    } else {
        None
    };

    let mut sorted: Vec<&LanguageTag> = available.iter().collect();
    sorted.sort();

    for requested_tag in requested {
        if let Some(trace) = trace.as_mut() {
            trace.attempts.push(requested_tag.normalized().to_string());
        }
        if let Some(selected) = sorted.iter().find(|candidate| **candidate == requested_tag) {
            return NegotiationResult {
                selected: (*selected).clone(),
                requested: Some(requested_tag.clone()),
                kind: MatchKind::Exact,
                trace,
            };
        }

        if let Some(trace) = trace.as_mut() {
            trace.attempts.push(format!("{}-*", requested_tag.language()));
        }
        if let Some(selected) = sorted
            .iter()
            .find(|candidate| candidate.same_language(requested_tag))
        {
            return NegotiationResult {
                selected: (*selected).clone(),
                requested: Some(requested_tag.clone()),
                kind: MatchKind::Language,
                trace,
            };
        }
    }

    NegotiationResult {
        selected: default_locale.clone(),
        requested: requested.first().cloned(),
        kind: MatchKind::Default,
        trace,
    }
}
