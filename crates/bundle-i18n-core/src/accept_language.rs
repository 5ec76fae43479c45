use alloc::vec::Vec;

use crate::LanguageTag;

/// Parses an `Accept-Language` style list into tags ordered by quality.
///
/// Wildcards, zero-quality entries and unparsable tags are skipped. Entries
/// with equal quality keep their original order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageTag> {
    let mut weighted: Vec<(u16, LanguageTag)> = Vec::new();
    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }
        let mut quality = 1000;
        for param in parts {
            let param = param.trim();
            if let Some(value) = param.strip_prefix("q=").or_else(|| param.strip_prefix("Q=")) {
                quality = parse_quality(value).unwrap_or(0);
            }
        }
        if quality == 0 {
            continue;
        }
        let Ok(tag) = LanguageTag::parse(tag) else {
            continue;
        };
        weighted.push((quality, tag));
    }
    weighted.sort_by(|left, right| right.0.cmp(&left.0));
    weighted.into_iter().map(|(_, tag)| tag).collect()
}

// Quality values are kept as thousandths to avoid float ordering.
fn parse_quality(value: &str) -> Option<u16> {
    let value = value.trim();
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (value, ""),
    };
    if fraction.len() > 3 || !fraction.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let mut thousandths: u16 = 0;
    for (idx, ch) in fraction.chars().enumerate() {
        let digit = ch.to_digit(10)? as u16;
        thousandths += digit * [100, 10, 1][idx];
    }
    match whole {
        "0" | "" => Some(thousandths),
        "1" if thousandths == 0 => Some(1000),
        _ => None,
    }
}
