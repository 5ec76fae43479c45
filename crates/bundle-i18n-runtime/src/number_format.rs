use bundle_i18n_core::{CoreResult, FormatBackend, LanguageTag};
use num_format::{Locale, ToFormattedString};

/// Groups digits using the CLDR separators of the rendering locale.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupingFormatBackend;

impl FormatBackend for GroupingFormatBackend {
    fn format_count(&self, locale: &LanguageTag, value: i64) -> CoreResult<String> {
        Ok(value.to_formatted_string(&number_locale(locale)))
    }
}

/// Separator table for a tag: the full tag, then its language, then `en`.
pub fn number_locale(tag: &LanguageTag) -> Locale {
    Locale::from_name(tag.normalized())
        .or_else(|_| Locale::from_name(tag.language()))
        .unwrap_or(Locale::en)
}

#[cfg(test)]
mod tests {
    use bundle_i18n_core::{FormatBackend, LanguageTag};

    use super::GroupingFormatBackend;

    fn render(tag: &str, value: i64) -> String {
        let locale = LanguageTag::parse(tag).expect("valid tag");
        GroupingFormatBackend
            .format_count(&locale, value)
            .expect("format")
    }

    #[test]
    fn british_english_uses_commas() {
        assert_eq!(render("en-GB", 1500), "1,500");
    }

    #[test]
    fn brazilian_portuguese_uses_dots() {
        assert_eq!(render("pt-BR", 1500), "1.500");
    }

    #[test]
    fn small_counts_are_unchanged() {
        assert_eq!(render("en", 1), "1");
        assert_eq!(render("pt-BR", 3), "3");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(render("xx", 1234567), "1,234,567");
    }

    #[test]
    fn negative_counts_keep_sign() {
        assert_eq!(render("en", -2500), "-2,500");
    }
}
