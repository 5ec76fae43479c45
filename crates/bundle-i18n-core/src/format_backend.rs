use alloc::string::{String, ToString};

use crate::{CoreResult, LanguageTag};

/// Renders plural counts before they are substituted into a template.
pub trait FormatBackend {
    fn format_count(&self, locale: &LanguageTag, value: i64) -> CoreResult<String>;
}

/// Renders counts as plain digits with no grouping.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormatBackend;

impl FormatBackend for PlainFormatBackend {
    fn format_count(&self, _locale: &LanguageTag, value: i64) -> CoreResult<String> {
        Ok(value.to_string())
    }
}

impl<T: FormatBackend + ?Sized> FormatBackend for &T {
    fn format_count(&self, locale: &LanguageTag, value: i64) -> CoreResult<String> {
        (**self).format_count(locale, value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use super::{FormatBackend, PlainFormatBackend};
    use crate::LanguageTag;

    struct TaggedBackend;

    impl FormatBackend for TaggedBackend {
        fn format_count(&self, locale: &LanguageTag, value: i64) -> crate::CoreResult<String> {
            Ok(format!("{locale}:{value}"))
        }
    }

    fn render_with(backend: &dyn FormatBackend, value: i64) -> String {
        let locale = LanguageTag::parse("en-GB").expect("valid tag");
        backend.format_count(&locale, value).expect("format ok")
    }

    #[test]
    fn plain_backend_has_no_grouping() {
        assert_eq!(render_with(&PlainFormatBackend, 1500), "1500");
        assert_eq!(render_with(&PlainFormatBackend, -7), "-7");
    }

    #[test]
    fn dispatches_through_trait_object() {
        assert_eq!(render_with(&TaggedBackend, 3), "en-GB:3");
    }
}
