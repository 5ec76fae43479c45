//! `{{.Name}}` placeholder substitution.
//!
//! Replacement is a single left-to-right pass: substituted values are never
//! scanned again. Placeholders naming an argument that is not supplied are
//! kept verbatim, and an unterminated `{{` is ordinary text.

use alloc::string::{String, ToString};

use crate::Args;

/// Argument name under which the plural count is substituted.
pub const PLURAL_COUNT: &str = "PluralCount";

pub fn render(template: &str, args: &Args) -> String {
    if !template.contains("{{") {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let inner_start = start + 2;
        let Some(len) = rest[inner_start..].find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };
        let inner_end = inner_start + len;
        let token = &rest[start..inner_end + 2];
        match placeholder_name(&rest[inner_start..inner_end]).and_then(|name| args.get(name)) {
            Some(value) => output.push_str(&value.to_string()),
            None => output.push_str(token),
        }
        rest = &rest[inner_end + 2..];
    }
    output.push_str(rest);
    output
}

fn placeholder_name(inner: &str) -> Option<&str> {
    let name = inner.trim().strip_prefix('.')?;
    if !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
        Some(name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{PLURAL_COUNT, render};
    use crate::Args;

    #[test]
    fn substitutes_plural_count() {
        let args = Args::new().with(PLURAL_COUNT, "1,500");
        assert_eq!(
            render("There are {{.PluralCount}} flowers in our garden.", &args),
            "There are 1,500 flowers in our garden."
        );
    }

    #[test]
    fn allows_whitespace_inside_braces() {
        let args = Args::new().with("Name", "Nova");
        assert_eq!(render("Hi {{ .Name }}!", &args), "Hi Nova!");
    }

    #[test]
    fn replaces_every_occurrence() {
        let args = Args::new().with(PLURAL_COUNT, 2);
        assert_eq!(render("{{.PluralCount}}/{{.PluralCount}}", &args), "2/2");
    }

    #[test]
    fn keeps_unknown_placeholders() {
        let args = Args::new();
        assert_eq!(render("Hello {{.Name}}", &args), "Hello {{.Name}}");
        assert_eq!(render("Hello {{Name}}", &args), "Hello {{Name}}");
    }

    #[test]
    fn unterminated_braces_are_literal() {
        let args = Args::new().with("Name", "Nova");
        assert_eq!(render("{{.Name}} {{.Name", &args), "Nova {{.Name");
    }

    #[test]
    fn does_not_rescan_substituted_text() {
        let args = Args::new().with("A", "{{.B}}").with("B", "nope");
        assert_eq!(render("{{.A}}", &args), "{{.B}}");
    }
}
