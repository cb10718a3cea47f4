//! Target syntaxes: attribute formatting and text escaping.

use sprout_core::format_number;

use crate::emit::{Attr, AttrValue};

/// Output syntax a profile writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Plain HTML markup.
    Html,
    /// JSX (React-style component calls).
    Jsx,
}

/// Escape literal text placed between tags.
///
/// JSX collapses line breaks in text, so multi-line text becomes a string
/// expression instead.
pub fn escape_text(syntax: Syntax, text: &str) -> String {
    match syntax {
        Syntax::Html => html_escape::encode_text(text).into_owned(),
        Syntax::Jsx if text.contains('\n') => format!("{{{}}}", js_string_literal(text)),
        Syntax::Jsx => escape_jsx_braces(&html_escape::encode_text(text)),
    }
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Escapes `{` and `}` so JSX text does not become expressions.
fn escape_jsx_braces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Attribute name as written in the target syntax.
pub fn attr_name(syntax: Syntax, name: &str) -> &str {
    match (syntax, name) {
        (Syntax::Jsx, "class") => "className",
        (Syntax::Jsx, "for") => "htmlFor",
        (Syntax::Jsx, "readonly") => "readOnly",
        (Syntax::Jsx, "tabindex") => "tabIndex",
        (Syntax::Jsx, "maxlength") => "maxLength",
        _ => name,
    }
}

/// Format a single attribute, or `None` when it should be omitted.
pub fn format_attr(syntax: Syntax, attr: &Attr) -> Option<String> {
    let name = attr_name(syntax, &attr.name);
    let formatted = match (&attr.value, syntax) {
        (AttrValue::Text(v), _) => format!("{}=\"{}\"", name, escape_attr(v)),
        (AttrValue::Number(n), Syntax::Html) => format!("{}=\"{}\"", name, format_number(*n)),
        (AttrValue::Number(n), Syntax::Jsx) => format!("{}={{{}}}", name, format_number(*n)),
        (AttrValue::Bool(true), _) => name.to_string(),
        (AttrValue::Bool(false), Syntax::Html) => return None,
        (AttrValue::Bool(false), Syntax::Jsx) => format!("{}={{false}}", name),
    };
    Some(formatted)
}

/// Format an attribute list with a leading space, ready to follow a tag name.
pub fn format_attrs(syntax: Syntax, attrs: &[Attr]) -> String {
    let mut out = String::new();
    for attr in attrs {
        if let Some(formatted) = format_attr(syntax, attr) {
            out.push(' ');
            out.push_str(&formatted);
        }
    }
    out
}

/// A JavaScript string literal, for JSX expressions.
///
/// Angle brackets are written as unicode escapes so the literal can never
/// open a markup construct in the surrounding source.
pub fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}
