//! Identifier sanitization
//!
//! Shared by the resolver (synthesized type and constant names) and the
//! emission layer (field and method identifiers). The rules:
//!
//! - property names beginning with `@` are rewritten to `at` + capitalized
//!   remainder before anything else (attribute-style keys from
//!   XML-influenced schemas)
//! - characters outside `[A-Za-z0-9]` are stripped
//! - field and method identifiers are converted to `snake_case` and escaped
//!   when they collide with a Rust keyword

/// Capitalize the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip every character outside `[A-Za-z0-9]`
pub fn strip_invalid(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Rewrite attribute-style keys: `@id` becomes `atId`
pub fn at_rewrite(s: &str) -> String {
    if let Some(rest) = s.strip_prefix('@') {
        format!("at{}", capitalize(&rest.replace('@', "")))
    } else {
        s.to_string()
    }
}

/// Convert PascalCase or camelCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let should_add_underscore = i > 0
                && (chars[i - 1].is_lowercase()
                    || chars[i - 1].is_ascii_digit()
                    || (i + 1 < chars.len() && chars[i + 1].is_lowercase()));

            if should_add_underscore && !result.ends_with('_') {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
        } else if ch == '-' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else {
            result.push(ch);
        }
    }

    while result.contains("__") {
        result = result.replace("__", "_");
    }

    result.trim_matches('_').to_string()
}

/// Sanitized snake_case field or method identifier for a source property key
pub fn field_ident(source: &str) -> String {
    escape_keyword(&to_snake_case(&strip_invalid(&at_rewrite(source))))
}

/// Sanitized snake_case identifier for an operation name. Unlike property
/// keys, operation ids may already be snake_case, so underscores survive.
pub fn method_ident(source: &str) -> String {
    let kept: String = source
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    escape_keyword(&to_snake_case(&kept))
}

/// Sanitized constant identifier for an enum literal
pub fn enum_const_ident(literal: &str) -> String {
    let stripped = strip_invalid(literal);
    match stripped.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", stripped),
        Some(_) => stripped,
        None => "_".to_string(),
    }
}

/// Synthesized type name: `Capitalize(parent) + Capitalize(property)`
pub fn type_name(parent: &str, property: &str) -> String {
    format!(
        "{}{}",
        capitalize(&strip_invalid(parent)),
        capitalize(&strip_invalid(&at_rewrite(property)))
    )
}

// Keywords that cannot appear as field or method identifiers. The first set
// escapes with a raw identifier; `crate`/`self`/`super`/`Self` cannot be raw
// and gain a trailing underscore instead.
const RAW_ESCAPABLE: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "yield",
];

const NON_RAW: &[&str] = &["crate", "self", "super"];

fn escape_keyword(ident: &str) -> String {
    if RAW_ESCAPABLE.contains(&ident) {
        format!("r#{}", ident)
    } else if NON_RAW.contains(&ident) {
        format!("{}_", ident)
    } else {
        ident.to_string()
    }
}
