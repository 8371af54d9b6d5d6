//! Conversions from GraphQL names to Rust identifiers.

use proc_macro2::Ident;
use proc_macro2::Span;

/// Keywords (strict, reserved and 2018+ edition) which can't be used as plain
/// identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false",
    "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where",
    "while", "yield",
];

/// Keywords which can't be written as raw identifiers either.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Splits a GraphQL name into its words.
///
/// Words are separated by `_`/`-` and by case boundaries, where a run of
/// capitals followed by a lowercase letter starts a new word at its last
/// capital (`HTTPServer` => `HTTP`, `Server`).
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = vec![];
    let mut current = String::new();

    for (idx, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[idx - 1];
            let next_is_lower =
                chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `firstName` => `first_name`, `userID` => `user_id`.
///
/// Leading underscores are kept so that `_id` and `id` stay distinct.
pub fn to_snake_case(name: &str) -> String {
    let leading = name.chars().take_while(|ch| *ch == '_').count();
    let words = split_words(name)
        .into_iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    format!("{}{words}", "_".repeat(leading))
}

/// `IN_PROGRESS` => `InProgress`, `inProgress` => `InProgress`.
pub fn to_pascal_case(name: &str) -> String {
    split_words(name)
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!(
                    "{}{}",
                    first.to_uppercase(),
                    chars.as_str().to_lowercase(),
                ),
                None => String::new(),
            }
        })
        .collect()
}

/// Normalizes a GraphQL field or argument name to a Rust member name.
pub fn member_name(graphql_name: &str) -> String {
    escape_name(to_snake_case(graphql_name))
}

/// Normalizes a GraphQL enum value to a Rust enum variant name.
pub fn variant_name(graphql_name: &str) -> String {
    escape_name(to_pascal_case(graphql_name))
}

/// Normalizes a GraphQL type name to a Rust type name.
///
/// Type names are kept as written; only names Rust can't accept are escaped.
pub fn type_name(graphql_name: &str) -> String {
    escape_name(graphql_name.to_string())
}

fn escape_name(name: String) -> String {
    if name.is_empty() || name.chars().all(|ch| ch == '_') {
        format!("{name}value")
    } else if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        format!("_{name}")
    } else if NON_RAW_KEYWORDS.contains(&name.as_str()) {
        format!("{name}_")
    } else if RUST_KEYWORDS.contains(&name.as_str()) {
        format!("r#{name}")
    } else {
        name
    }
}

/// Builds an [`Ident`] from a name produced by this module (raw identifiers
/// included).
pub fn ident(name: &str) -> Ident {
    match name.strip_prefix("r#") {
        Some(raw) => Ident::new_raw(raw, Span::call_site()),
        None => Ident::new(name, Span::call_site()),
    }
}

/// Name of the private storage field backing a selector accessor.
pub fn backing_field_name(member_name: &str) -> String {
    let bare = member_name.strip_prefix("r#").unwrap_or(member_name);
    format!("__{bare}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_conversions() {
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("avatar2x"), "avatar2x");
        assert_eq!(to_snake_case("_id"), "_id");
        assert_eq!(to_snake_case("id"), "id");
    }

    #[test]
    fn pascal_case_conversions() {
        assert_eq!(to_pascal_case("ACTIVE"), "Active");
        assert_eq!(to_pascal_case("IN_PROGRESS"), "InProgress");
        assert_eq!(to_pascal_case("inProgress"), "InProgress");
        assert_eq!(to_pascal_case("PascalCase"), "PascalCase");
        assert_eq!(to_pascal_case("v2"), "V2");
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(member_name("type"), "r#type");
        assert_eq!(member_name("self"), "self_");
        assert_eq!(variant_name("SELF"), "Self_");
        assert_eq!(type_name("Query"), "Query");
        assert_eq!(ident("r#type").to_string(), "r#type");
    }

    #[test]
    fn backing_field_names_strip_raw_prefix() {
        assert_eq!(backing_field_name("user"), "__user");
        assert_eq!(backing_field_name("r#type"), "__type");
        assert_eq!(backing_field_name("_owner"), "___owner");
    }

    #[test]
    fn leading_digits_and_bare_underscores_are_made_valid() {
        assert_eq!(variant_name("_1"), "_1");
        assert_eq!(member_name("_"), "_value");
    }
}
