use crate::Value;
use indexmap::IndexMap;
use proptest::prelude::*;

/// Decode a rendered GraphQL string literal back to its source characters,
/// per the escape sequences of the
/// [string-literal grammar](https://spec.graphql.org/October2021/#sec-String-Value).
fn unescape(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .expect("string literals must be double-quoted");

    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let digits: String = chars.by_ref().take(4).collect();
                let code = u32::from_str_radix(&digits, 16).unwrap();
                out.push(char::from_u32(code).unwrap());
            },
            other => panic!("invalid escape sequence: {other:?}"),
        }
    }
    out
}

// =============================================================================
// Scalar Encoding Tests
// =============================================================================

#[test]
fn plain_strings_render_quoted() {
    assert_eq!(Value::from("id=in=(37318945)").to_string(), "\"id=in=(37318945)\"");
}

#[test]
fn raw_tokens_render_verbatim() {
    assert_eq!(Value::raw("RED").to_string(), "RED");
    assert_eq!(Value::raw("$rsql").to_string(), "$rsql");
}

#[test]
fn scalars_render_in_their_default_textual_form() {
    assert_eq!(Value::from(42).to_string(), "42");
    assert_eq!(Value::from(-7i64).to_string(), "-7");
    assert_eq!(Value::from(1.5).to_string(), "1.5");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(false).to_string(), "false");
    assert_eq!(Value::Null.to_string(), "null");
}

// =============================================================================
// String Escaping Tests
// =============================================================================

#[test]
fn quotes_backslashes_and_control_characters_escape() {
    let encoded = Value::from("\"\\\n\t\u{0001}").to_string();

    assert_eq!(encoded, "\"\\\"\\\\\\n\\t\\u0001\"");
}

#[test]
fn single_letter_escapes_cover_b_f_r() {
    assert_eq!(Value::from("\u{0008}").to_string(), "\"\\b\"");
    assert_eq!(Value::from("\u{000C}").to_string(), "\"\\f\"");
    assert_eq!(Value::from("\r").to_string(), "\"\\r\"");
}

#[test]
fn other_control_characters_render_as_four_digit_hex() {
    assert_eq!(Value::from("\u{0000}").to_string(), "\"\\u0000\"");
    assert_eq!(Value::from("\u{001f}").to_string(), "\"\\u001f\"");
}

#[test]
fn unicode_outside_the_control_range_passes_through() {
    assert_eq!(Value::from("zażółć 🦀").to_string(), "\"zażółć 🦀\"");
}

proptest! {
    #[test]
    fn escaping_round_trips_arbitrary_strings(input in any::<String>()) {
        let encoded = Value::String(input.clone()).to_string();

        prop_assert_eq!(unescape(&encoded), input);
    }
}

// =============================================================================
// Composite Encoding Tests
// =============================================================================

#[test]
fn lists_render_bracketed_and_comma_separated() {
    assert_eq!(Value::from(vec!["Site", "Location"]).to_string(), "[\"Site\",\"Location\"]");
    assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1,2,3]");
}

#[test]
fn objects_render_in_insertion_order_with_unquoted_keys() {
    let mut entries = IndexMap::new();
    entries.insert("types".to_string(), Value::from(vec!["Site"]));
    entries.insert("rsql".to_string(), Value::from("id=in=(37318945)"));

    assert_eq!(
        Value::from(entries).to_string(),
        "{types: [\"Site\"],rsql: \"id=in=(37318945)\"}",
    );
}

#[test]
fn composites_nest_recursively() {
    let mut filter = IndexMap::new();
    filter.insert("ids".to_string(), Value::from(vec![1, 2]));
    let mut entries = IndexMap::new();
    entries.insert("filter".to_string(), Value::from(filter));
    entries.insert("labels".to_string(), Value::from(vec![Value::from("a\"b")]));

    assert_eq!(
        Value::from(entries).to_string(),
        "{filter: {ids: [1,2]},labels: [\"a\\\"b\"]}",
    );
}
