//! TypeScript-specific naming conventions.

use routinegen_codegen::language::NamingConvention;

fn unchanged(name: &str) -> String {
    name.to_string()
}

/// TypeScript naming conventions.
///
/// Categories and constants are object keys, where reserved words are
/// allowed, so nothing is escaped. Keys that are not identifiers are quoted
/// by [`property_key`] instead.
pub const TS_NAMING: NamingConvention = NamingConvention {
    container_to_name: unchanged,
    category_to_name: unchanged,
    constant_to_name: unchanged,
    reserved_words: &[],
    escape_reserved: unchanged,
};

fn is_ts_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Quote a value as a TypeScript string literal.
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Render an object key, quoting it when it is not a plain identifier.
pub fn property_key(name: &str) -> String {
    if is_ts_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}
