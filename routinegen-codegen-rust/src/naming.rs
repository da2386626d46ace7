//! Rust-specific naming conventions.

use routinegen_codegen::language::NamingConvention;
use routinegen_core::{to_identifier, to_screaming_snake_case, to_snake_case};

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

fn escape_rust_reserved(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else {
        format!("r#{}", name)
    }
}

fn module_name(name: &str) -> String {
    to_identifier(&to_snake_case(name))
}

fn const_name(name: &str) -> String {
    to_identifier(&to_screaming_snake_case(name))
}

/// Rust naming conventions: snake_case modules, SCREAMING_SNAKE_CASE constants.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    container_to_name: module_name,
    category_to_name: module_name,
    constant_to_name: const_name,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

/// Quote a value as a Rust string literal.
pub fn string_literal(value: &str) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_names() {
        assert_eq!(RUST_NAMING.container_name("StoredProcedures"), "stored_procedures");
        assert_eq!(RUST_NAMING.category_name("Products"), "products");
        assert_eq!(RUST_NAMING.category_name("OrderLines"), "order_lines");
        assert_eq!(RUST_NAMING.category_name("ORDERs"), "orders");
    }

    #[test]
    fn test_constant_names() {
        assert_eq!(RUST_NAMING.constant_name("GetById"), "GET_BY_ID");
        assert_eq!(RUST_NAMING.constant_name("Enable2fa"), "ENABLE2FA");
    }

    #[test]
    fn test_non_identifier_characters_replaced() {
        assert_eq!(RUST_NAMING.constant_name("Say\"hi\""), "SAY_HI_");
        assert_eq!(RUST_NAMING.constant_name("New\nline"), "NEW_LINE");
        assert_eq!(RUST_NAMING.constant_name("2fa"), "_2FA");
        assert_eq!(RUST_NAMING.category_name("Line-items"), "line_items");
        assert_eq!(RUST_NAMING.category_name("Re port"), "re_port");
    }

    #[test]
    fn test_reserved_module_names() {
        // `a_b` categorizes as "As"
        assert_eq!(RUST_NAMING.category_name("As"), "r#as");
        assert_eq!(RUST_NAMING.safe_name("self"), "self_");
        assert_eq!(RUST_NAMING.safe_name("super"), "super_");
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("order_create"), "\"order_create\"");
        assert_eq!(string_literal("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(string_literal("tab\there"), r#""tab\there""#);
        assert_eq!(string_literal("bell\u{7}"), r#""bell\u{7}""#);
    }
}
