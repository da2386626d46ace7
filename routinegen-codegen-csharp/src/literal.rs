/// Quote a value as a C# regular string literal.
///
/// ```
/// use routinegen_codegen_csharp::string_literal;
///
/// assert_eq!(string_literal("product_get"), r#""product_get""#);
/// assert_eq!(string_literal("a\"b"), r#""a\"b""#);
/// ```
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Line terminators are not allowed inside C# string literals
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(string_literal("order_create"), "\"order_create\"");
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(string_literal("a\\b"), r#""a\\b""#);
        assert_eq!(string_literal("line\nbreak\ttab"), r#""line\nbreak\ttab""#);
        assert_eq!(string_literal("nul\0"), r#""nul\0""#);
    }

    #[test]
    fn test_other_control_characters() {
        assert_eq!(string_literal("bell\u{7}"), r#""bell\u0007""#);
        assert_eq!(string_literal("nel\u{85}"), r#""nel\u0085""#);
        assert_eq!(string_literal("ls\u{2028}"), r#""ls\u2028""#);
    }

    #[test]
    fn test_non_ascii_kept() {
        assert_eq!(string_literal("produit_prix_€"), "\"produit_prix_€\"");
    }
}
