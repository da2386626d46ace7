//! C#-specific naming conventions.

use routinegen_codegen::language::NamingConvention;
use routinegen_core::to_identifier;

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions. Names are already PascalCase; characters that
/// cannot appear in an identifier are replaced and keywords are escaped.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    container_to_name: to_identifier,
    category_to_name: to_identifier,
    constant_to_name: to_identifier,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "virtual", "void", "volatile", "while",
    ],
    escape_reserved: escape_csharp_reserved,
};
