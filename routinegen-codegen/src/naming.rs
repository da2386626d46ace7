//! Category and constant-name derivation.
//!
//! A routine's category comes from the text before its first underscore:
//! `product_get_by_id` belongs to `Products`. The constant name is what is
//! left once the singular category prefix is removed, in PascalCase:
//! `GetById`.

use routinegen_core::{capitalize, title_case};

/// Category for routines whose first underscore-separated token is empty.
pub const DEFAULT_CATEGORY: &str = "Common";

/// Category of a routine name.
///
/// The first token (up to the first `_`) gets its first character upper-cased
/// and an `s` appended. Names with an empty first token (empty names, or names
/// starting with `_`) fall back to [`DEFAULT_CATEGORY`].
///
/// ```
/// use routinegen_codegen::categorize;
///
/// assert_eq!(categorize("product_get_by_id"), "Products");
/// assert_eq!(categorize("ping"), "Pings");
/// assert_eq!(categorize("_internal"), "Common");
/// ```
pub fn categorize(routine: &str) -> String {
    match routine.split('_').next() {
        Some(first) if !first.is_empty() => format!("{}s", capitalize(first)),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

/// Lower-cased category with a single trailing `s` removed.
pub fn category_singular(category: &str) -> String {
    let lower = category.to_lowercase();
    match lower.strip_suffix('s') {
        Some(singular) => singular.to_string(),
        None => lower,
    }
}

/// PascalCase constant identifier for a routine within its category.
///
/// Every occurrence of `<singular>_` is removed from the routine name, not
/// only a leading one. The rest is split on `_`, empty tokens dropped, and
/// each token title-cased.
///
/// ```
/// use routinegen_codegen::derive_constant_name;
///
/// assert_eq!(derive_constant_name("Products", "product_get_by_id"), "GetById");
/// assert_eq!(derive_constant_name("Orders", "order_CREATE"), "Create");
/// ```
pub fn derive_constant_name(category: &str, routine: &str) -> String {
    let prefix = format!("{}_", category_singular(category));
    routine
        .replace(&prefix, "")
        .split('_')
        .filter(|token| !token.is_empty())
        .map(title_case)
        .collect()
}
