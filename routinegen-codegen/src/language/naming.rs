//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how container, category and constant names are spelled in the
/// target language, and how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a container name (e.g., "StoredProcedures" -> "stored_procedures")
    pub container_to_name: fn(&str) -> String,
    /// Transform a category name (e.g., "Products" -> "products")
    pub category_to_name: fn(&str) -> String,
    /// Transform a constant identifier (e.g., "GetById" -> "GET_BY_ID")
    pub constant_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as the outer container name.
    pub fn container_name(&self, name: &str) -> String {
        self.safe_name(&(self.container_to_name)(name))
    }

    /// Transform and make safe for use as a category name.
    pub fn category_name(&self, name: &str) -> String {
        self.safe_name(&(self.category_to_name)(name))
    }

    /// Transform and make safe for use as a constant name.
    pub fn constant_name(&self, name: &str) -> String {
        self.safe_name(&(self.constant_to_name)(name))
    }
}
