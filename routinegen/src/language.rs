//! Unified language dispatch.

use routinegen_codegen::language::{LanguageCodegen, NamingConvention};
use routinegen_codegen_csharp::{CSHARP_NAMING, Generator as CSharpGenerator};
use routinegen_codegen_rust::{Generator as RustGenerator, RUST_NAMING};
use routinegen_codegen_typescript::{Generator as TypeScriptGenerator, TS_NAMING};
use routinegen_config::Language;
use routinegen_ir::ConstantsIR;

/// Generator creation and metadata for a target language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSupport {
    language: Language,
    /// File extension without dot (e.g., "cs").
    pub extension: &'static str,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        let extension = match language {
            Language::CSharp => "cs",
            Language::Rust => "rs",
            Language::TypeScript => "ts",
        };
        Self {
            language,
            extension,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// How the generator spells containers, categories and constants.
    pub fn naming(&self) -> NamingConvention {
        match self.language {
            Language::CSharp => CSHARP_NAMING,
            Language::Rust => RUST_NAMING,
            Language::TypeScript => TS_NAMING,
        }
    }

    /// Create a generator for this language.
    pub fn generator(&self, ir: ConstantsIR) -> Box<dyn LanguageCodegen> {
        match self.language {
            Language::CSharp => Box::new(CSharpGenerator::new(ir)),
            Language::Rust => Box::new(RustGenerator::new(ir)),
            Language::TypeScript => Box::new(TypeScriptGenerator::new(ir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_matches_extension() {
        for language in [Language::CSharp, Language::Rust, Language::TypeScript] {
            let support = LanguageSupport::get(language);
            let generator = support.generator(ConstantsIR::empty("public"));

            assert_eq!(generator.language(), language.as_str());
            assert_eq!(generator.file_extension(), support.extension);
        }
    }

    #[test]
    fn test_naming_matches_generator() {
        assert_eq!(
            LanguageSupport::get(Language::Rust).naming().constant_name("GetBy"),
            "GET_BY"
        );
        assert_eq!(
            LanguageSupport::get(Language::CSharp).naming().constant_name("GetBy"),
            "GetBy"
        );
    }
}
