//! TypeScript constants emitter for routinegen.
//!
//! Renders each constant set as an exported `as const` object with one
//! nested object per category, so routine names keep their literal types:
//!
//! ```ts
//! export const Functions = {
//!   Products: {
//!     GetById: "product_get_by_id",
//!   },
//! } as const;
//! ```

mod generator;
mod naming;

pub use generator::Generator;
pub use naming::{TS_NAMING, property_key, string_literal};
pub use routinegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
