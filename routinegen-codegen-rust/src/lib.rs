//! Rust constants emitter for routinegen.
//!
//! Renders each constant set as a module with one nested module per
//! category. The files are meant to be pulled in with `include!` or
//! declared as modules of the consuming crate.
//!
//! ```rust,ignore
//! pub mod functions {
//!     pub mod products {
//!         pub const GET_BY_ID: &str = "product_get_by_id";
//!     }
//! }
//! ```

mod generator;
mod naming;

pub use generator::Generator;
pub use naming::{RUST_NAMING, string_literal};
pub use routinegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
