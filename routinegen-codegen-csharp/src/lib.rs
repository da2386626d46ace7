//! C# constants emitter for routinegen.
//!
//! Renders each constant set as a static class with one nested static class
//! per category:
//!
//! ```csharp
//! public static class Functions
//! {
//!     public static class Products
//!     {
//!         public const string GetById = "product_get_by_id";
//!     }
//! }
//! ```
//!
//! # Usage
//!
//! ```
//! use routinegen_codegen::pipeline::Pipeline;
//! use routinegen_codegen_csharp::{Generator, LanguageCodegen};
//! use routinegen_ir::RoutineCatalog;
//!
//! let catalog = RoutineCatalog::new(Vec::new(), vec!["ping".to_string()]);
//! let mut ctx = Pipeline::default().run(catalog)?;
//! let generator = Generator::new(ctx.take_ir().unwrap());
//!
//! let files = generator.preview();
//! assert_eq!(files[1].path, "Functions.cs");
//! assert!(files[1].content.contains("public const string Ping = \"ping\";"));
//! # Ok::<(), eyre::Report>(())
//! ```

mod generator;
mod literal;
mod naming;

pub use generator::Generator;
pub use literal::string_literal;
pub use naming::CSHARP_NAMING;
pub use routinegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
