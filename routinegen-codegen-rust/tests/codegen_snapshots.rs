//! Snapshot tests for Rust code generation.

use routinegen_codegen::pipeline::{CompilationContext, Pipeline, PipelineOptions};
use routinegen_codegen_rust::{Generator, LanguageCodegen, RUST_NAMING};
use routinegen_ir::RoutineCatalog;
use tempfile::TempDir;

fn compile(procedures: &[&str], functions: &[&str]) -> CompilationContext {
    let catalog = RoutineCatalog::new(
        procedures.iter().map(|s| s.to_string()).collect(),
        functions.iter().map(|s| s.to_string()).collect(),
    );
    let options = PipelineOptions {
        naming: Some(RUST_NAMING),
        ..PipelineOptions::default()
    };
    Pipeline::new(options).run(catalog).expect("Pipeline failed")
}

fn generator(procedures: &[&str], functions: &[&str]) -> Generator {
    let mut ctx = compile(procedures, functions);
    Generator::new(ctx.take_ir().expect("IR not set"))
}

fn get_file(generator: &Generator, path: &str) -> String {
    generator
        .preview()
        .into_iter()
        .find(|f| f.path == path)
        .map(|f| f.content)
        .unwrap_or_else(|| panic!("{} not generated", path))
}

#[test]
fn test_functions_grouped_by_category() {
    let generator = generator(
        &[],
        &["product_get_by_id", "product_get_by_tenant", "order_create"],
    );

    insta::assert_snapshot!(get_file(&generator, "Functions.rs"), @r#"
    // @generated by routinegen from schema "public". Do not edit.

    pub mod functions {
        pub mod products {
            pub const GET_BY_ID: &str = "product_get_by_id";
            pub const GET_BY_TENANT: &str = "product_get_by_tenant";
        }

        pub mod orders {
            pub const CREATE: &str = "order_create";
        }
    }
    "#);
}

#[test]
fn test_empty_catalog_renders_empty_modules() {
    let generator = generator(&[], &[]);

    assert_eq!(
        get_file(&generator, "StoredProcedures.rs"),
        "// @generated by routinegen from schema \"public\". Do not edit.\n\
         \n\
         pub mod stored_procedures {}\n"
    );
    assert!(get_file(&generator, "Functions.rs").ends_with("pub mod functions {}\n"));
}

#[test]
fn test_procedures_and_common_category() {
    let generator = generator(&["ping", "_refresh_all"], &[]);

    insta::assert_snapshot!(get_file(&generator, "StoredProcedures.rs"), @r#"
    // @generated by routinegen from schema "public". Do not edit.

    pub mod stored_procedures {
        pub mod pings {
            pub const PING: &str = "ping";
        }

        pub mod common {
            pub const REFRESH_ALL: &str = "_refresh_all";
        }
    }
    "#);
}

#[test]
fn test_keyword_category_uses_raw_identifier() {
    let generator = generator(&[], &["a_lookup"]);

    let content = get_file(&generator, "Functions.rs");

    assert!(content.contains("pub mod r#as {"));
    assert!(content.contains("pub const LOOKUP: &str = \"a_lookup\";"));
}

#[test]
fn test_duplicates_are_both_emitted() {
    let generator = generator(&[], &["order_CREATE", "order_create"]);

    let content = get_file(&generator, "Functions.rs");

    assert!(content.contains("pub const CREATE: &str = \"order_CREATE\";"));
    assert!(content.contains("pub const CREATE: &str = \"order_create\";"));
}

#[test]
fn test_constants_colliding_after_casing_are_reported() {
    let mut ctx = compile(&[], &["product_get_by", "product_get_b_y"]);

    assert_eq!(ctx.warning_count(), 1);
    let warning = ctx.warnings().next().unwrap();
    assert!(warning.message.contains("duplicate constant 'GET_BY'"));

    let content = get_file(&Generator::new(ctx.take_ir().unwrap()), "Functions.rs");
    assert!(content.contains("pub const GET_BY: &str = \"product_get_by\";"));
    assert!(content.contains("pub const GET_BY: &str = \"product_get_b_y\";"));
}

#[test]
fn test_quotes_and_newlines_stay_inside_literals() {
    let generator = generator(&[], &["order_new\nline", "report_say_\"hi\"", "user_2fa"]);

    insta::assert_snapshot!(get_file(&generator, "Functions.rs"), @r#"
    // @generated by routinegen from schema "public". Do not edit.

    pub mod functions {
        pub mod orders {
            pub const NEW_LINE: &str = "order_new\nline";
        }

        pub mod reports {
            pub const SAY_HI_: &str = "report_say_\"hi\"";
        }

        pub mod users {
            pub const _2FA: &str = "user_2fa";
        }
    }
    "#);
}

#[test]
fn test_generate_uses_rs_extension() {
    let temp = TempDir::new().unwrap();
    let generator = generator(&["order_close"], &[]);

    let result = generator.generate(temp.path()).unwrap();

    assert_eq!(result.written.len(), 2);
    assert!(temp.path().join("StoredProcedures.rs").is_file());
    assert!(temp.path().join("Functions.rs").is_file());
}
