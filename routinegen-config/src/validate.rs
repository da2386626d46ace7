//! Semantic validation applied after parsing.

use miette::SourceSpan;

use crate::{Config, Result, error::SourceContext};

/// Validate a parsed config against its source.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.database.schema.trim().is_empty() {
        return Err(ctx.validation_error(
            "database schema must not be empty",
            find_key_span(ctx.src(), "schema"),
        ));
    }

    if config.output.dir.as_os_str().is_empty() {
        return Err(ctx.validation_error(
            "output directory must not be empty",
            find_key_span(ctx.src(), "dir"),
        ));
    }

    if let Some(env) = &config.database.env
        && env.trim().is_empty()
    {
        return Err(ctx.validation_error(
            "database env variable name must not be empty",
            find_key_span(ctx.src(), "env"),
        ));
    }

    Ok(())
}

/// Find the span of a `key = value` assignment in the source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let len = line.trim_end().len() - indent;
            return Some(SourceSpan::from((offset + indent, len)));
        }
        offset += line.len();
    }
    None
}
