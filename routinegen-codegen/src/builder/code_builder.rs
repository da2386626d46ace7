//! Line-oriented source builder.

use super::Indent;

/// Builds generated source one line at a time.
///
/// Every call consumes and returns the builder, so nested containers read
/// as nested closures:
///
/// ```
/// use routinegen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::csharp()
///     .braced("public static class Functions", |b| {
///         b.line("public const string Ping = \"ping\";")
///     })
///     .build();
///
/// assert_eq!(
///     code,
///     "public static class Functions\n{\n    public const string Ping = \"ping\";\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: String,
    prefix: String,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            unit: indent.unit(),
            prefix: String::new(),
            depth: 0,
            out: String::new(),
        }
    }

    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Append `s` at the current depth, followed by a newline.
    pub fn line(mut self, s: &str) -> Self {
        self.out.push_str(&self.prefix);
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    /// Append an empty line. Blank lines never carry indentation.
    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.depth += 1;
        self.prefix.push_str(&self.unit);
        self
    }

    /// Step out one level; a no-op at depth zero.
    pub fn dedent(mut self) -> Self {
        if self.depth > 0 {
            self.depth -= 1;
            self.prefix.truncate(self.prefix.len() - self.unit.len());
        }
        self
    }

    /// `header`, then `f` one level deeper, then `close` back at this level.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self.line(header).indent()).dedent().line(close)
    }

    /// `header` with its braces on their own lines (C# layout).
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.line(header).block_with_close("{", "}", f)
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Fold `items` into the builder.
    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    pub fn current_indent(&self) -> usize {
        self.depth
    }

    pub fn build(self) -> String {
        self.out
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
