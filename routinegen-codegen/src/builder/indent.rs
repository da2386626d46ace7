//! Indentation units for generated code.

/// One level of indentation, as a number of spaces.
///
/// None of the emitted languages indent with tabs, so only the width varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    pub const CSHARP: Self = Self(4);
    pub const RUST: Self = Self(4);
    pub const TYPESCRIPT: Self = Self(2);

    /// An indent of `width` spaces.
    pub const fn spaces(width: u8) -> Self {
        Self(width)
    }

    pub fn width(&self) -> usize {
        usize::from(self.0)
    }

    /// The whitespace for one level.
    pub fn unit(&self) -> String {
        " ".repeat(self.width())
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}
