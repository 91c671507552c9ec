//! Single-precision float literals with C++-compatible rendering.

use std::fmt;

/// A validated single-precision literal taken from one table field.
///
/// Keeps the trimmed source text alongside the parsed `f32` so the
/// generated header reproduces the author's spelling exactly (`0.01`
/// stays `0.01f`, never `0.01000000047f`). Rendering follows the
/// normalization rule: text without a `.` gets `.0f` appended, text
/// with a `.` gets `f` appended.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    text: String,
    value: f32,
}

impl FloatLiteral {
    /// Parse a trimmed field into a literal.
    ///
    /// Returns `None` when the text is not a plain decimal number.
    /// Exponents and suffixes are rejected; the table format has never
    /// used them and the `.0f`/`f` rule would mangle them.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || text.contains(['e', 'E', 'f', 'F']) {
            return None;
        }
        let value: f32 = text.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            value,
        })
    }

    /// The parsed single-precision value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The field text as written in the source table.
    pub fn source_text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FloatLiteral {
    /// Renders the normalized C++ literal (`3` → `3.0f`, `0.5` → `0.5f`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.contains('.') {
            write!(f, "{}f", self.text)
        } else {
            write!(f, "{}.0f", self.text)
        }
    }
}
