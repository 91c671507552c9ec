//! Error types for table compilation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling a parameter table.
///
/// Every variant is fatal: the compiler never writes a partial artifact
/// and never continues past a bad row.
#[derive(Debug, Error)]
pub enum DefineError {
    /// Failed to read the source table
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated header
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data row has fewer fields than the schema requires
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based line number in the source table.
        line: usize,
        /// Number of fields the schema requires.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A numeric field could not be parsed
    #[error("line {line}: field '{field}' is not a valid number: '{value}'")]
    InvalidNumeric {
        /// 1-based line number in the source table.
        line: usize,
        /// Schema name of the offending field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// An identifier is empty or not valid in generated code
    #[error("line {line}: invalid parameter identifier '{identifier}'")]
    InvalidIdentifier {
        /// 1-based line number in the source table.
        line: usize,
        /// The rejected identifier text.
        identifier: String,
    },

    /// Two rows share the same identifier (exact, case-sensitive match)
    #[error("line {line}: duplicate parameter identifier '{identifier}' (first defined on line {first_line})")]
    DuplicateIdentifier {
        /// The colliding identifier.
        identifier: String,
        /// Line of the first definition.
        first_line: usize,
        /// Line of the duplicate.
        line: usize,
    },

    /// A dependency names a parameter that does not exist in the table
    #[error("line {line}: parameter '{identifier}' depends on unknown parameter '{dependency}'")]
    UnknownDependency {
        /// 1-based line number in the source table.
        line: usize,
        /// Identifier of the row declaring the dependency.
        identifier: String,
        /// The unresolved dependency name.
        dependency: String,
    },

    /// A custom conversion function was requested for an unknown parameter
    #[error("custom conversion function requested for unknown parameter '{0}'")]
    UnknownCustomFunction(String),
}

impl DefineError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DefineError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DefineError::WriteFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = DefineError::read_file("/some/path.csv", mock_io_err());
        assert!(
            matches!(err, DefineError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path.csv"))
        );
    }

    #[test]
    fn write_file_factory_produces_correct_variant() {
        let err = DefineError::write_file("/out/Defines.h", mock_io_err());
        assert!(
            matches!(err, DefineError::WriteFile { ref path, .. } if path == std::path::Path::new("/out/Defines.h"))
        );
    }

    #[test]
    fn io_variants_expose_source() {
        let err = DefineError::read_file("/x", mock_io_err());
        assert!(err.source().is_some(), "ReadFile must expose I/O source");

        let err = DefineError::write_file("/x", mock_io_err());
        assert!(err.source().is_some(), "WriteFile must expose I/O source");
    }

    #[test]
    fn malformed_row_display_names_line_and_counts() {
        let err = DefineError::MalformedRow {
            line: 4,
            expected: 11,
            found: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"), "got: {msg}");
        assert!(msg.contains("11"), "got: {msg}");
        assert!(msg.contains("7"), "got: {msg}");
    }

    #[test]
    fn invalid_numeric_display_names_field() {
        let err = DefineError::InvalidNumeric {
            line: 2,
            field: "skew",
            value: "fast".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "got: {msg}");
        assert!(msg.contains("skew"), "got: {msg}");
        assert!(msg.contains("fast"), "got: {msg}");
    }

    #[test]
    fn duplicate_identifier_display_names_both_lines() {
        let err = DefineError::DuplicateIdentifier {
            identifier: "GAIN".to_string(),
            first_line: 2,
            line: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("GAIN"), "got: {msg}");
        assert!(msg.contains("line 5"), "got: {msg}");
        assert!(msg.contains("line 2"), "got: {msg}");
    }

    #[test]
    fn unknown_dependency_display() {
        let err = DefineError::UnknownDependency {
            line: 3,
            identifier: "GAIN".to_string(),
            dependency: "MODE".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'GAIN'"), "got: {msg}");
        assert!(msg.contains("'MODE'"), "got: {msg}");
    }

    #[test]
    fn unknown_custom_function_display() {
        let err = DefineError::UnknownCustomFunction("WOBBLE".to_string());
        assert_eq!(
            err.to_string(),
            "custom conversion function requested for unknown parameter 'WOBBLE'"
        );
    }
}
