//! Source-table rows and the parser that builds them.
//!
//! The source table is comma-separated text: one header line (discarded),
//! then one row per plugin parameter. Field order is fixed:
//!
//! ```text
//! identifier, min, max, step, skew, default, automatable,
//! name, suffix, tooltip, displayStrings[, dependencies]
//! ```
//!
//! Rows are parsed top to bottom and never reordered; the row position
//! is the parameter's ordinal in every generated table.

use std::collections::HashMap;

use crate::error::DefineError;
use crate::literal::FloatLiteral;

/// Minimum number of comma-separated fields per data row.
pub const MIN_FIELDS: usize = 11;

/// An interactively-mapped numeric range, mirroring the construction
/// arguments of JUCE `NormalisableRange<float>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRange {
    /// Lower bound.
    pub min: FloatLiteral,
    /// Upper bound.
    pub max: FloatLiteral,
    /// Step (interval) size; `0` means continuous.
    pub step: FloatLiteral,
    /// Skew factor controlling the non-linear response curve; `1` is linear.
    pub skew: FloatLiteral,
}

/// One row of the source table: a single plugin parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRow {
    /// Unique identifier, used verbatim as the enum constant name.
    pub identifier: String,
    /// Normalisable range `(min, max, step, skew)`.
    pub range: ParamRange,
    /// Default value. Advisory: should lie within `[min, max]`.
    pub default: FloatLiteral,
    /// Host-automatable flag. True iff the source field is exactly `"1"`.
    pub automatable: bool,
    /// Human-readable display label (the "nickname" table).
    pub nickname: String,
    /// Unit suffix appended when displaying the value (`"dB"`, `"%"`, ...).
    pub suffix: String,
    /// Descriptive help string.
    pub tooltip: String,
    /// Discrete display states for choice parameters; empty for
    /// continuous parameters.
    pub display_strings: Vec<String>,
    /// Identifiers of parameters whose values feed this parameter's
    /// custom display function. Usually empty.
    pub dependencies: Vec<String>,
    /// 1-based line number in the source table, for diagnostics.
    pub line: usize,
}

/// The full parsed table: every row, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTable {
    rows: Vec<ParameterRow>,
}

impl ParameterTable {
    /// Parse a complete source table.
    ///
    /// The first line is the column header and is discarded. Blank lines
    /// are skipped. Any malformed row aborts the parse.
    pub fn parse(source: &str) -> Result<Self, DefineError> {
        let mut rows = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, line) in source.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            let row = parse_row(line, line_number)?;

            if let Some(&first_line) = seen.get(&row.identifier) {
                return Err(DefineError::DuplicateIdentifier {
                    identifier: row.identifier,
                    first_line,
                    line: line_number,
                });
            }
            seen.insert(row.identifier.clone(), line_number);
            rows.push(row);
        }

        let table = Self { rows };
        table.check_dependencies()?;
        table.warn_on_out_of_range_defaults();
        Ok(table)
    }

    /// All rows, in source order.
    pub fn rows(&self) -> &[ParameterRow] {
        &self.rows
    }

    /// Number of parameters (the value of the trailing sentinel ordinal).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when some row defines `identifier` (exact match).
    pub fn contains(&self, identifier: &str) -> bool {
        self.rows.iter().any(|r| r.identifier == identifier)
    }

    fn check_dependencies(&self) -> Result<(), DefineError> {
        for row in &self.rows {
            for dep in &row.dependencies {
                if !self.contains(dep) {
                    return Err(DefineError::UnknownDependency {
                        line: row.line,
                        identifier: row.identifier.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    // Defaults outside [min, max] are a table-authoring smell, not an
    // error: the consuming host clamps at load time.
    fn warn_on_out_of_range_defaults(&self) {
        for row in &self.rows {
            let (min, max) = (row.range.min.value(), row.range.max.value());
            let default = row.default.value();
            if default < min || default > max {
                tracing::warn!(
                    identifier = %row.identifier,
                    line = row.line,
                    default,
                    min,
                    max,
                    "default value outside parameter range"
                );
            }
        }
    }
}

/// Parse one data row.
fn parse_row(line: &str, line_number: usize) -> Result<ParameterRow, DefineError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(DefineError::MalformedRow {
            line: line_number,
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let identifier = fields[0];
    if !is_valid_identifier(identifier) {
        return Err(DefineError::InvalidIdentifier {
            line: line_number,
            identifier: identifier.to_string(),
        });
    }

    let numeric = |field: &'static str, text: &str| {
        FloatLiteral::parse(text).ok_or_else(|| DefineError::InvalidNumeric {
            line: line_number,
            field,
            value: text.to_string(),
        })
    };

    let range = ParamRange {
        min: numeric("min", fields[1])?,
        max: numeric("max", fields[2])?,
        step: numeric("step", fields[3])?,
        skew: numeric("skew", fields[4])?,
    };
    let default = numeric("default", fields[5])?;

    let display_strings = fields[10]
        .split_whitespace()
        .map(unquote_token)
        .collect();

    let dependencies = fields
        .get(11)
        .map(|f| f.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    Ok(ParameterRow {
        identifier: identifier.to_string(),
        range,
        default,
        automatable: fields[6] == "1",
        nickname: fields[7].to_string(),
        suffix: fields[8].to_string(),
        tooltip: fields[9].to_string(),
        display_strings,
        dependencies,
        line: line_number,
    })
}

/// A display-string token may be written with surrounding double quotes;
/// the renderer adds its own quotes, so strip them here.
fn unquote_token(token: &str) -> String {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        token[1..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}

/// Valid as an enum constant in generated code: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
