//! Projection of parsed rows into the parallel output tables.
//!
//! The generated header is nine-plus-one parallel arrays, all indexed by
//! the same ordinal. To keep that alignment impossible to break, the
//! compiler holds one record per parameter ([`ParameterRow`]) for as long
//! as possible and only projects into column vectors here, immediately
//! before rendering. Every column is produced from the same row iteration.

use crate::literal::FloatLiteral;
use crate::row::{ParamRange, ParameterRow, ParameterTable};

/// Column-oriented view of a [`ParameterTable`].
///
/// Each vector has exactly one entry per parameter, in source-row order;
/// index `i` in any column refers to the same parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTables {
    /// Raw identifier strings (`PARAMETER_IDS`).
    pub ids: Vec<String>,
    /// Display names (`PARAMETER_NAMES`). Populated from the raw
    /// identifier, not the human label; the label goes to `nicknames`.
    pub names: Vec<String>,
    /// Normalisable ranges (`PARAMETER_RANGES`).
    pub ranges: Vec<ParamRange>,
    /// Default values (`PARAMETER_DEFAULTS`).
    pub defaults: Vec<FloatLiteral>,
    /// Host-automatable flags (`PARAMETER_AUTOMATABLE`).
    pub automatable: Vec<bool>,
    /// Human display labels (`PARAMETER_NICKNAMES`).
    pub nicknames: Vec<String>,
    /// Unit suffixes (`PARAMETER_SUFFIXES`).
    pub suffixes: Vec<String>,
    /// Help strings (`PARAMETER_TOOLTIPS`).
    pub tooltips: Vec<String>,
    /// Discrete display states per parameter (`PARAMETER_TO_STRING_ARRS`);
    /// an empty list marks a continuous parameter.
    pub display_strings: Vec<Vec<String>>,
    /// Dependency identifier lists (`PARAMETER_DEPENDENCY_IDS`).
    pub dependencies: Vec<Vec<String>>,
}

impl ParameterTables {
    /// Project a parsed table into column vectors.
    pub fn from_table(table: &ParameterTable) -> Self {
        let rows = table.rows();
        let mut tables = Self {
            ids: Vec::with_capacity(rows.len()),
            names: Vec::with_capacity(rows.len()),
            ranges: Vec::with_capacity(rows.len()),
            defaults: Vec::with_capacity(rows.len()),
            automatable: Vec::with_capacity(rows.len()),
            nicknames: Vec::with_capacity(rows.len()),
            suffixes: Vec::with_capacity(rows.len()),
            tooltips: Vec::with_capacity(rows.len()),
            display_strings: Vec::with_capacity(rows.len()),
            dependencies: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            tables.push(row);
        }
        tables
    }

    fn push(&mut self, row: &ParameterRow) {
        self.ids.push(row.identifier.clone());
        self.names.push(row.identifier.clone());
        self.ranges.push(row.range.clone());
        self.defaults.push(row.default.clone());
        self.automatable.push(row.automatable);
        self.nicknames.push(row.nickname.clone());
        self.suffixes.push(row.suffix.clone());
        self.tooltips.push(row.tooltip.clone());
        self.display_strings.push(row.display_strings.clone());
        self.dependencies.push(row.dependencies.clone());
    }

    /// Number of parameters; equals the `TOTAL_NUMBER_PARAMETERS` sentinel.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the table has no parameters.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
