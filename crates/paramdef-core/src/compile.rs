//! The compile pipeline: read, parse, project, render, write.

use std::collections::HashSet;
use std::path::Path;

use crate::error::DefineError;
use crate::render::render_header;
use crate::row::ParameterTable;
use crate::tables::ParameterTables;

/// Options for one compiler run.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Identifiers whose value↔string conversions dispatch to host-side
    /// custom functions instead of the generated default lambdas.
    pub custom_functions: Vec<String>,
}

impl CompileOptions {
    /// Add an identifier to the custom conversion-function set.
    pub fn with_custom_function(mut self, identifier: impl Into<String>) -> Self {
        self.custom_functions.push(identifier.into());
        self
    }
}

/// Compile a source table held in memory into the header text.
///
/// This is the whole transformation; file I/O lives in
/// [`compile_file`]. Fails on the first defect in the table or on a
/// custom-function identifier the table does not define.
pub fn compile_source(source: &str, options: &CompileOptions) -> Result<String, DefineError> {
    compile_table(source, options).map(|(header, _)| header)
}

fn compile_table(
    source: &str,
    options: &CompileOptions,
) -> Result<(String, usize), DefineError> {
    let table = ParameterTable::parse(source)?;

    let mut custom = HashSet::new();
    for identifier in &options.custom_functions {
        if !table.contains(identifier) {
            return Err(DefineError::UnknownCustomFunction(identifier.clone()));
        }
        custom.insert(identifier.clone());
    }

    tracing::debug!(parameters = table.len(), "parsed parameter table");

    let tables = ParameterTables::from_table(&table);
    Ok((render_header(&tables, &custom), table.len()))
}

/// Compile `input` and write the artifact to `output`.
///
/// The artifact is rendered fully in memory and written in one call, so
/// a failing run never leaves a truncated header behind. Returns the
/// number of parameters compiled.
pub fn compile_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &CompileOptions,
) -> Result<usize, DefineError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source =
        std::fs::read_to_string(input).map_err(|e| DefineError::read_file(input, e))?;
    let (header, count) = compile_table(&source, options)?;

    std::fs::write(output, header).map_err(|e| DefineError::write_file(output, e))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        parameters = count,
        "wrote parameter defines"
    );
    Ok(count)
}

/// Validate `input` without writing anything.
///
/// Runs the full pipeline, rendering included, and discards the result.
/// Returns the number of parameters the table defines.
pub fn check_file(input: impl AsRef<Path>, options: &CompileOptions) -> Result<usize, DefineError> {
    let input = input.as_ref();
    let source =
        std::fs::read_to_string(input).map_err(|e| DefineError::read_file(input, e))?;
    let (_, count) = compile_table(&source, options)?;
    Ok(count)
}
