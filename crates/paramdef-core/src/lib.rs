//! Parameter table compilation for the paramdef code generator.
//!
//! This crate turns a comma-separated parameter table (one row per
//! audio-plugin parameter) into a C++ header of compile-time constant
//! tables: an ordinal `PARAM` enumeration plus parallel arrays of
//! identifiers, names, normalisable ranges, defaults, automatable flags,
//! nicknames, suffixes, tooltips, display-string lists, dependency lists,
//! and value↔string conversion lambdas. All arrays share the source-row
//! index, and the trailing `TOTAL_NUMBER_PARAMETERS` sentinel always
//! equals the number of data rows.
//!
//! # Features
//!
//! - **Fail-fast validation**: malformed rows, non-numeric fields, and
//!   duplicate identifiers abort with the line at fault
//! - **Single-precision literals**: every numeric field renders with an
//!   explicit `f` suffix (`3` → `3.0f`, `0.5` → `0.5f`)
//! - **Alignment by construction**: rows are projected into parallel
//!   columns in one pass, immediately before rendering
//! - **Deterministic output**: the artifact is a pure function of the
//!   table content and the custom-function set
//!
//! # Example
//!
//! ```rust
//! use paramdef_core::{CompileOptions, compile_source};
//!
//! let table = "\
//! param,min,max,step,skew,default,automatable,name,suffix,tooltip,to_string_arr
//! GAIN,0,1,0.01,1,0.5,1,Gain,dB,Output gain,
//! MODE,0,2,1,1,0,0,Mode,,Operating mode,Off Low High
//! ";
//!
//! let header = compile_source(table, &CompileOptions::default()).unwrap();
//! assert!(header.contains("TOTAL_NUMBER_PARAMETERS"));
//! assert!(header.contains("juce::NormalisableRange<float>(0.0f, 1.0f, 0.01f, 1.0f)"));
//! ```

mod compile;
mod error;
mod literal;
mod render;
mod row;
mod tables;

pub use compile::{CompileOptions, check_file, compile_file, compile_source};
pub use error::DefineError;
pub use literal::FloatLiteral;
pub use render::render_header;
pub use row::{MIN_FIELDS, ParamRange, ParameterRow, ParameterTable};
pub use tables::ParameterTables;
