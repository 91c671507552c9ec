//! Rendering of the generated C++ header.
//!
//! Output is a pure function of the projected tables and the custom
//! conversion-function set: same input, byte-identical artifact. Layout
//! (tab indentation, brace spacing, trailing commas) reproduces the
//! header format the consuming plugin host was built against, so a
//! regenerated file diffs cleanly against a checked-in one.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::tables::ParameterTables;

/// Render the complete header artifact.
///
/// `custom` holds identifiers whose value↔string conversions dispatch to
/// host-side functions from `customStringValueFunctions.h`; it must only
/// name identifiers present in the tables (validated by the compile
/// pipeline before rendering).
pub fn render_header(tables: &ParameterTables, custom: &HashSet<String>) -> String {
    let mut out = String::new();

    out.push_str("#pragma once\n");
    out.push_str("#include <juce_core/juce_core.h>\n");
    out.push_str("#include <array>\n");
    out.push_str("#include <vector>\n");
    out.push_str("#include <functional>\n");
    out.push_str("#include <sstream>\n");
    out.push_str("#include <iomanip>\n");
    out.push_str("#include \"customStringValueFunctions.h\"\n\n");

    render_enum(&mut out, tables);
    render_string_table(&mut out, "juce::Identifier", "PARAMETER_IDS{", &tables.ids);
    render_string_table(&mut out, "juce::String", "PARAMETER_NAMES{", &tables.names);
    render_ranges(&mut out, tables);
    render_defaults(&mut out, tables);
    render_automatable(&mut out, tables);
    render_string_table(&mut out, "juce::String", "PARAMETER_NICKNAMES{", &tables.nicknames);
    render_string_table(&mut out, "juce::String", "PARAMETER_SUFFIXES {", &tables.suffixes);
    render_string_table(&mut out, "juce::String", "PARAMETER_TOOLTIPS {", &tables.tooltips);
    render_string_vectors(
        &mut out,
        "juce::String",
        "PARAMETER_TO_STRING_ARRS {",
        &tables.display_strings,
    );
    render_string_vectors(
        &mut out,
        "juce::Identifier",
        "PARAMETER_DEPENDENCY_IDS {",
        &tables.dependencies,
    );
    render_custom_pointers(&mut out, tables, custom);
    render_value_to_string(&mut out, tables, custom);
    render_string_to_value(&mut out, tables, custom);

    out
}

fn render_enum(out: &mut String, tables: &ParameterTables) {
    out.push_str("enum PARAM {\n");
    for id in &tables.ids {
        let _ = writeln!(out, "\t{id},");
    }
    out.push_str("\tTOTAL_NUMBER_PARAMETERS\n};\n\n");
}

fn render_string_table(out: &mut String, element: &str, name_brace: &str, values: &[String]) {
    let _ = writeln!(
        out,
        "static const std::array<{element}, PARAM::TOTAL_NUMBER_PARAMETERS> {name_brace}"
    );
    for value in values {
        let _ = writeln!(out, "\t\"{value}\",");
    }
    out.push_str("};\n\n");
}

fn render_ranges(out: &mut String, tables: &ParameterTables) {
    out.push_str(
        "static const std::array<juce::NormalisableRange<float>, PARAM::TOTAL_NUMBER_PARAMETERS> PARAMETER_RANGES {\n",
    );
    for range in &tables.ranges {
        let _ = writeln!(
            out,
            "\tjuce::NormalisableRange<float>({}, {}, {}, {}),",
            range.min, range.max, range.step, range.skew
        );
    }
    out.push_str("};\n\n");
}

fn render_defaults(out: &mut String, tables: &ParameterTables) {
    out.push_str(
        "static const std::array<float, PARAM::TOTAL_NUMBER_PARAMETERS> PARAMETER_DEFAULTS {\n",
    );
    for default in &tables.defaults {
        let _ = writeln!(out, "\t{default},");
    }
    out.push_str("};\n\n");
}

fn render_automatable(out: &mut String, tables: &ParameterTables) {
    out.push_str(
        "static const std::array<bool, PARAM::TOTAL_NUMBER_PARAMETERS> PARAMETER_AUTOMATABLE {\n",
    );
    for &automatable in &tables.automatable {
        let _ = writeln!(out, "\t{},", if automatable { "true" } else { "false" });
    }
    out.push_str("};\n\n");
}

fn render_string_vectors(out: &mut String, element: &str, name_brace: &str, lists: &[Vec<String>]) {
    let _ = writeln!(
        out,
        "static const std::array<std::vector<{element}>, PARAM::TOTAL_NUMBER_PARAMETERS> {name_brace}"
    );
    for list in lists {
        let _ = write!(out, "\tstd::vector<{element}>{{");
        for item in list {
            let _ = write!(out, "\"{item}\", ");
        }
        out.push_str("},\n");
    }
    out.push_str("};\n\n");
}

fn render_custom_pointers(out: &mut String, tables: &ParameterTables, custom: &HashSet<String>) {
    out.push_str("// Precomputed custom function pointers for streamlined lambda functions.\n");
    for id in &tables.ids {
        if custom.contains(id) {
            let _ = writeln!(
                out,
                "static const std::function<std::string(const float, const int, const float*, const int)> CUSTOM_VALUE_TO_STRING_{id} = CUSTOM_PARAMETER_VALUE_TO_STRING_FUNCTIONS.at(\"{id}\");"
            );
            let _ = writeln!(
                out,
                "static const std::function<float(const std::string&)> CUSTOM_STRING_TO_VALUE_{id} = CUSTOM_PARAMETER_STRING_TO_VALUE_FUNCTIONS.at(\"{id}\");"
            );
        }
    }
    out.push('\n');
}

fn render_value_to_string(out: &mut String, tables: &ParameterTables, custom: &HashSet<String>) {
    out.push_str(
        "static const std::array<std::function<juce::String(const float, const int, const float*, const int)>, PARAM::TOTAL_NUMBER_PARAMETERS> PARAMETER_VALUE_TO_STRING_FUNCTIONS {\n",
    );
    for (index, id) in tables.ids.iter().enumerate() {
        let _ = writeln!(
            out,
            "\t[p_id = {index}](float value, int maximumStringLength, const float *dependencies, int num_dependencies) -> juce::String {{"
        );
        if custom.contains(id) {
            let _ = writeln!(
                out,
                "\t\treturn juce::String(CUSTOM_VALUE_TO_STRING_{id}(value, maximumStringLength, dependencies, num_dependencies));"
            );
        } else {
            out.push_str("\t\tauto to_string_size = PARAMETER_TO_STRING_ARRS[p_id].size();\n");
            out.push_str("\t\tjuce::String res;\n");
            out.push_str(
                "\t\tif (to_string_size > 0 && static_cast<unsigned int>(value) < to_string_size) {\n",
            );
            out.push_str(
                "\t\t\tres = PARAMETER_TO_STRING_ARRS[p_id][static_cast<unsigned long>(value)];\n",
            );
            out.push_str("\t\t} else {\n");
            out.push_str("\t\t\tstd::stringstream ss;\n");
            out.push_str("\t\t\tss << std::fixed << std::setprecision(2) << value;\n");
            out.push_str("\t\t\tres = juce::String(ss.str());\n");
            out.push_str("\t\t}\n");
            out.push_str("\t\tauto output = (res + \" \" + PARAMETER_SUFFIXES[p_id]);\n");
            out.push_str(
                "\t\treturn maximumStringLength > 0 ? output.substring(0, maximumStringLength) : output;\n",
            );
        }
        out.push_str("\t},\n");
    }
    out.push_str("};\n\n");
}

fn render_string_to_value(out: &mut String, tables: &ParameterTables, custom: &HashSet<String>) {
    out.push_str(
        "static const std::array<std::function<float(const juce::String&)>, PARAM::TOTAL_NUMBER_PARAMETERS> PARAMETER_STRING_TO_VALUE_FUNCTIONS {\n",
    );
    for (index, id) in tables.ids.iter().enumerate() {
        let _ = writeln!(out, "\t[p_id = {index}](juce::String text) -> float {{");
        if custom.contains(id) {
            let _ = writeln!(out, "\t\treturn CUSTOM_STRING_TO_VALUE_{id}(text.toStdString());");
        } else {
            out.push_str(
                "\t\ttext = text.upToFirstOccurrenceOf(\" \" + PARAMETER_SUFFIXES[p_id], false, true);\n",
            );
            out.push_str("\t\tauto to_string_size = PARAMETER_TO_STRING_ARRS[p_id].size();\n");
            out.push_str("\t\tif (to_string_size > 0) {\n");
            out.push_str("\t\t\tauto beg = PARAMETER_TO_STRING_ARRS[p_id].begin();\n");
            out.push_str("\t\t\tauto end = PARAMETER_TO_STRING_ARRS[p_id].end();\n");
            out.push_str("\t\t\tauto itFind = std::find(beg, end, text);\n");
            out.push_str("\t\t\tif (itFind == end) {\n");
            out.push_str(
                "\t\t\t\tDBG(\"ERROR: Could not find text in PARAMETER_TO_STRING_ARRS\");\n",
            );
            out.push_str("\t\t\t\treturn text.getFloatValue();\n");
            out.push_str("\t\t\t}\n");
            out.push_str("\t\t\treturn static_cast<float>(std::distance(beg, itFind));\n");
            out.push_str("\t\t}\n");
            out.push_str("\t\treturn text.getFloatValue();\n");
        }
        out.push_str("\t},\n");
    }
    out.push_str("};\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::ParameterTable;

    const HEADER: &str = "param,min,max,step,skew,default,automatable,name,suffix,tooltip,to_string_arr\n";

    fn render(rows: &str, custom: &[&str]) -> String {
        let table = ParameterTable::parse(&format!("{HEADER}{rows}")).unwrap();
        let tables = ParameterTables::from_table(&table);
        let custom: HashSet<String> = custom.iter().map(|s| (*s).to_string()).collect();
        render_header(&tables, &custom)
    }

    fn spec_example(custom: &[&str]) -> String {
        render(
            "GAIN,0,1,0.01,1,0.5,1,Gain,dB,Output gain,\n\
             MODE,0,2,1,1,0,0,Mode,,Operating mode,Off Low High\n",
            custom,
        )
    }

    #[test]
    fn header_starts_with_guard_and_includes() {
        let out = spec_example(&[]);
        assert!(out.starts_with("#pragma once\n#include <juce_core/juce_core.h>\n"));
        assert!(out.contains("#include \"customStringValueFunctions.h\"\n"));
    }

    #[test]
    fn enum_lists_identifiers_and_sentinel() {
        let out = spec_example(&[]);
        assert!(
            out.contains("enum PARAM {\n\tGAIN,\n\tMODE,\n\tTOTAL_NUMBER_PARAMETERS\n};\n"),
            "got:\n{out}"
        );
    }

    #[test]
    fn ranges_render_as_normalisable_range_literals() {
        let out = spec_example(&[]);
        assert!(out.contains("\tjuce::NormalisableRange<float>(0.0f, 1.0f, 0.01f, 1.0f),\n"));
        assert!(out.contains("\tjuce::NormalisableRange<float>(0.0f, 2.0f, 1.0f, 1.0f),\n"));
    }

    #[test]
    fn defaults_and_automatable_render_in_order() {
        let out = spec_example(&[]);
        assert!(out.contains("PARAMETER_DEFAULTS {\n\t0.5f,\n\t0.0f,\n};"));
        assert!(out.contains("PARAMETER_AUTOMATABLE {\n\ttrue,\n\tfalse,\n};"));
    }

    #[test]
    fn names_use_identifier_and_nicknames_use_label() {
        let out = spec_example(&[]);
        assert!(out.contains("PARAMETER_NAMES{\n\t\"GAIN\",\n\t\"MODE\",\n};"));
        assert!(out.contains("PARAMETER_NICKNAMES{\n\t\"Gain\",\n\t\"Mode\",\n};"));
    }

    #[test]
    fn suffixes_keep_empty_entries() {
        let out = spec_example(&[]);
        assert!(out.contains("PARAMETER_SUFFIXES {\n\t\"dB\",\n\t\"\",\n};"));
    }

    #[test]
    fn display_strings_render_one_vector_per_row() {
        let out = spec_example(&[]);
        assert!(out.contains(
            "PARAMETER_TO_STRING_ARRS {\n\tstd::vector<juce::String>{},\n\tstd::vector<juce::String>{\"Off\", \"Low\", \"High\", },\n};"
        ));
    }

    #[test]
    fn dependency_table_is_always_present() {
        let out = spec_example(&[]);
        assert!(out.contains(
            "PARAMETER_DEPENDENCY_IDS {\n\tstd::vector<juce::Identifier>{},\n\tstd::vector<juce::Identifier>{},\n};"
        ));

        let out = render(
            "GAIN,0,4,0,1,1,1,Gain,dB,tip,,MODE\nMODE,0,1,1,1,0,1,Mode,,tip,Decibels Amplitude,\n",
            &[],
        );
        assert!(out.contains("\tstd::vector<juce::Identifier>{\"MODE\", },\n"));
    }

    #[test]
    fn default_conversion_lambdas_index_display_strings() {
        let out = spec_example(&[]);
        assert!(out.contains("PARAMETER_VALUE_TO_STRING_FUNCTIONS {"));
        assert!(out.contains("PARAMETER_STRING_TO_VALUE_FUNCTIONS {"));
        assert!(out.contains("[p_id = 0](float value, int maximumStringLength"));
        assert!(out.contains("[p_id = 1](juce::String text) -> float {"));
        assert!(!out.contains("CUSTOM_VALUE_TO_STRING_"));
    }

    #[test]
    fn custom_set_swaps_only_that_parameters_lambdas() {
        let out = spec_example(&["GAIN"]);
        assert!(out.contains(
            "static const std::function<std::string(const float, const int, const float*, const int)> CUSTOM_VALUE_TO_STRING_GAIN = CUSTOM_PARAMETER_VALUE_TO_STRING_FUNCTIONS.at(\"GAIN\");"
        ));
        assert!(out.contains(
            "static const std::function<float(const std::string&)> CUSTOM_STRING_TO_VALUE_GAIN = CUSTOM_PARAMETER_STRING_TO_VALUE_FUNCTIONS.at(\"GAIN\");"
        ));
        assert!(out.contains(
            "\t\treturn juce::String(CUSTOM_VALUE_TO_STRING_GAIN(value, maximumStringLength, dependencies, num_dependencies));"
        ));
        assert!(out.contains("\t\treturn CUSTOM_STRING_TO_VALUE_GAIN(text.toStdString());"));
        // MODE still uses the default lambdas
        assert!(!out.contains("CUSTOM_VALUE_TO_STRING_MODE"));
    }

    #[test]
    fn custom_pointer_comment_is_emitted_even_without_customs() {
        let out = spec_example(&[]);
        assert!(out.contains(
            "// Precomputed custom function pointers for streamlined lambda functions.\n\n"
        ));
        assert!(!out.contains("CUSTOM_VALUE_TO_STRING_"));
    }

    #[test]
    fn artifact_ends_with_blank_line_after_final_table() {
        assert!(spec_example(&[]).ends_with("};\n\n"));
        assert!(render("", &[]).ends_with("};\n\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(spec_example(&["GAIN"]), spec_example(&["GAIN"]));
    }

    #[test]
    fn empty_table_renders_sentinel_only_enum() {
        let out = render("", &[]);
        assert!(out.contains("enum PARAM {\n\tTOTAL_NUMBER_PARAMETERS\n};\n"));
        assert!(out.contains("PARAMETER_IDS{\n};\n"));
    }

    #[test]
    fn every_table_has_one_entry_per_row() {
        let out = spec_example(&[]);
        for table in [
            "PARAMETER_IDS",
            "PARAMETER_NAMES",
            "PARAMETER_NICKNAMES",
            "PARAMETER_SUFFIXES",
            "PARAMETER_TOOLTIPS",
        ] {
            let section = out
                .split(table)
                .nth(1)
                .and_then(|s| s.split("};").next())
                .unwrap_or_else(|| panic!("missing table {table}"));
            assert_eq!(
                section.matches(",\n").count(),
                2,
                "table {table} should have 2 entries"
            );
        }
    }
}
