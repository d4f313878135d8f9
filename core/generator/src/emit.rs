//! Emission of the generated parser and terms modules.
//!
//! Both modules are plain text assembled here; the CLI writes them verbatim.
//! The terms module binds every rule name to its term id. The parser module
//! exports a single object (named by `export_name`, default `parser`) with
//! the top rule, the highest term id, and, when requested, the node names.

use crate::grammar::Grammar;
use crate::{BuildOptions, ModuleStyle};

const HEADER: &str = "// This file was generated by build-parser. Do not edit.";

pub(crate) fn terms_module(grammar: &Grammar, options: &BuildOptions) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    match options.module_style {
        ModuleStyle::Es => {
            out.push_str("export const\n");
            for (id, rule) in grammar.rules.iter().enumerate() {
                let sep = if id + 1 == grammar.rules.len() { "\n" } else { ",\n" };
                out.push_str(&format!("  {name} = {id}{sep}", name = rule.name));
            }
        }
        ModuleStyle::CommonJs => {
            out.push_str("\"use strict\"\n");
            for (id, rule) in grammar.rules.iter().enumerate() {
                out.push_str(&format!("exports.{name} = {id}\n", name = rule.name));
            }
        }
    }
    out
}

pub(crate) fn parser_module(grammar: &Grammar, options: &BuildOptions) -> String {
    let export = options.export_name.as_deref().unwrap_or("parser");

    let mut fields = String::new();
    fields.push_str(&format!("  top: \"{}\",\n", grammar.top_rule().name));
    fields.push_str(&format!("  maxTerm: {}", grammar.rules.len() - 1));
    if options.include_names {
        let names: Vec<String> = grammar
            .rules
            .iter()
            .map(|r| format!("\"{}\"", r.name))
            .collect();
        fields.push_str(&format!(",\n  nodeNames: [{}]", names.join(", ")));
    }
    fields.push('\n');

    let mut out = String::from(HEADER);
    out.push('\n');
    match options.module_style {
        ModuleStyle::Es => {
            out.push_str(&format!("export const {export} = {{\n{fields}}}\n"));
        }
        ModuleStyle::CommonJs => {
            out.push_str("\"use strict\"\n");
            out.push_str(&format!("exports.{export} = {{\n{fields}}}\n"));
        }
    }
    out
}
