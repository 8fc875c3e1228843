use crate::taxonomy::rules::render_rules;
use crate::taxonomy::{Section, render_section};
use crate::tools::call_without_arguments;
use serde_json::{Value, json};

pub fn render() -> String {
    let structure = Section::CompositionalStructure;
    let mut output = String::from("\n## COMPOSITIONAL STRUCTURE GUIDE\n");
    output.push_str(&render_section(structure.key(), structure.entries()));
    output.push_str("\n\n## COMPOSITIONAL RULES\n");
    output.push_str(&render_rules());
    output
}

pub fn call(tool: &str, args: &Value) -> Value {
    call_without_arguments(args, tool, || (render(), json!({})))
}
