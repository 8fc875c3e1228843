use crate::taxonomy::rules::render_rules;
use crate::taxonomy::styles::render_styles;
use crate::taxonomy::{Section, render_section};
use crate::tools::call_without_arguments;
use serde_json::{Value, json};

const FOOTER: &str = "\n\n---\n\
Three-Layer Architecture:\n\
- Layer 1: Deterministic taxonomy (movement, spatial, temporal, physical)\n\
- Layer 2: Compositional rules and technical requirements\n\
- Layer 3: Style variations and expressive synthesis\n\
\nCost optimization: ~60-80% savings vs pure LLM approaches\n";

pub fn render() -> String {
    let mut output = String::from("# RHYTHMIC RIBBON DANCE VISUAL VOCABULARY\n");
    output.push_str("\n## Complete Taxonomy - All Layers\n");

    for section in Section::ALL {
        output.push_str(&render_section(section.key(), section.entries()));
    }

    output.push_str("\n\n## COMPOSITIONAL RULES (Layer 2)\n");
    output.push_str(&render_rules());

    output.push_str("\n\n## STYLE VARIATIONS (Layer 3)\n");
    output.push_str(&render_styles());

    output.push_str(FOOTER);
    output
}

pub fn call(tool: &str, args: &Value) -> Value {
    call_without_arguments(args, tool, || {
        let sections: Vec<&str> = Section::ALL.iter().map(|section| section.key()).collect();
        (render(), json!({"sections": sections}))
    })
}
