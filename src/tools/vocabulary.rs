use crate::taxonomy::{Section, render_section};
use crate::tools::call_without_arguments;
use serde_json::{Value, json};

pub fn render(section: Section) -> String {
    render_section(section.key(), section.entries())
}

pub fn call(section: Section, tool: &str, args: &Value) -> Value {
    call_without_arguments(args, tool, || {
        let categories: Vec<&str> = section.entries().iter().map(|(name, _)| *name).collect();
        (
            render(section),
            json!({"section": section.key(), "categories": categories}),
        )
    })
}
