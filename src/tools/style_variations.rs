use crate::taxonomy::styles::{self, render_styles};
use crate::tools::call_without_arguments;
use serde_json::{Value, json};

pub fn render() -> String {
    format!("\n## STYLE VARIATIONS\n{}", render_styles())
}

pub fn call(tool: &str, args: &Value) -> Value {
    call_without_arguments(args, tool, || {
        (
            render(),
            json!({"styles": styles::names(), "default": styles::DEFAULT_STYLE}),
        )
    })
}
