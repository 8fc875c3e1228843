use crate::args::{ArgError, ToolArgs};
use serde_json::{Value, json};

pub mod composition_guide;
pub mod enhance_prompt;
pub mod full_taxonomy;
pub mod style_variations;
pub mod vocabulary;

pub fn text_result(text: String, mut structured: Value) -> Value {
    if let Some(obj) = structured.as_object_mut() {
        obj.insert("text".to_string(), json!(text.clone()));
    }
    json!({
        "content": [{"type": "text", "text": text}],
        "structuredContent": structured,
        "isError": false
    })
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    tracing::warn!(kind, %message, "tool call failed");

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

fn arg_error_result(err: ArgError, tool: &str) -> Value {
    error_result(err.kind, err.message, Some(tool))
}

/// Shared entry point for the tools that take no arguments.
fn call_without_arguments(
    args: &Value,
    tool: &str,
    render: impl FnOnce() -> (String, Value),
) -> Value {
    if let Err(err) = ToolArgs::parse(args, &[]) {
        return arg_error_result(err, tool);
    }
    let (text, structured) = render();
    text_result(text, structured)
}
