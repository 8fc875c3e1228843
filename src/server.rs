use crate::mcp::{self, contracts, errors};
use crate::taxonomy::Section;
use crate::tools;
use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::io::{BufRead, Write};

/// Runs the NDJSON request loop until the reader is exhausted.
pub fn serve<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "stdio server started"
    );

    for line in reader.lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed request line");
                continue;
            }
        };

        if let Some(response) = handle_message(&request) {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    tracing::info!("stdin closed, stdio server stopping");
    Ok(())
}

/// Returns `None` for notifications and for messages that carry no method.
pub fn handle_message(request: &Value) -> Option<Value> {
    let method = request.get("method").and_then(|value| value.as_str());
    let id = request.get("id").cloned();

    let (Some(method), Some(id)) = (method, id) else {
        if let Some(method) = method {
            tracing::debug!(method, "notification ignored");
        }
        return None;
    };
    tracing::debug!(method, "handling request");

    let response = match method {
        "initialize" => success(
            id,
            json!({
                "protocolVersion": contracts::PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "ping" => success(id, json!({})),
        "tools/list" => success(id, json!({ "tools": mcp::tool_definitions() })),
        "tools/call" => match request.get("params") {
            Some(params) if params.is_object() => success(id, handle_tool_call(params)),
            _ => failure(id, errors::INVALID_REQUEST, "params must be an object"),
        },
        other => failure(
            id,
            errors::METHOD_NOT_FOUND,
            &format!("method not found: {other}"),
        ),
    };
    Some(response)
}

fn success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

fn failure(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message
        }
    })
}

pub fn handle_tool_call(params: &Value) -> Value {
    let Some(name) = params.get("name").and_then(|value| value.as_str()) else {
        return tools::error_result(errors::INVALID_INPUT, "params.name must be a string", None);
    };

    let args = params.get("arguments").cloned().unwrap_or(Value::Null);
    call_tool(name, &args)
}

pub fn call_tool(name: &str, args: &Value) -> Value {
    match name {
        contracts::TOOL_ENHANCE_PROMPT => tools::enhance_prompt::call(args),
        contracts::TOOL_MOVEMENT_VOCABULARY => {
            tools::vocabulary::call(Section::MovementPatterns, name, args)
        }
        contracts::TOOL_SPATIAL_VOCABULARY => {
            tools::vocabulary::call(Section::SpatialRelationships, name, args)
        }
        contracts::TOOL_TEMPORAL_VOCABULARY => {
            tools::vocabulary::call(Section::TemporalDynamics, name, args)
        }
        contracts::TOOL_PHYSICAL_PROPERTIES => {
            tools::vocabulary::call(Section::PhysicalProperties, name, args)
        }
        contracts::TOOL_COMPOSITION_GUIDE => tools::composition_guide::call(name, args),
        contracts::TOOL_STYLE_VARIATIONS => tools::style_variations::call(name, args),
        contracts::TOOL_FULL_TAXONOMY => tools::full_taxonomy::call(name, args),
        _ => tools::error_result(
            errors::UNKNOWN_TOOL,
            format!("unknown tool: {name}"),
            Some(name),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_get_no_response() {
        let request = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handle_message(&request).is_none());
    }

    #[test]
    fn unknown_method_is_an_rpc_error() {
        let request = json!({"jsonrpc": "2.0", "id": 9, "method": "resources/list"});
        let response = handle_message(&request).expect("response");
        assert_eq!(response["id"], json!(9));
        assert_eq!(response["error"]["code"], json!(-32601));
    }

    #[test]
    fn ping_returns_empty_result() {
        let request = json!({"jsonrpc": "2.0", "id": "p", "method": "ping"});
        let response = handle_message(&request).expect("response");
        assert_eq!(response["result"], json!({}));
    }

    #[test]
    fn tools_call_without_params_is_rejected() {
        let request = json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call"});
        let response = handle_message(&request).expect("response");
        assert_eq!(response["error"]["code"], json!(-32600));
    }

    #[test]
    fn unknown_tool_is_a_tool_error() {
        let result = call_tool("ribbon_tempo", &Value::Null);
        assert_eq!(result["isError"], json!(true));
        assert_eq!(result["structuredContent"]["error"]["kind"], json!("unknown_tool"));
    }

    #[test]
    fn every_listed_tool_dispatches() {
        for definition in mcp::tool_definitions() {
            let name = definition["name"].as_str().expect("name");
            let args = if name == contracts::TOOL_ENHANCE_PROMPT {
                json!({"routine_description": "x"})
            } else {
                json!({})
            };
            let result = call_tool(name, &args);
            assert_eq!(result["isError"], json!(false), "{name} failed");
            let text = result["content"][0]["text"].as_str().expect("text");
            assert!(!text.trim().is_empty(), "{name} returned empty text");
        }
    }

    #[test]
    fn serve_skips_garbage_and_answers_requests() {
        let input = b"not json\n\n{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n";
        let mut output = Vec::new();
        serve(&input[..], &mut output).expect("serve");
        let text = String::from_utf8(output).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let response: Value = serde_json::from_str(lines[0]).expect("json");
        assert_eq!(response["id"], json!(1));
    }
}
