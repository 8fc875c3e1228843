pub const INVALID_INPUT: &str = "invalid_input";
pub const UNKNOWN_TOOL: &str = "unknown_tool";

/// JSON-RPC error codes used by the stdio server.
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_REQUEST: i64 = -32600;
