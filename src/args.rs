use crate::mcp::errors;
use serde_json::{Map, Value};

#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ArgError {
    pub kind: &'static str,
    pub message: String,
}

impl ArgError {
    fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: errors::INVALID_INPUT,
            message: message.into(),
        }
    }
}

/// Tool arguments after the object check; a missing `arguments` field is an empty object.
pub struct ToolArgs<'a> {
    obj: Option<&'a Map<String, Value>>,
}

impl<'a> ToolArgs<'a> {
    pub fn parse(args: &'a Value, allowed: &[&str]) -> Result<Self, ArgError> {
        let obj = match args {
            Value::Null => None,
            Value::Object(obj) => Some(obj),
            _ => return Err(ArgError::invalid_input("arguments must be an object")),
        };

        if let Some(obj) = obj
            && let Some(unknown) = obj.keys().find(|key| !allowed.contains(&key.as_str()))
        {
            return Err(ArgError::invalid_input(format!(
                "unexpected argument: {unknown}"
            )));
        }

        Ok(Self { obj })
    }

    fn string(&self, key: &str) -> Result<Option<&'a str>, ArgError> {
        let Some(value) = self.obj.and_then(|obj| obj.get(key)) else {
            return Ok(None);
        };
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text.as_str())),
            _ => Err(ArgError::invalid_input(format!("{key} must be a string"))),
        }
    }

    pub fn string_or(&self, key: &str, default: &'a str) -> Result<&'a str, ArgError> {
        Ok(self.string(key)?.unwrap_or(default))
    }

    pub fn required_string(&self, key: &str) -> Result<&'a str, ArgError> {
        self.string(key)?
            .ok_or_else(|| ArgError::invalid_input(format!("{key} is required")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALLOWED: &[&str] = &["routine_description", "style_preference"];

    #[test]
    fn defaults_apply() {
        let args = json!({"routine_description": "opening spiral"});
        let parsed = ToolArgs::parse(&args, ALLOWED).expect("args");
        assert_eq!(
            parsed.required_string("routine_description").expect("value"),
            "opening spiral"
        );
        assert_eq!(
            parsed.string_or("style_preference", "classical").expect("value"),
            "classical"
        );
    }

    #[test]
    fn null_arguments_are_empty() {
        let args = Value::Null;
        let parsed = ToolArgs::parse(&args, ALLOWED).expect("args");
        let err = parsed
            .required_string("routine_description")
            .expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
        assert_eq!(err.message, "routine_description is required");
    }

    #[test]
    fn non_object_rejected() {
        let args = json!(["a"]);
        let err = ToolArgs::parse(&args, ALLOWED).err().expect("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
    }

    #[test]
    fn unknown_key_rejected() {
        let args = json!({"tempo": "fast"});
        let err = ToolArgs::parse(&args, ALLOWED).err().expect("error");
        assert_eq!(err.message, "unexpected argument: tempo");
    }

    #[test]
    fn wrong_type_rejected() {
        let args = json!({"style_preference": 3});
        let parsed = ToolArgs::parse(&args, ALLOWED).expect("args");
        let err = parsed
            .string_or("style_preference", "classical")
            .expect_err("error");
        assert_eq!(err.message, "style_preference must be a string");
    }

    #[test]
    fn blank_required_kept_verbatim() {
        let args = json!({"routine_description": "   "});
        let parsed = ToolArgs::parse(&args, ALLOWED).expect("args");
        assert_eq!(
            parsed.required_string("routine_description").expect("value"),
            "   "
        );
    }

    #[test]
    fn null_required_is_missing() {
        let args = json!({"routine_description": null});
        let parsed = ToolArgs::parse(&args, ALLOWED).expect("args");
        let err = parsed
            .required_string("routine_description")
            .expect_err("error");
        assert_eq!(err.to_string(), "invalid_input: routine_description is required");
    }
}
