//! Kind checks for tool arguments arriving as untyped JSON.
//!
//! The typed tool structs would reject a non-string `text` too, but only with
//! a generic deserialization message. Checking here first gives callers an
//! `InvalidArgument` that names the field and the kind that was sent.

use crate::config::tool_errors;
use crate::error::Result;
use crate::tools::{EchoTool, WordCountTool};
use serde_json::{Map, Value};

/// Expected JSON kind of a declared argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    String,
    Boolean,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Boolean => "boolean",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Boolean => value.is_boolean(),
        }
    }
}

struct Param {
    name: &'static str,
    kind: Kind,
    required: bool,
}

const TEXT_PARAM: Param = Param {
    name: "text",
    kind: Kind::String,
    required: true,
};

const ECHO_PARAMS: &[Param] = &[
    TEXT_PARAM,
    Param {
        name: "upper",
        kind: Kind::Boolean,
        required: false,
    },
];

const WORD_COUNT_PARAMS: &[Param] = &[TEXT_PARAM];

/// Name of a JSON value's kind as reported in error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn params_for(tool_name: &str) -> Option<&'static [Param]> {
    if tool_name == EchoTool::tool_name() {
        Some(ECHO_PARAMS)
    } else if tool_name == WordCountTool::tool_name() {
        Some(WORD_COUNT_PARAMS)
    } else {
        None
    }
}

/// Check `arguments` against the declared parameters of `tool_name`.
///
/// Errors are prefixed with `server`, the name the server reports to clients.
/// A missing map is treated as empty. Optional parameters may be absent or
/// `null`. Arguments the tool does not declare are ignored.
pub fn validate_arguments(
    server: &str,
    tool_name: &str,
    arguments: Option<&Map<String, Value>>,
) -> Result<()> {
    let params = params_for(tool_name).ok_or_else(|| tool_errors::unknown_tool(tool_name))?;
    let empty = Map::new();
    let arguments = arguments.unwrap_or(&empty);

    for param in params {
        match arguments.get(param.name) {
            None if param.required => {
                return Err(tool_errors::invalid_argument(
                    server,
                    tool_name,
                    param.name,
                    &format!("missing required argument '{}'", param.name),
                ));
            }
            None => {}
            Some(Value::Null) if !param.required => {}
            Some(value) if param.kind.matches(value) => {}
            Some(value) => {
                return Err(tool_errors::invalid_argument(
                    server,
                    tool_name,
                    param.name,
                    &format!(
                        "'{}' must be a {}, got {}",
                        param.name,
                        param.kind.name(),
                        kind_name(value)
                    ),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SERVER_NAME;
    use crate::error::Error;
    use serde_json::json;

    fn check(tool_name: &str, arguments: Value) -> Result<()> {
        let map = arguments.as_object().cloned().unwrap();
        validate_arguments(SERVER_NAME, tool_name, Some(&map))
    }

    #[test]
    fn test_valid_echo_arguments() {
        assert!(check("echo", json!({"text": "hi"})).is_ok());
        assert!(check("echo", json!({"text": "hi", "upper": true})).is_ok());
        assert!(check("echo", json!({"text": "hi", "upper": null})).is_ok());
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert!(check("word_count", json!({"text": "a b", "verbose": 3})).is_ok());
    }

    #[test]
    fn test_null_text_rejected() {
        let err = check("echo", json!({"text": null})).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.field(), Some("text"));
        assert!(err.to_string().ends_with("'text' must be a string, got null"));
    }

    #[test]
    fn test_integer_text_rejected() {
        let err = check("word_count", json!({"text": 123})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "echo-server:word_count - 'text' must be a string, got integer"
        );
    }

    #[test]
    fn test_error_prefix_uses_given_server_name() {
        let map = json!({"text": 5}).as_object().cloned().unwrap();
        let err = validate_arguments("custom-echo", "echo", Some(&map)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "custom-echo:echo - 'text' must be a string, got integer"
        );
    }

    #[test]
    fn test_array_text_rejected() {
        let err = check("echo", json!({"text": ["a", "b"]})).unwrap_err();
        assert!(err.to_string().contains("got array"));
    }

    #[test]
    fn test_non_boolean_upper_rejected() {
        let err = check("echo", json!({"text": "a", "upper": "yes"})).unwrap_err();
        assert_eq!(err.field(), Some("upper"));
        assert!(err.to_string().contains("'upper' must be a boolean, got string"));
    }

    #[test]
    fn test_missing_text_rejected() {
        let err = validate_arguments(SERVER_NAME, "word_count", None).unwrap_err();
        assert!(err.to_string().contains("missing required argument 'text'"));
    }

    #[test]
    fn test_unknown_tool() {
        let err = check("shout", json!({})).unwrap_err();
        assert!(matches!(err, Error::UnknownTool(ref name) if name == "shout"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&json!(1.5)), "number");
        assert_eq!(kind_name(&json!(-4)), "integer");
        assert_eq!(kind_name(&json!({"a": 1})), "object");
        assert_eq!(kind_name(&json!(false)), "boolean");
    }
}
