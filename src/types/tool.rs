//! Tool declarations carried on chat requests

use serde::{Deserialize, Serialize};

/// Declares a capability the responder may ask the client to invoke.
///
/// `parameters` is an opaque JSON Schema describing the expected arguments.
/// The responder never validates against it; it exists so a client can tell
/// the server what the tool accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: serde_json::Value::Null,
        }
    }

    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Tool-choice policy carried on the request.
///
/// Present for wire fidelity; the responder's decision depends only on the
/// message history and the declared tool set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    #[default]
    Auto,
    None,
}
