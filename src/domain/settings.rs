//! Rules for the single key this tool owns in the host settings document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::paths::SCRIPT_FILE;

/// Settings key holding the status line descriptor.
pub const STATUS_LINE_KEY: &str = "statusLine";

/// `statusLine` descriptor: `{ "type": "command", "command": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLineCommand {
    #[serde(rename = "type")]
    pub kind: String,
    pub command: String,
}

impl StatusLineCommand {
    pub fn command(command: impl Into<String>) -> Self {
        Self { kind: "command".to_string(), command: command.into() }
    }

    /// True when the descriptor runs the generated status line script.
    pub fn targets_generated_script(&self) -> bool {
        self.kind == "command" && self.command.contains(SCRIPT_FILE)
    }
}

/// Set `statusLine` on a settings document, keeping every other key.
///
/// A document that is not a JSON object is replaced by a fresh object.
pub fn merge_status_line(document: Value, descriptor: &StatusLineCommand) -> Value {
    let mut object = match document {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    object.insert(
        STATUS_LINE_KEY.to_string(),
        json!({ "type": descriptor.kind, "command": descriptor.command }),
    );
    Value::Object(object)
}

/// Delete `statusLine`, returning whether it was present.
pub fn remove_status_line(document: &mut Value) -> bool {
    document.as_object_mut().and_then(|map| map.shift_remove(STATUS_LINE_KEY)).is_some()
}

/// Read the `statusLine` descriptor, if it has the expected shape.
pub fn status_line_of(document: &Value) -> Option<StatusLineCommand> {
    document.get(STATUS_LINE_KEY).and_then(|value| serde_json::from_value(value.clone()).ok())
}
