use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "dataset": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "minLength": 1 }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "max_sessions": { "type": "integer", "minimum": 1 },
                    "session_ttl_secs": { "type": "integer", "minimum": 1 }
                }
            },
            "slider": {
                "type": "object",
                "properties": {
                    "min": { "type": "number" },
                    "max": { "type": "number" },
                    "step": { "type": "number", "exclusiveMinimum": 0 },
                    "marks": { "type": "array", "items": { "type": "number" } }
                }
            }
        }
    })
});
