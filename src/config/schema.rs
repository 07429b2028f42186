use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "mobb_api_token": { "type": "string", "minLength": 1 },
            "tenant": { "type": "string", "pattern": "^[a-z0-9]([a-z0-9-]*[a-z0-9])?$" },
            "daysOfData": { "type": "integer", "minimum": 1 },
            "baseUrl": { "type": "string", "format": "uri" }
        },
        "additionalProperties": false
    })
});
