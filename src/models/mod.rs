mod category;
mod document;
mod product;

pub use category::*;
pub use document::*;
pub use product::*;

use serde::de::Error as _;
use serde_json::{Map, Value};

/// A string-valued key that every record of a kind must carry.
fn required_str(fields: &Map<String, Value>, key: &'static str) -> Result<String, serde_json::Error> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(serde_json::Error::custom(format!(
            "field `{}` must be a string",
            key
        ))),
        None => Err(serde_json::Error::missing_field(key)),
    }
}
