use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::required_str;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Category {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Category {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_str(&fields, "id")?,
            fields,
        })
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requires_id() {
        let err = serde_json::from_value::<Category>(json!({ "name": "Books" })).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn round_trips_opaque_fields() {
        let raw = r#"{"name":"Books","icon":null,"id":"c1"}"#;
        let category: Category = serde_json::from_str(raw).unwrap();
        assert_eq!(category.id, "c1");
        assert_eq!(serde_json::to_string(&category).unwrap(), raw);
    }
}
