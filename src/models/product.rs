use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::required_str;

/// A catalog product. Only `id` and `id_category` are interpreted; the record
/// is served back exactly as it was read, key order included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Product {
    pub id: String,
    /// References `Category::id`. Not validated: a dangling reference is legal.
    pub id_category: String,
    pub fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Product {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_str(&fields, "id")?,
            id_category: required_str(&fields, "id_category")?,
            fields,
        })
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl Product {
    pub fn in_category(&self, category_id: &str) -> bool {
        self.id_category == category_id
    }
}
