use std::collections::HashSet;

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{Category, Product};

/// The whole catalog as read from the data source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Document {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    /// Every top-level entry in source order. The two collections are moved
    /// into their typed fields and leave a `null` placeholder here.
    top_level: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Document {
    type Error = serde_json::Error;

    fn try_from(mut top_level: Map<String, Value>) -> Result<Self, Self::Error> {
        let products = take_collection(&mut top_level, "products")?;
        let categories = take_collection(&mut top_level, "categories")?;
        Ok(Self {
            products,
            categories,
            top_level,
        })
    }
}

fn take_collection<T: DeserializeOwned>(
    top_level: &mut Map<String, Value>,
    key: &'static str,
) -> Result<Vec<T>, serde_json::Error> {
    let value = top_level
        .get_mut(key)
        .ok_or_else(|| serde_json::Error::missing_field(key))?;
    serde_json::from_value(value.take())
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.top_level.len()))?;
        for (key, value) in &self.top_level {
            match key.as_str() {
                "products" => map.serialize_entry(key, &self.products)?,
                "categories" => map.serialize_entry(key, &self.categories)?,
                _ => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

impl Document {
    /// Ids that occur more than once, in order of their second occurrence.
    pub fn duplicate_product_ids(&self) -> Vec<&str> {
        duplicates(self.products.iter().map(|p| p.id.as_str()))
    }

    pub fn duplicate_category_ids(&self) -> Vec<&str> {
        duplicates(self.categories.iter().map(|c| c.id.as_str()))
    }
}

fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_both_collections() {
        let doc: Document = serde_json::from_value(json!({
            "products": [{ "id": "p1", "id_category": "c1" }],
            "categories": [{ "id": "c1" }],
        }))
        .unwrap();
        assert_eq!(doc.products.len(), 1);
        assert_eq!(doc.categories[0].id, "c1");
    }

    #[test]
    fn missing_collection_is_rejected() {
        let err = serde_json::from_value::<Document>(json!({ "products": [] })).unwrap_err();
        assert!(err.to_string().contains("categories"));
    }

    #[test]
    fn record_without_id_rejects_whole_document() {
        let result = serde_json::from_value::<Document>(json!({
            "products": [{ "id": "p1", "id_category": "c1" }, { "id_category": "c1" }],
            "categories": [],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_in_source_key_order() {
        let raw = r#"{"version":3,"categories":[{"name":"Office","id":"c1"}],"products":[{"id_category":"c1","id":"p1"}],"owner":"shop"}"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.products[0].id, "p1");
        assert_eq!(serde_json::to_string(&doc).unwrap(), raw);
    }

    #[test]
    fn reports_each_duplicate_once() {
        let doc: Document = serde_json::from_value(json!({
            "products": [
                { "id": "p1", "id_category": "c1" },
                { "id": "p2", "id_category": "c1" },
                { "id": "p1", "id_category": "c2" },
                { "id": "p1", "id_category": "c3" },
            ],
            "categories": [{ "id": "c1" }, { "id": "c2" }],
        }))
        .unwrap();
        assert_eq!(doc.duplicate_product_ids(), vec!["p1"]);
        assert!(doc.duplicate_category_ids().is_empty());
    }
}
