//! Read-only queries over a loaded catalog [`Document`].
//!
//! Every function here is a pure function of its inputs. Ids are compared with
//! exact, case-sensitive string equality and sequences keep source order.

use crate::models::{Category, Document, Product};

/// Outcome of looking up the products of one category.
#[derive(Debug, Clone, PartialEq)]
pub enum ByCategory<'a> {
    Found(Vec<&'a Product>),
    /// No category has the requested id, whatever the products reference.
    CategoryNotFound,
    /// The category exists but no product points at it.
    NoProducts,
}

pub fn list_products(doc: &Document) -> &[Product] {
    &doc.products
}

pub fn list_categories(doc: &Document) -> &[Category] {
    &doc.categories
}

/// First product whose id equals `id`.
pub fn product_by_id<'a>(doc: &'a Document, id: &str) -> Option<&'a Product> {
    doc.products.iter().find(|p| p.id == id)
}

/// First category whose id equals `id`.
pub fn category_by_id<'a>(doc: &'a Document, id: &str) -> Option<&'a Category> {
    doc.categories.iter().find(|c| c.id == id)
}

pub fn products_by_category<'a>(doc: &'a Document, category_id: &str) -> ByCategory<'a> {
    if category_by_id(doc, category_id).is_none() {
        return ByCategory::CategoryNotFound;
    }

    let products: Vec<&Product> = doc
        .products
        .iter()
        .filter(|p| p.in_category(category_id))
        .collect();

    if products.is_empty() {
        ByCategory::NoProducts
    } else {
        ByCategory::Found(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Document {
        doc(json!({
            "products": [
                { "id": "p3", "id_category": "c2", "name": "Lamp" },
                { "id": "p1", "id_category": "c1", "name": "Pen" },
                { "id": "p2", "id_category": "c1", "name": "Ink" },
                { "id": "p4", "id_category": "ghost", "name": "Orphan" },
            ],
            "categories": [
                { "id": "c2", "name": "Home" },
                { "id": "c1", "name": "Office" },
                { "id": "c3", "name": "Garden" },
            ],
        }))
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    // ── Listing ───────────────────────────────────────────────────────────────

    #[test]
    fn lists_keep_source_order() {
        let d = sample();
        let products: Vec<&str> = list_products(&d).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(products, vec!["p3", "p1", "p2", "p4"]);
        let categories: Vec<&str> = list_categories(&d).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(categories, vec!["c2", "c1", "c3"]);
    }

    // ── By id ─────────────────────────────────────────────────────────────────

    #[test]
    fn product_found_iff_id_present() {
        let d = sample();
        for p in &d.products {
            assert_eq!(product_by_id(&d, &p.id), Some(p));
        }
        for missing in ["zzz", "", "P1", "p1 ", "c1"] {
            assert!(product_by_id(&d, missing).is_none(), "{missing:?} should not match");
        }
    }

    #[test]
    fn category_found_iff_id_present() {
        let d = sample();
        assert_eq!(category_by_id(&d, "c3").unwrap().fields["name"], "Garden");
        assert!(category_by_id(&d, "C3").is_none());
        assert!(category_by_id(&d, "p1").is_none());
    }

    #[test]
    fn duplicate_id_returns_first_in_source_order() {
        let d = doc(json!({
            "products": [
                { "id": "p1", "id_category": "c1", "name": "first" },
                { "id": "p1", "id_category": "c1", "name": "second" },
            ],
            "categories": [{ "id": "c1" }],
        }));
        assert_eq!(product_by_id(&d, "p1").unwrap().fields["name"], "first");
    }

    // ── By category ───────────────────────────────────────────────────────────

    #[test]
    fn by_category_filters_and_keeps_order() {
        let d = sample();
        match products_by_category(&d, "c1") {
            ByCategory::Found(found) => assert_eq!(ids(&found), vec!["p1", "p2"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_category_wins_over_referencing_products() {
        let d = sample();
        // p4 references "ghost" but no such category exists.
        assert_eq!(products_by_category(&d, "ghost"), ByCategory::CategoryNotFound);
        assert_eq!(products_by_category(&d, "cX"), ByCategory::CategoryNotFound);
    }

    #[test]
    fn existing_category_without_products() {
        let d = sample();
        assert_eq!(products_by_category(&d, "c3"), ByCategory::NoProducts);
    }

    #[test]
    fn minimal_document_lookups() {
        let d = doc(json!({
            "products": [{ "id": "p1", "id_category": "c1" }],
            "categories": [{ "id": "c1" }],
        }));
        assert_eq!(product_by_id(&d, "p1").unwrap().id, "p1");
        assert!(product_by_id(&d, "zzz").is_none());
        assert_eq!(
            products_by_category(&d, "c1"),
            ByCategory::Found(vec![&d.products[0]])
        );
        assert_eq!(products_by_category(&d, "cX"), ByCategory::CategoryNotFound);

        let empty = doc(json!({ "products": [], "categories": [{ "id": "c1" }] }));
        assert_eq!(products_by_category(&empty, "c1"), ByCategory::NoProducts);
    }

    #[test]
    fn queries_are_idempotent() {
        let d = sample();
        assert_eq!(products_by_category(&d, "c1"), products_by_category(&d, "c1"));
        assert_eq!(product_by_id(&d, "p2"), product_by_id(&d, "p2"));
        assert_eq!(d, sample());
    }
}
