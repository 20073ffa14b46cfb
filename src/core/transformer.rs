use crate::core::{Record, Transformer};
use crate::domain::model::{Product, ProductDetails, ProductMetadata, TransformedProduct};
use serde_json::{json, Value};

/// Remaps the six known product fields into the canonical nested shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductTransformer;

impl ProductTransformer {
    pub fn new() -> Self {
        Self
    }
}

fn empty_string() -> Value {
    Value::String(String::new())
}

fn empty_mapping() -> Value {
    json!({})
}

impl Transformer for ProductTransformer {
    type Output = TransformedProduct;

    fn transform(&self, mut input: Record) -> TransformedProduct {
        // 只有缺少的欄位使用預設值，其餘（含 null）原樣搬移
        let product = Product {
            size: input.take_or("Size", empty_string()),
            manufacturer_number: input.take_or("ManufacturerNumber", empty_string()),
            details: ProductDetails {
                custom_fields: input.take_or("custom_fields", empty_mapping()),
                specifications: input.take_or("specifications", empty_mapping()),
            },
            metadata: ProductMetadata {
                created_at: input.take_or("created_at", empty_string()),
                updated_at: input.take_or("updated_at", empty_string()),
            },
        };

        tracing::debug!(
            "Transformed product record ({} unmapped keys ignored)",
            input.data.len()
        );

        TransformedProduct { product }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record::new(map),
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_empty_record_gets_all_defaults() {
        let output = ProductTransformer::new().transform(Record::default());

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "product": {
                    "size": "",
                    "manufacturer_number": "",
                    "details": {"custom_fields": {}, "specifications": {}},
                    "metadata": {"created_at": "", "updated_at": ""}
                }
            })
        );
    }

    #[test]
    fn test_full_record_is_remapped() {
        let input = record(json!({
            "Size": "8 Hours",
            "ManufacturerNumber": "ABC123",
            "custom_fields": {"field1": "value1", "field2": "value2"},
            "specifications": {"spec1": "value1"},
            "created_at": "2024-01-01",
            "updated_at": "2024-01-02",
            "ignored": true
        }));

        let output = ProductTransformer::new().transform(input);

        assert_eq!(output.product.size, json!("8 Hours"));
        assert_eq!(output.product.manufacturer_number, json!("ABC123"));
        assert_eq!(
            output.product.details.custom_fields,
            json!({"field1": "value1", "field2": "value2"})
        );
        assert_eq!(output.product.details.specifications, json!({"spec1": "value1"}));
        assert_eq!(output.product.metadata.created_at, json!("2024-01-01"));
        assert_eq!(output.product.metadata.updated_at, json!("2024-01-02"));
    }

    #[test]
    fn test_each_missing_field_defaults_independently() {
        for input_key in ["Size", "ManufacturerNumber", "created_at", "updated_at"] {
            let mut full = json!({
                "Size": "L",
                "ManufacturerNumber": "MN-1",
                "custom_fields": {"a": 1},
                "specifications": {"b": 2},
                "created_at": "c",
                "updated_at": "u"
            });
            full.as_object_mut().unwrap().remove(input_key);

            let output = serde_json::to_value(ProductTransformer.transform(record(full))).unwrap();
            let product = &output["product"];
            let scalars = [
                &product["size"],
                &product["manufacturer_number"],
                &product["metadata"]["created_at"],
                &product["metadata"]["updated_at"],
            ];
            assert_eq!(
                scalars.iter().filter(|v| v.as_str() == Some("")).count(),
                1,
                "exactly one default expected when {} is missing",
                input_key
            );
            assert_eq!(product["details"]["custom_fields"], json!({"a": 1}));
        }
    }

    #[test]
    fn test_wrong_shaped_values_pass_through() {
        let input = record(json!({
            "Size": 42,
            "custom_fields": ["not", "a", "mapping"],
            "specifications": "plain text"
        }));

        let output = ProductTransformer.transform(input);

        assert_eq!(output.product.size, json!(42));
        assert_eq!(output.product.details.custom_fields, json!(["not", "a", "mapping"]));
        assert_eq!(output.product.details.specifications, json!("plain text"));
    }

    #[test]
    fn test_null_values_are_not_defaulted() {
        let input = record(json!({
            "Size": null,
            "specifications": null,
            "updated_at": null
        }));

        let output = ProductTransformer.transform(input);

        assert_eq!(output.product.size, Value::Null);
        assert_eq!(output.product.details.specifications, Value::Null);
        assert_eq!(output.product.metadata.updated_at, Value::Null);
        assert_eq!(output.product.details.custom_fields, json!({}));
        assert_eq!(output.product.metadata.created_at, json!(""));
    }

    #[test]
    fn test_nested_mappings_keep_key_order() {
        let input = record(json!({
            "custom_fields": {"zeta": 1, "alpha": 2, "mid": {"y": 1, "x": 2}}
        }));

        let output = ProductTransformer.transform(input);
        let keys: Vec<&String> = output
            .product
            .details
            .custom_fields
            .as_object()
            .unwrap()
            .keys()
            .collect();

        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }
}
