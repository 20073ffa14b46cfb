use serde_json::{json, Value};

/// The demo request envelope run by the CLI when no input is given.
pub fn sample_event() -> Value {
    json!({
        "product_data": {
            "Size": "8 Hours",
            "ManufacturerNumber": "ABC123",
            "custom_fields": {
                "field1": "value1",
                "field2": "value2"
            },
            "specifications": {
                "spec1": "value1",
                "spec2": "value2"
            },
            "created_at": "2024-01-01",
            "updated_at": "2024-01-02"
        }
    })
}
