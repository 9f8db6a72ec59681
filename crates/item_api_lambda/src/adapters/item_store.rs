use serde_json::{Map, Value};

/// External key-value table holding items keyed by their `id` field.
///
/// Implementations perform exactly one storage round trip per call and
/// report failures as strings; the router maps them at its boundary.
pub trait ItemStore {
    /// Fetch an item by id. Absence is `Ok(None)`, never an error.
    fn get_item(&self, item_id: &str) -> Result<Option<Map<String, Value>>, String>;

    /// Insert or fully overwrite an item keyed by its `id` field.
    fn put_item(&self, fields: &Map<String, Value>) -> Result<(), String>;

    /// Set a single field on the item keyed by `item_id`. When the key
    /// is absent the store's update-on-missing semantics apply.
    fn update_item_field(&self, item_id: &str, field: &str, value: &Value) -> Result<(), String>;

    /// Remove an item by id. Deleting an absent key is not an error.
    fn delete_item(&self, item_id: &str) -> Result<(), String>;
}
