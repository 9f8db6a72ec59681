use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::{Map, Number, Value};

use item_api_core::contract::ID_FIELD;

use crate::adapters::item_store::ItemStore;

/// Item store backed by one DynamoDB table, keyed on the `id` attribute.
///
/// The SDK calls are async; callers of `ItemStore` are not, so each
/// operation bridges through `block_in_place` onto the ambient runtime,
/// the same way the Lambda binaries drive the SDK elsewhere. The client
/// handle is cheap to clone and is never mutated after construction.
pub struct DynamoDbItemStore {
    table_name: String,
    client: Client,
}

impl DynamoDbItemStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }
}

impl ItemStore for DynamoDbItemStore {
    fn get_item(&self, item_id: &str) -> Result<Option<Map<String, Value>>, String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = AttributeValue::S(item_id.to_string());

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_item()
                    .table_name(table_name)
                    .key(ID_FIELD, key)
                    .send()
                    .await
                    .map_err(|error| format!("failed to read item from dynamodb: {error}"))?;

                match output.item {
                    Some(attributes) => Ok(Some(fields_from_attributes(&attributes)?)),
                    None => Ok(None),
                }
            })
        })
    }

    fn put_item(&self, fields: &Map<String, Value>) -> Result<(), String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let attributes = attributes_from_fields(fields)?;

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(attributes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write item to dynamodb: {error}"))
            })
        })
    }

    fn update_item_field(&self, item_id: &str, field: &str, value: &Value) -> Result<(), String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = AttributeValue::S(item_id.to_string());
        let field_name = field.to_string();
        let field_value = attribute_value_from_json(value)?;

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .update_item()
                    .table_name(table_name)
                    .key(ID_FIELD, key)
                    .update_expression("SET #field = :value")
                    .expression_attribute_names("#field", field_name)
                    .expression_attribute_values(":value", field_value)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to update item in dynamodb: {error}"))
            })
        })
    }

    fn delete_item(&self, item_id: &str) -> Result<(), String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = AttributeValue::S(item_id.to_string());

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_item()
                    .table_name(table_name)
                    .key(ID_FIELD, key)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to delete item from dynamodb: {error}"))
            })
        })
    }
}

fn attributes_from_fields(
    fields: &Map<String, Value>,
) -> Result<HashMap<String, AttributeValue>, String> {
    fields
        .iter()
        .map(|(name, value)| Ok((name.clone(), attribute_value_from_json(value)?)))
        .collect()
}

fn fields_from_attributes(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Map<String, Value>, String> {
    attributes
        .iter()
        .map(|(name, value)| Ok((name.clone(), json_from_attribute_value(value)?)))
        .collect()
}

fn attribute_value_from_json(value: &Value) -> Result<AttributeValue, String> {
    Ok(match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(values) => AttributeValue::L(
            values
                .iter()
                .map(attribute_value_from_json)
                .collect::<Result<Vec<_>, String>>()?,
        ),
        Value::Object(fields) => AttributeValue::M(attributes_from_fields(fields)?),
    })
}

fn json_from_attribute_value(value: &AttributeValue) -> Result<Value, String> {
    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(flag) => Ok(Value::Bool(*flag)),
        AttributeValue::N(raw) => {
            let number: Number = serde_json::from_str(raw)
                .map_err(|_| format!("dynamodb returned a non-numeric N attribute: {raw}"))?;
            Ok(Value::Number(number))
        }
        AttributeValue::S(text) => Ok(Value::String(text.clone())),
        AttributeValue::L(values) => Ok(Value::Array(
            values
                .iter()
                .map(json_from_attribute_value)
                .collect::<Result<Vec<_>, String>>()?,
        )),
        AttributeValue::M(attributes) => Ok(Value::Object(fields_from_attributes(attributes)?)),
        other => Err(format!(
            "dynamodb attribute type is outside the item contract: {other:?}"
        )),
    }
}
