use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Table name used when `TABLE_NAME` is not configured.
pub const DEFAULT_TABLE_NAME: &str = "BasicTable";

/// Key field every item must carry; also the query parameter name.
pub const ID_FIELD: &str = "id";

/// The only field PUT is allowed to overwrite.
pub const UPDATABLE_FIELD: &str = "info";

// Fixed response bodies. These byte sequences are part of the wire
// contract and must not be regenerated through a serializer.
pub const ITEM_CREATED_BODY: &str = "{\"message\": \"Item created\"}";
pub const ITEM_UPDATED_BODY: &str = "{\"message\": \"Item updated\"}";
pub const ITEM_DELETED_BODY: &str = "{\"message\": \"Item deleted\"}";
pub const UNSUPPORTED_METHOD_BODY: &str = "{\"message\": \"Unsupported HTTP method\"}";
pub const INTERNAL_ERROR_BODY: &str = "{\"error\": \"Internal server error\"}";
pub const EMPTY_ITEM_BODY: &str = "{}";

/// The subset of an API Gateway proxy event the router consumes.
///
/// `httpMethod` is required; a payload without it is rejected before the
/// router runs. Query parameters and body may be absent or `null`, and
/// every other event field is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayRequest {
    #[serde(rename = "httpMethod")]
    pub http_method: String,
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiGatewayRequest {
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|parameters| parameters.get(name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// A fault raised on the way to, or inside, a storage operation.
///
/// Absence of an item is not a fault; GET reports it as a successful
/// empty result. The unsupported-method branch never raises a fault
/// either, it answers 400 directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterFault {
    /// Missing or malformed request input (query parameter or body).
    ClientInput(String),
    /// Any failure reported by the storage collaborator.
    Storage(String),
}

impl RouterFault {
    pub fn kind(&self) -> &'static str {
        match self {
            RouterFault::ClientInput(_) => "client_input",
            RouterFault::Storage(_) => "storage",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RouterFault::ClientInput(message) | RouterFault::Storage(message) => message,
        }
    }
}

impl std::fmt::Display for RouterFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for RouterFault {}
