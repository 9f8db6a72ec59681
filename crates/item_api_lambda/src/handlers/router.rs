use serde_json::{json, Map, Value};

use item_api_core::contract::{
    ApiGatewayRequest, ApiGatewayResponse, RouterFault, EMPTY_ITEM_BODY, ID_FIELD,
    INTERNAL_ERROR_BODY, ITEM_CREATED_BODY, ITEM_DELETED_BODY, ITEM_UPDATED_BODY,
    UNSUPPORTED_METHOD_BODY, UPDATABLE_FIELD,
};

use crate::adapters::item_store::ItemStore;

/// Map one HTTP-method-tagged request onto one point operation against
/// the item store.
///
/// Dispatch is a case-sensitive exact match on the method. Every fault
/// funnels through a single mapping at the bottom of this function, so
/// the response surface is exactly five shapes: the four per-method
/// successes, 400 for an unrecognized method, and 500 for everything
/// that goes wrong.
pub fn handle_router_event(
    request: &ApiGatewayRequest,
    store: &dyn ItemStore,
) -> ApiGatewayResponse {
    let outcome = match request.http_method.as_str() {
        "GET" => read_item(request, store),
        "POST" => create_item(request, store),
        "PUT" => update_item(request, store),
        "DELETE" => delete_item(request, store),
        _ => return response(400, UNSUPPORTED_METHOD_BODY),
    };

    match outcome {
        Ok(success) => success,
        Err(fault) => {
            log_router_error(
                "request_failed",
                json!({
                    "method": request.http_method.clone(),
                    "fault_kind": fault.kind(),
                    "error": fault.to_string(),
                }),
            );
            // Both fault kinds collapse to the same opaque 500. Client
            // input faults inherit this from the upstream contract; see
            // DESIGN.md before mapping them to 400.
            match fault {
                RouterFault::ClientInput(_) | RouterFault::Storage(_) => {
                    response(500, INTERNAL_ERROR_BODY)
                }
            }
        }
    }
}

fn read_item(
    request: &ApiGatewayRequest,
    store: &dyn ItemStore,
) -> Result<ApiGatewayResponse, RouterFault> {
    let item_id = required_id(request)?;
    let body = match store.get_item(item_id).map_err(RouterFault::Storage)? {
        Some(fields) => serde_json::to_string(&fields)
            .map_err(|error| RouterFault::Storage(format!("item failed to serialize: {error}")))?,
        None => EMPTY_ITEM_BODY.to_string(),
    };

    Ok(ApiGatewayResponse {
        status_code: 200,
        body,
    })
}

fn create_item(
    request: &ApiGatewayRequest,
    store: &dyn ItemStore,
) -> Result<ApiGatewayResponse, RouterFault> {
    let fields = required_json_body(request)?;
    let has_string_id = fields.get(ID_FIELD).map(Value::is_string).unwrap_or(false);
    if !has_string_id {
        return Err(RouterFault::ClientInput(format!(
            "item body must include a string '{ID_FIELD}' field"
        )));
    }

    store.put_item(&fields).map_err(RouterFault::Storage)?;
    Ok(response(201, ITEM_CREATED_BODY))
}

fn update_item(
    request: &ApiGatewayRequest,
    store: &dyn ItemStore,
) -> Result<ApiGatewayResponse, RouterFault> {
    let item_id = required_id(request)?;
    let fields = required_json_body(request)?;
    let value = fields.get(UPDATABLE_FIELD).ok_or_else(|| {
        RouterFault::ClientInput(format!(
            "request body must include an '{UPDATABLE_FIELD}' field"
        ))
    })?;

    store
        .update_item_field(item_id, UPDATABLE_FIELD, value)
        .map_err(RouterFault::Storage)?;
    Ok(response(200, ITEM_UPDATED_BODY))
}

fn delete_item(
    request: &ApiGatewayRequest,
    store: &dyn ItemStore,
) -> Result<ApiGatewayResponse, RouterFault> {
    let item_id = required_id(request)?;
    store.delete_item(item_id).map_err(RouterFault::Storage)?;
    Ok(response(200, ITEM_DELETED_BODY))
}

fn required_id(request: &ApiGatewayRequest) -> Result<&str, RouterFault> {
    request.query_parameter(ID_FIELD).ok_or_else(|| {
        RouterFault::ClientInput(format!("missing '{ID_FIELD}' query parameter"))
    })
}

fn required_json_body(request: &ApiGatewayRequest) -> Result<Map<String, Value>, RouterFault> {
    let raw = request
        .body
        .as_deref()
        .ok_or_else(|| RouterFault::ClientInput("request body is required".to_string()))?;

    let parsed: Value = serde_json::from_str(raw)
        .map_err(|error| RouterFault::ClientInput(format!("malformed JSON body: {error}")))?;

    match parsed {
        Value::Object(fields) => Ok(fields),
        _ => Err(RouterFault::ClientInput(
            "request body must be a JSON object".to_string(),
        )),
    }
}

fn response(status_code: u16, body: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        body: body.to_string(),
    }
}

fn log_router_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "request_router",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
