use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use item_api_core::contract::{ApiGatewayRequest, ApiGatewayResponse, DEFAULT_TABLE_NAME};
use item_api_lambda::adapters::dynamodb::DynamoDbItemStore;
use item_api_lambda::handlers::router::handle_router_event;

async fn handle_request(
    store: &DynamoDbItemStore,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    // A payload without httpMethod is an invocation error, not a 500.
    let request: ApiGatewayRequest = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid proxy request: {error}")))?;

    Ok(handle_router_event(&request, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let table_name =
        std::env::var("TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string());
    let store = DynamoDbItemStore::new(aws_sdk_dynamodb::Client::new(&config), table_name);

    lambda_runtime::run(service_fn(|event| handle_request(&store, event))).await
}
