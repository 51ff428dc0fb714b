use lambda_runtime::{service_fn, Error, LambdaEvent};
use product_store_core::service::ProductService;
use product_store_lambda::adapters::dynamo::{DynamoProductStore, TableConfig};
use product_store_lambda::handlers::common::ApiGatewayResponse;
use product_store_lambda::handlers::search::handle_search_event;
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    let table_name =
        std::env::var("TABLE_NAME").map_err(|_| Error::from("TABLE_NAME must be configured"))?;
    let partition_key = std::env::var("PRIMARY_KEY").unwrap_or_else(|_| "id".to_string());

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&config);
    let store = DynamoProductStore::new(
        client,
        TableConfig {
            table_name,
            partition_key,
        },
    );
    let service = ProductService::new(store);

    Ok(handle_search_event(event.payload, &service))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
