use product_store_core::product::ProductDraft;
use product_store_core::service::ProductService;
use product_store_core::store::ProductStore;
use serde_json::{json, Value};

use crate::handlers::common::{
    bad_request_response, log_handler_info, service_error_response, success_response,
    ApiGatewayResponse,
};

/// POST /products. Answers 201 with the stored entity, assigned id included.
pub fn handle_create_event(
    event: Value,
    service: &ProductService<impl ProductStore>,
) -> ApiGatewayResponse {
    let body = match request_body(&event) {
        Ok(value) => value,
        Err(message) => return bad_request_response(&message),
    };

    let draft = match serde_json::from_value::<ProductDraft>(body) {
        Ok(value) => value,
        Err(_) => return bad_request_response("invalid message body"),
    };

    match service.create(draft) {
        Ok(product) => {
            log_handler_info("product_created", json!({"id": product.id.clone()}));
            success_response(201, product)
        }
        Err(error) => service_error_response("create_product", &error),
    }
}

/// Extracts the request body. API Gateway delivers it either as a
/// JSON-encoded string or, with some integrations, as an inline object.
fn request_body(event: &Value) -> Result<Value, String> {
    let Some(body) = event.get("body") else {
        return Err("missing body".to_string());
    };

    match body {
        Value::Null => Err("missing body".to_string()),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => {
            serde_json::from_str(text).map_err(|_| "invalid message body".to_string())
        }
        _ => Err("invalid message body".to_string()),
    }
}
