use product_store_core::service::ProductService;
use product_store_core::store::ProductStore;
use serde_json::{json, Value};

use crate::handlers::common::{
    bad_request_response, empty_response, log_handler_info, path_parameter,
    service_error_response, ApiGatewayResponse,
};

/// DELETE /products/{productId}. Answers an empty 200 when the product
/// existed, an empty 404 when it did not.
pub fn handle_delete_event(
    event: Value,
    service: &ProductService<impl ProductStore>,
) -> ApiGatewayResponse {
    let Some(id) = path_parameter(&event, "productId") else {
        return bad_request_response("null productId in path");
    };

    match service.delete(id) {
        Ok(()) => {
            log_handler_info("product_deleted", json!({"id": id}));
            empty_response(200)
        }
        Err(error) => service_error_response("delete_product", &error),
    }
}
