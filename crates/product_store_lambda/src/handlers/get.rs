use product_store_core::service::ProductService;
use product_store_core::store::ProductStore;
use serde_json::Value;

use crate::handlers::common::{
    bad_request_response, path_parameter, service_error_response, success_response,
    ApiGatewayResponse,
};

/// GET /products/{productId}. Answers 200 with the entity, or an empty 404.
pub fn handle_get_event(
    event: Value,
    service: &ProductService<impl ProductStore>,
) -> ApiGatewayResponse {
    let Some(id) = path_parameter(&event, "productId") else {
        return bad_request_response("null productId in path");
    };

    match service.get(id) {
        Ok(product) => success_response(200, product),
        Err(error) => service_error_response("get_product", &error),
    }
}
