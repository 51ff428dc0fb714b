use product_store_core::error::ServiceError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

pub fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

pub fn empty_response(status_code: u16) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: String::new(),
    }
}

pub fn bad_request_response(message: &str) -> ApiGatewayResponse {
    error_response(400, json!({"message": message}))
}

/// Maps a service rejection onto its wire shape.
///
/// Storage failures log the collaborator's error text under `operation` and
/// answer with a fixed body; that text must never be serialized into a
/// response.
pub fn service_error_response(operation: &str, error: &ServiceError) -> ApiGatewayResponse {
    match error {
        ServiceError::Validation(_) | ServiceError::Query(_) | ServiceError::MissingId => {
            bad_request_response(&error.to_string())
        }
        ServiceError::NotFound => empty_response(404),
        ServiceError::Storage(detail) => {
            log_handler_error(
                "storage_failure",
                json!({
                    "operation": operation,
                    "error": detail,
                }),
            );
            error_response(500, json!({"message": "internal server error"}))
        }
    }
}

/// Reads a named path parameter. Absent maps and empty values both count as
/// missing.
pub fn path_parameter<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event
        .get("pathParameters")
        .and_then(|parameters| parameters.get(name))
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

pub fn log_handler_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "product_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

pub fn log_handler_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "product_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use product_store_core::error::{QueryError, ValidationError};

    use super::*;

    #[test]
    fn response_serializes_with_api_gateway_field_names() {
        let response = empty_response(404);

        let wire = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(wire["statusCode"], 404);
        assert_eq!(wire["body"], "");
    }

    #[test]
    fn bad_request_wraps_the_reason_in_a_message_body() {
        let response = bad_request_response("missing body");

        assert_eq!(response.status_code, 400);
        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body, json!({"message": "missing body"}));
    }

    #[test]
    fn validation_query_and_id_rejections_map_to_400() {
        let rejections = [
            ServiceError::Validation(ValidationError::MissingField("name")),
            ServiceError::Query(QueryError::MissingTags),
            ServiceError::MissingId,
        ];

        for rejection in rejections {
            let response = service_error_response("any_operation", &rejection);
            assert_eq!(response.status_code, 400);

            let body: Value = serde_json::from_str(&response.body).expect("body should parse");
            assert_eq!(body["message"], rejection.to_string());
        }
    }

    #[test]
    fn not_found_maps_to_an_empty_404() {
        let response = service_error_response("get_product", &ServiceError::NotFound);

        assert_eq!(response.status_code, 404);
        assert!(response.body.is_empty());
    }

    #[test]
    fn storage_detail_never_reaches_the_response_body() {
        let error = ServiceError::Storage("simulated dynamodb outage".to_string());

        let response = service_error_response("get_product", &error);

        assert_eq!(response.status_code, 500);
        assert!(!response.body.contains("dynamodb"));
        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body, json!({"message": "internal server error"}));
    }

    #[test]
    fn path_parameter_requires_a_non_empty_string() {
        let event = json!({"pathParameters": {"productId": "abc-123"}});
        assert_eq!(path_parameter(&event, "productId"), Some("abc-123"));

        assert_eq!(path_parameter(&json!({}), "productId"), None);
        assert_eq!(
            path_parameter(&json!({"pathParameters": null}), "productId"),
            None
        );
        assert_eq!(
            path_parameter(&json!({"pathParameters": {"productId": ""}}), "productId"),
            None
        );
        assert_eq!(
            path_parameter(&json!({"pathParameters": {"productId": 7}}), "productId"),
            None
        );
    }
}
