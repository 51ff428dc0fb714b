use product_store_core::product::Product;
use product_store_core::service::ProductService;
use product_store_core::store::ProductStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::handlers::common::{
    log_handler_info, service_error_response, success_response, ApiGatewayResponse,
};

/// Collection envelope for search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(rename = "_records")]
    pub records: Vec<Product>,
}

/// GET /products/search?tags=a,b&mode=or. A filter that matches nothing is a
/// successful response with an empty record set.
pub fn handle_search_event(
    event: Value,
    service: &ProductService<impl ProductStore>,
) -> ApiGatewayResponse {
    let tags = query_parameter(&event, "tags");
    let mode = query_parameter(&event, "mode");

    match service.search_by_tags(tags, mode) {
        Ok(records) => {
            log_handler_info("search_completed", json!({"matches": records.len()}));
            success_response(200, SearchResponse { records })
        }
        Err(error) => service_error_response("search_products", &error),
    }
}

fn query_parameter<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event
        .get("queryStringParameters")
        .and_then(|parameters| parameters.get(name))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use product_store_core::test_helpers::{FailingProductStore, MemoryProductStore};

    use super::*;

    fn seeded_service() -> ProductService<MemoryProductStore> {
        let store = MemoryProductStore::new();
        let products = [
            ("id-1", "Widget", vec!["red", "sale"]),
            ("id-2", "Gadget", vec!["blue", "sale"]),
            ("id-3", "Gizmo", vec!["green"]),
        ];
        for (id, name, tags) in products {
            store.seed(Product {
                id: id.to_string(),
                name: name.to_string(),
                price: 9.99,
                tags: tags.into_iter().map(str::to_string).collect(),
            });
        }
        ProductService::new(store)
    }

    fn search_event(tags: &str) -> Value {
        json!({"queryStringParameters": {"tags": tags}})
    }

    fn records(response: &ApiGatewayResponse) -> Vec<Product> {
        let parsed: SearchResponse =
            serde_json::from_str(&response.body).expect("body should hold records");
        parsed.records
    }

    #[test]
    fn answers_matching_records_under_the_records_key() {
        let service = seeded_service();

        let response = handle_search_event(search_event("sale"), &service);

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert!(body.get("_records").is_some());
        assert_eq!(records(&response).len(), 2);
    }

    #[test]
    fn requires_every_tag_by_default() {
        let service = seeded_service();

        let matched = records(&handle_search_event(search_event("red,sale"), &service));

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Widget");
    }

    #[test]
    fn or_mode_widens_the_match() {
        let service = seeded_service();
        let event = json!({"queryStringParameters": {"tags": "red,green", "mode": "or"}});

        let matched = records(&handle_search_event(event, &service));

        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn drops_empty_segments_from_the_tag_list() {
        let service = seeded_service();

        let matched = records(&handle_search_event(search_event("red,,sale,"), &service));

        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn no_match_is_a_successful_empty_record_set() {
        let service = seeded_service();

        let response = handle_search_event(search_event("purple"), &service);

        assert_eq!(response.status_code, 200);
        assert!(records(&response).is_empty());
    }

    #[test]
    fn missing_tags_parameter_is_rejected() {
        let service = seeded_service();

        for event in [json!({}), json!({"queryStringParameters": {}})] {
            let response = handle_search_event(event, &service);

            assert_eq!(response.status_code, 400);
            let body: Value = serde_json::from_str(&response.body).expect("body should parse");
            assert_eq!(body["message"], "missing tags in query string");
        }
    }

    #[test]
    fn a_tag_list_with_no_usable_tags_is_rejected() {
        let service = seeded_service();

        let response = handle_search_event(search_event(",,"), &service);

        assert_eq!(response.status_code, 400);
        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body["message"], "invalid query");
    }

    #[test]
    fn a_storage_failure_answers_500_without_leaking_detail() {
        let service = ProductService::new(FailingProductStore);

        let response = handle_search_event(search_event("red"), &service);

        assert_eq!(response.status_code, 500);
        assert!(!response.body.contains("simulated"));
    }
}
