//! DynamoDB-backed implementation of the storage collaborator.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use product_store_core::product::Product;
use product_store_core::query::{TagFilter, TagMatchMode};
use product_store_core::store::ProductStore;

/// Table wiring resolved from the environment by each bin and passed in
/// explicitly. `partition_key` is the attribute that holds the product id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: String,
}

pub struct DynamoProductStore {
    client: aws_sdk_dynamodb::Client,
    config: TableConfig,
}

impl DynamoProductStore {
    pub fn new(client: aws_sdk_dynamodb::Client, config: TableConfig) -> Self {
        Self { client, config }
    }
}

impl ProductStore for DynamoProductStore {
    fn put_item(&self, product: &Product) -> Result<(), String> {
        let client = self.client.clone();
        let table_name = self.config.table_name.clone();
        let item = to_item(product, &self.config.partition_key);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to put item to dynamodb: {error}"))
            })
        })
    }

    fn get_item(&self, id: &str) -> Result<Option<Product>, String> {
        let client = self.client.clone();
        let table_name = self.config.table_name.clone();
        let partition_key = self.config.partition_key.clone();
        let key_value = AttributeValue::S(id.to_string());

        let item = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .get_item()
                    .table_name(table_name)
                    .key(partition_key, key_value)
                    .send()
                    .await
                    .map(|output| output.item)
                    .map_err(|error| format!("failed to get item from dynamodb: {error}"))
            })
        })?;

        item
            .map(|attributes| from_item(&attributes, &self.config.partition_key))
            .transpose()
    }

    fn delete_item(&self, id: &str) -> Result<bool, String> {
        let client = self.client.clone();
        let table_name = self.config.table_name.clone();
        let partition_key = self.config.partition_key.clone();
        let key_value = AttributeValue::S(id.to_string());

        // ReturnValue::AllOld makes the response reveal whether the key
        // existed before the delete.
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_item()
                    .table_name(table_name)
                    .key(partition_key, key_value)
                    .return_values(ReturnValue::AllOld)
                    .send()
                    .await
                    .map(|output| output.attributes.is_some())
                    .map_err(|error| format!("failed to delete item from dynamodb: {error}"))
            })
        })
    }

    fn scan(&self, filter: &TagFilter) -> Result<Vec<Product>, String> {
        let (expression, values) = filter_expression(filter);
        let client = self.client.clone();
        let table_name = self.config.table_name.clone();

        let items = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let mut request = client
                    .scan()
                    .table_name(table_name)
                    .filter_expression(expression);
                for (placeholder, value) in values {
                    request = request.expression_attribute_values(placeholder, value);
                }

                request
                    .send()
                    .await
                    .map(|output| output.items.unwrap_or_default())
                    .map_err(|error| format!("failed to scan dynamodb table: {error}"))
            })
        })?;

        items
            .iter()
            .map(|attributes| from_item(attributes, &self.config.partition_key))
            .collect()
    }
}

/// Renders the engine-agnostic filter into a DynamoDB filter expression with
/// one positional placeholder per tag.
fn filter_expression(filter: &TagFilter) -> (String, Vec<(String, AttributeValue)>) {
    let mut clauses = Vec::with_capacity(filter.tags().len());
    let mut values = Vec::with_capacity(filter.tags().len());

    for (index, tag) in filter.tags().iter().enumerate() {
        let placeholder = format!(":t{index}");
        clauses.push(format!("contains(tags, {placeholder})"));
        values.push((placeholder, AttributeValue::S(tag.clone())));
    }

    let joiner = match filter.mode() {
        TagMatchMode::All => " AND ",
        TagMatchMode::Any => " OR ",
    };

    (clauses.join(joiner), values)
}

fn to_item(product: &Product, partition_key: &str) -> HashMap<String, AttributeValue> {
    let tags = product
        .tags
        .iter()
        .map(|tag| AttributeValue::S(tag.clone()))
        .collect();

    HashMap::from([
        (partition_key.to_string(), AttributeValue::S(product.id.clone())),
        ("name".to_string(), AttributeValue::S(product.name.clone())),
        ("price".to_string(), AttributeValue::N(product.price.to_string())),
        ("tags".to_string(), AttributeValue::L(tags)),
    ])
}

fn from_item(
    attributes: &HashMap<String, AttributeValue>,
    partition_key: &str,
) -> Result<Product, String> {
    let id = string_attribute(attributes, partition_key)?;
    let name = string_attribute(attributes, "name")?;

    let price = attributes
        .get("price")
        .and_then(|value| value.as_n().ok())
        .ok_or_else(|| "stored item is missing a numeric 'price' attribute".to_string())?
        .parse::<f64>()
        .map_err(|error| format!("stored 'price' attribute is not a number: {error}"))?;

    let tags = attributes
        .get("tags")
        .and_then(|value| value.as_l().ok())
        .ok_or_else(|| "stored item is missing a 'tags' list attribute".to_string())?
        .iter()
        .map(|value| {
            value
                .as_s()
                .map(String::clone)
                .map_err(|_| "stored 'tags' attribute holds a non-string element".to_string())
        })
        .collect::<Result<Vec<String>, String>>()?;

    Ok(Product {
        id,
        name,
        price,
        tags,
    })
}

fn string_attribute(
    attributes: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, String> {
    attributes
        .get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| format!("stored item is missing a string '{name}' attribute"))
}

#[cfg(test)]
mod tests {
    use product_store_core::query::compile_tag_filter;

    use super::*;

    fn widget() -> Product {
        Product {
            id: "abc-123".to_string(),
            name: "Widget".to_string(),
            price: 9.99,
            tags: vec!["red".to_string(), "sale".to_string()],
        }
    }

    #[test]
    fn items_round_trip_through_the_attribute_map() {
        let product = widget();

        let item = to_item(&product, "id");
        let restored = from_item(&item, "id").expect("item should convert back");

        assert_eq!(restored, product);
    }

    #[test]
    fn the_partition_key_attribute_name_is_configurable() {
        let product = widget();

        let item = to_item(&product, "pk");

        assert_eq!(
            item.get("pk"),
            Some(&AttributeValue::S("abc-123".to_string()))
        );
        assert!(!item.contains_key("id"));
        let restored = from_item(&item, "pk").expect("item should convert back");
        assert_eq!(restored.id, "abc-123");
    }

    #[test]
    fn conversion_reports_the_missing_attribute() {
        let product = widget();
        let mut item = to_item(&product, "id");
        item.remove("price");

        let error = from_item(&item, "id").expect_err("conversion should fail");

        assert!(error.contains("price"));
    }

    #[test]
    fn and_filters_render_with_one_placeholder_per_tag() {
        let filter = compile_tag_filter(Some("red,sale"), None).expect("filter should compile");

        let (expression, values) = filter_expression(&filter);

        assert_eq!(expression, "contains(tags, :t0) AND contains(tags, :t1)");
        assert_eq!(
            values,
            vec![
                (":t0".to_string(), AttributeValue::S("red".to_string())),
                (":t1".to_string(), AttributeValue::S("sale".to_string())),
            ]
        );
    }

    #[test]
    fn or_filters_render_with_the_or_joiner() {
        let filter =
            compile_tag_filter(Some("red,sale"), Some("or")).expect("filter should compile");

        let (expression, _) = filter_expression(&filter);

        assert_eq!(expression, "contains(tags, :t0) OR contains(tags, :t1)");
    }

    #[test]
    fn single_tag_filters_render_without_a_joiner() {
        let filter = compile_tag_filter(Some("red"), None).expect("filter should compile");

        let (expression, values) = filter_expression(&filter);

        assert_eq!(expression, "contains(tags, :t0)");
        assert_eq!(values.len(), 1);
    }
}
