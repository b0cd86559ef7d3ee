//! Page-database wire types and client.
//!
//! The page database stores a page as a mapping from property name to either
//! a title value (the unique key) or a rich-text value. The client covers the
//! two operations the pipelines need: a title-equality existence query and
//! page creation. Only the first page of query results is consulted; a title
//! that the database would report on a later page can slip through and create
//! a duplicate, which the caller accepts.

use crate::{Config, Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info};

/// Wire protocol version sent with every page-database request.
pub const PAGE_STORE_VERSION: &str = "2022-06-28";

/// Text payload inside a title or rich-text value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    /// The literal text.
    pub content: String,
}

/// One text block inside a property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextBlock {
    /// Plain text block.
    Text {
        /// The block's text payload.
        text: TextContent,
    },
}

impl TextBlock {
    fn new(content: impl Into<String>) -> Self {
        Self::Text {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

/// A page property value: the title key or a free-form rich-text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Unique-key property, shown as the page title.
    Title {
        /// Title content as a single text block.
        title: Vec<TextBlock>,
    },
    /// Free-form text property.
    RichText {
        /// Rich-text content as a single text block.
        rich_text: Vec<TextBlock>,
    },
}

impl PropertyValue {
    /// Build a title value wrapping one text block.
    #[must_use]
    pub fn title(content: impl Into<String>) -> Self {
        Self::Title {
            title: vec![TextBlock::new(content)],
        }
    }

    /// Build a rich-text value wrapping one text block.
    #[must_use]
    pub fn rich_text(content: impl Into<String>) -> Self {
        Self::RichText {
            rich_text: vec![TextBlock::new(content)],
        }
    }
}

/// Property map submitted when creating a page.
pub type PageProperties = BTreeMap<String, PropertyValue>;

#[derive(Serialize)]
struct QueryRequest<'a> {
    filter: PropertyFilter<'a>,
}

#[derive(Serialize)]
struct PropertyFilter<'a> {
    property: &'a str,
    title: TitleEquals<'a>,
}

#[derive(Serialize)]
struct TitleEquals<'a> {
    equals: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: &'a PageProperties,
}

#[derive(Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

/// Client for the external page database.
pub struct PageStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl PageStore {
    /// Creates a client from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("pagegen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            endpoint: config.page_store_endpoint.clone(),
            api_key: config.page_store_api_key.clone(),
        })
    }

    /// Check whether a page whose `property` title equals `title` exists.
    ///
    /// Consults only the first page of query results.
    ///
    /// # Errors
    ///
    /// [`Error::PageStore`] on a non-success status, [`Error::Network`] on
    /// transport failure. Both are fatal to the pipelines.
    pub async fn page_exists(&self, database_id: &str, property: &str, title: &str) -> Result<bool> {
        let url = format!("{}/v1/databases/{database_id}/query", self.endpoint);
        let body = QueryRequest {
            filter: PropertyFilter {
                property,
                title: TitleEquals { equals: title },
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", PAGE_STORE_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::PageStore {
                status: status.as_u16(),
                body,
            });
        }

        let query: QueryResponse = response.json().await?;
        debug!(
            title,
            matches = query.results.len(),
            "Existence query returned"
        );
        Ok(!query.results.is_empty())
    }

    /// Create a page under `database_id` with the given properties.
    ///
    /// # Errors
    ///
    /// [`Error::PageStore`] on a non-success status, [`Error::Network`] on
    /// transport failure.
    pub async fn create_page(&self, database_id: &str, properties: &PageProperties) -> Result<()> {
        let url = format!("{}/v1/pages", self.endpoint);
        let body = CreatePageRequest {
            parent: Parent { database_id },
            properties,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", PAGE_STORE_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::PageStore {
                status: status.as_u16(),
                body,
            });
        }

        info!("Page created successfully");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(endpoint: &str) -> Config {
        Config {
            completion_api_key: String::new(),
            page_store_api_key: "secret_test".to_string(),
            types_database_id: "types-db".to_string(),
            links_database_id: "links-db".to_string(),
            completion_endpoint: String::new(),
            page_store_endpoint: endpoint.to_string(),
        }
    }

    #[test]
    fn test_title_value_serialization() {
        let value = serde_json::to_value(PropertyValue::title("Queue")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "title",
                "title": [{"type": "text", "text": {"content": "Queue"}}]
            })
        );
    }

    #[test]
    fn test_rich_text_value_serialization() {
        let value = serde_json::to_value(PropertyValue::rich_text("a FIFO data structure")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "rich_text",
                "rich_text": [{"type": "text", "text": {"content": "a FIFO data structure"}}]
            })
        );
    }

    #[test]
    fn test_query_request_shape() {
        let body = serde_json::to_value(QueryRequest {
            filter: PropertyFilter {
                property: "type",
                title: TitleEquals { equals: "Queue" },
            },
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"filter": {"property": "type", "title": {"equals": "Queue"}}})
        );
    }

    #[tokio::test]
    async fn test_page_exists_true_on_non_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/databases/types-db/query"))
            .and(header("authorization", "Bearer secret_test"))
            .and(header("Notion-Version", PAGE_STORE_VERSION))
            .and(body_json(
                json!({"filter": {"property": "type", "title": {"equals": "Queue"}}}),
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"results": [{"id": "abc"}]})),
            )
            .mount(&server)
            .await;

        let store = PageStore::new(&test_config(&server.uri())).unwrap();
        assert!(store.page_exists("types-db", "type", "Queue").await.unwrap());
    }

    #[tokio::test]
    async fn test_page_exists_false_on_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/databases/types-db/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let store = PageStore::new(&test_config(&server.uri())).unwrap();
        assert!(!store.page_exists("types-db", "type", "Queue").await.unwrap());
    }

    #[tokio::test]
    async fn test_page_exists_error_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/databases/types-db/query"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let store = PageStore::new(&test_config(&server.uri())).unwrap();
        match store.page_exists("types-db", "type", "Queue").await {
            Err(Error::PageStore { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            },
            other => panic!("Expected PageStore error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_page_sends_parent_and_properties() {
        let server = MockServer::start().await;
        let mut properties = PageProperties::new();
        properties.insert("type".to_string(), PropertyValue::title("Queue"));
        properties.insert(
            "group".to_string(),
            PropertyValue::rich_text("data structures"),
        );

        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .and(header("Notion-Version", PAGE_STORE_VERSION))
            .and(body_json(json!({
                "parent": {"database_id": "types-db"},
                "properties": {
                    "group": {
                        "type": "rich_text",
                        "rich_text": [{"type": "text", "text": {"content": "data structures"}}]
                    },
                    "type": {
                        "type": "title",
                        "title": [{"type": "text", "text": {"content": "Queue"}}]
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "new-page"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = PageStore::new(&test_config(&server.uri())).unwrap();
        store.create_page("types-db", &properties).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_page_error_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .respond_with(ResponseTemplate::new(400).set_body_string("validation_error"))
            .mount(&server)
            .await;

        let store = PageStore::new(&test_config(&server.uri())).unwrap();
        let result = store.create_page("types-db", &PageProperties::new()).await;
        match result {
            Err(Error::PageStore { status, .. }) => assert_eq!(status, 400),
            other => panic!("Expected PageStore error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_round_trip_created_page_is_found() {
        // Mock double providing read-after-write consistency: once created,
        // the query for the same title returns a match.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/pages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/databases/types-db/query"))
            .and(body_json(
                json!({"filter": {"property": "type", "title": {"equals": "Queue"}}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [{"id": "p1"}]})))
            .mount(&server)
            .await;

        let store = PageStore::new(&test_config(&server.uri())).unwrap();
        let mut properties = PageProperties::new();
        properties.insert("type".to_string(), PropertyValue::title("Queue"));
        store.create_page("types-db", &properties).await.unwrap();
        assert!(store.page_exists("types-db", "type", "Queue").await.unwrap());
    }
}
