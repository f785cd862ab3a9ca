//! Image search client implementation
//!
//! Uses the Custom Search JSON API with `searchType=image`.

use crate::config::CredentialSettings;
use crate::network::HttpClient;
use crate::results::{SearchError, SearchResult};
use tracing::debug;
use url::Url;

/// Default endpoint of the Custom Search JSON API
pub const SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Client for the upstream image search endpoint
pub struct SearchClient {
    http: HttpClient,
    credentials: CredentialSettings,
    base_url: String,
}

impl SearchClient {
    pub fn new(http: HttpClient, credentials: CredentialSettings) -> Self {
        Self {
            http,
            credentials,
            base_url: SEARCH_API_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL for a query.
    ///
    /// All parameters go through the query-pair serializer, so characters
    /// like `&` or spaces in the query cannot corrupt the request.
    fn request_url(&self, query: &str) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("key", &self.credentials.api_key)
            .append_pair("cx", &self.credentials.engine_id)
            .append_pair("q", query)
            .append_pair("searchType", "image");
        Ok(url)
    }

    /// Execute one image search.
    ///
    /// Exactly one GET per call; no retry, no backoff. The query is passed
    /// through as-is, empty strings included.
    pub async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let url = self.request_url(query)?;

        debug!("requesting image search for '{}'", query);
        let response = self.http.get(url.as_str()).await?;

        if !response.is_success() {
            return Err(SearchError::Http(response.status));
        }

        let result: SearchResult = response.json()?;
        debug!("search '{}' returned {} items", query, result.len());

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_credentials() -> CredentialSettings {
        CredentialSettings::new("test-key", "test-cx")
    }

    fn test_client(base_url: String) -> SearchClient {
        SearchClient::new(HttpClient::new().unwrap(), test_credentials()).with_base_url(base_url)
    }

    #[test]
    fn test_request_url_carries_credentials() {
        let client = SearchClient::new(HttpClient::new().unwrap(), test_credentials());
        let url = client.request_url("rust crabs").unwrap();
        let url = url.as_str();

        assert!(url.starts_with(SEARCH_API_URL));
        assert!(url.contains("key=test-key"));
        assert!(url.contains("cx=test-cx"));
        assert!(url.contains("q=rust+crabs"));
        assert!(url.contains("searchType=image"));
    }

    #[test]
    fn test_request_url_encodes_query() {
        let client = SearchClient::new(HttpClient::new().unwrap(), test_credentials());
        let url = client.request_url("black & white").unwrap();

        // An ampersand in the query must not split the parameter
        assert!(url.as_str().contains("q=black+%26+white"));
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned()),
            Some("black & white".to_string())
        );
    }

    #[tokio::test]
    async fn test_search_issues_one_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("key", "test-key"))
            .and(query_param("cx", "test-cx"))
            .and(query_param("q", "rust crabs"))
            .and(query_param("searchType", "image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"link": "https://example.com/a.png", "title": "A"},
                    {"link": "https://example.com/b.png", "title": "B"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(format!("{}/customsearch/v1", server.uri()));
        let result = client.search("rust crabs").await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.items[0].link, "https://example.com/a.png");
        assert_eq!(result.items[1].title, "B");
    }

    #[tokio::test]
    async fn test_search_missing_items_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"kind": "customsearch#search"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(format!("{}/customsearch/v1", server.uri()));
        let result = client.search("nothing here").await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_search_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/customsearch/v1", server.uri()));
        let err = client.search("denied").await.unwrap_err();

        assert!(matches!(err, SearchError::Http(403)));
    }

    #[tokio::test]
    async fn test_search_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/customsearch/v1", server.uri()));
        let err = client.search("broken").await.unwrap_err();

        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_search_network_failure() {
        // Nothing listens on the discard port
        let client = test_client("http://127.0.0.1:9/customsearch/v1".to_string());
        let err = client.search("unreachable").await.unwrap_err();

        assert!(matches!(err, SearchError::Network(_)));
    }

    #[tokio::test]
    async fn test_search_empty_query_passed_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(format!("{}/customsearch/v1", server.uri()));
        let result = client.search("").await.unwrap();

        assert!(result.is_empty());
    }
}
