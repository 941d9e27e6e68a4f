use reqwest::Client;

use sagasu_core::models::AnimeRecord;

use super::error::AniListError;
use super::types::{GraphQLResponse, PageResponse};

const SEARCH_QUERY: &str = r#"
query ($search: String) {
    Page {
        media(search: $search, type: ANIME) {
            id
            title { romaji english }
            type
            format
            episodes
            status
            description
            averageScore
            genres
            coverImage { extraLarge }
        }
    }
}
"#;

/// AniList GraphQL API client.
///
/// The search endpoint is public, so no authentication is carried. One
/// request per call: no retry, no pagination past the API's default page.
/// The endpoint URL is owned by the application config, not the client.
pub struct AniListClient {
    endpoint: String,
    http: Client,
}

impl AniListClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let resp = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(operation, status = %status, "AniList response received");
        resp.json::<T>()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))
    }

    /// Search for anime by title, in remote response order.
    ///
    /// The query is trimmed first; an empty query fails fast without
    /// touching the network. An empty result list is not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<AnimeRecord>, AniListError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AniListError::EmptyQuery);
        }

        let resp: GraphQLResponse<PageResponse> = self
            .graphql_request(
                "Search",
                SEARCH_QUERY,
                serde_json::json!({ "search": query }),
            )
            .await?;

        Ok(resp
            .data
            .page
            .media
            .into_iter()
            .map(|m| m.into_record())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot HTTP listener answering the next request with `body` as JSON.
    async fn spawn_server(body: &'static str) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = stream.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn test_empty_query_fails_without_network() {
        // Unroutable endpoint: if the client tried the network the error
        // would be Http, not EmptyQuery.
        let client = AniListClient::new("http://127.0.0.1:0");
        assert!(matches!(
            client.search("").await,
            Err(AniListError::EmptyQuery)
        ));
        assert!(matches!(
            client.search("   ").await,
            Err(AniListError::EmptyQuery)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let client = AniListClient::new("http://127.0.0.1:0");
        assert!(matches!(
            client.search("naruto").await,
            Err(AniListError::Http(_))
        ));
    }

    #[tokio::test]
    async fn test_search_returns_results_in_response_order() {
        let (addr, server) = spawn_server(
            r#"{"data":{"Page":{"media":[
                { "id": 20, "title": { "romaji": "Naruto" } },
                { "id": 1735, "title": { "romaji": "Naruto: Shippuuden" } },
                { "id": 34566, "title": { "romaji": "Boruto: Naruto Next Generations" } }
            ]}}}"#,
        )
        .await;

        let client = AniListClient::new(format!("http://{addr}"));
        let records = client.search("naruto").await.unwrap();
        server.await.unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, [20, 1735, 34566]);
        assert_eq!(records[0].display_title(), "Naruto");
    }

    #[tokio::test]
    async fn test_search_with_empty_media_is_not_an_error() {
        let (addr, server) = spawn_server(r#"{"data":{"Page":{"media":[]}}}"#).await;

        let client = AniListClient::new(format!("http://{addr}"));
        let records = client.search("zzzzz").await.unwrap();
        server.await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_missing_page_path_is_parse_error() {
        let (addr, server) = spawn_server(r#"{"data":{}}"#).await;

        let client = AniListClient::new(format!("http://{addr}"));
        let err = client.search("naruto").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, AniListError::Parse(_)));
    }
}
