//! Table API client (PostgREST-compatible `/rest/v1/*`)

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::ports::outbound::{HttpRequest, HttpResponse, HttpTransport, TableError, TablePort};

pub struct RestTableClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    anon_key: String,
    timeout: Duration,
}

impl RestTableClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            timeout,
        }
    }

    /// `/rest/v1/{table}?select=*&col=eq.value`, values percent-encoded
    fn select_url(&self, table: &str, filters: &[(String, String)]) -> String {
        let base = format!("{}/rest/v1/{}", self.base_url, table);
        let params = std::iter::once(("select".to_string(), "*".to_string())).chain(
            filters
                .iter()
                .map(|(column, value)| (column.clone(), format!("eq.{}", value))),
        );
        url::Url::parse_with_params(&base, params)
            .map(String::from)
            .unwrap_or(base)
    }

    fn request(&self, request: HttpRequest, access_token: Option<String>) -> HttpRequest {
        let token = access_token.unwrap_or_else(|| self.anon_key.clone());
        request
            .header("apikey", self.anon_key.as_str())
            .header("Accept", "application/json")
            .bearer(&token)
            .timeout(self.timeout)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TableError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(TableError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl TablePort for RestTableClient {
    async fn select(
        &self,
        table: &str,
        filters: &[(String, String)],
        access_token: Option<String>,
    ) -> Result<Vec<Value>, TableError> {
        let request = self.request(HttpRequest::get(self.select_url(table, filters)), access_token);
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(|e| TableError::Decode(e.to_string()))
    }

    async fn insert(
        &self,
        table: &str,
        row: &Value,
        access_token: Option<String>,
    ) -> Result<(), TableError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let request = self
            .request(HttpRequest::post(url), access_token)
            .header("Prefer", "return=minimal")
            .json(row)?;
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{HttpMethod, MockHttpTransport};
    use mockall::predicate::function;

    fn client(transport: MockHttpTransport) -> RestTableClient {
        RestTableClient::new(
            Arc::new(transport),
            "https://db.example.com",
            "anon-key",
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn select_builds_eq_filters() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .with(function(|r: &HttpRequest| {
                r.method == HttpMethod::Get
                    && r.url == "https://db.example.com/rest/v1/profiles?select=*&id=eq.abc"
                    && r.header_value("apikey") == Some("anon-key")
                    && r.header_value("Authorization") == Some("Bearer user-jwt")
            }))
            .returning(|_| {
                Ok(HttpResponse {
                    status: 200,
                    body: r#"[{"id":"abc","full_name":"Ana"}]"#.into(),
                })
            });

        let rows = client(transport)
            .select("profiles", &[("id".into(), "abc".into())], Some("user-jwt".into()))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["full_name"], "Ana");
    }

    #[tokio::test]
    async fn insert_failure_keeps_status_and_body() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .with(function(|r: &HttpRequest| {
                r.method == HttpMethod::Post
                    && r.header_value("Prefer") == Some("return=minimal")
                    && r.header_value("Authorization") == Some("Bearer anon-key")
            }))
            .returning(|_| {
                Ok(HttpResponse {
                    status: 409,
                    body: "duplicate key".into(),
                })
            });

        let err = client(transport)
            .insert("profiles", &serde_json::json!({"id": "abc"}), None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TableError::Status {
                status: 409,
                body: "duplicate key".into()
            }
        );
    }
}
