use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result};

/// REST client bound to one base URL.
///
/// Failures propagate straight to the caller: there is no retry and no
/// timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl ApiClient {
    pub fn new(base_url: &str, user_agent: &str, api_key: Option<SecretString>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()?;
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `GET {base}/{path}?{query}[&api-key=...]`, parsed as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.build_url(path, query)?;
        debug!(endpoint = path, "GET");

        // reqwest errors carry the full URL, which may include the API key.
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        let body = resp.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| ApiError::DataShape(format!("{path}: {e}")))
    }

    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segs = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?;
            segs.pop_if_empty();
            segs.extend(path.split('/').filter(|s| !s.is_empty()));
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
            if let Some(key) = &self.api_key {
                pairs.append_pair("api-key", key.expose_secret());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::Value;

    use super::*;

    fn client(base: &str, key: Option<&str>) -> ApiClient {
        ApiClient::new(base, "shelfscope-test", key.map(|k| SecretString::from(k.to_string()))).unwrap()
    }

    #[test]
    fn builds_url_under_base_path() {
        let c = client("https://api.example.com/svc/books/v3", Some("k3y"));
        let url = c.build_url("lists.json", &[("list", "hardcover-fiction")]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/svc/books/v3/lists.json?list=hardcover-fiction&api-key=k3y"
        );
    }

    #[test]
    fn builds_url_without_query_or_key() {
        let c = client("https://www.example.com/books/v1/", None);
        let url = c.build_url("volumes", &[]).unwrap();
        assert_eq!(url.as_str(), "https://www.example.com/books/v1/volumes");
    }

    #[test]
    fn rejects_invalid_base() {
        let err = ApiClient::new("not a url", "ua", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn debug_output_hides_key() {
        let c = client("https://api.example.com", Some("super-secret"));
        assert!(!format!("{c:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn get_json_sends_api_key() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/lists/names.json")
            .match_query(Matcher::UrlEncoded("api-key".into(), "abc".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let c = client(&server.url(), Some("abc"));
        let v: Value = c.get_json("lists/names.json", &[]).await.unwrap();
        assert!(v["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/lists.json")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"fault": "invalid key"}"#)
            .create_async()
            .await;

        let c = client(&server.url(), Some("secret-key"));
        let err = c.get_json::<Value>("lists.json", &[]).await.unwrap_err();
        match &err {
            ApiError::HttpStatus { status, endpoint } => {
                assert_eq!(*status, 401);
                assert_eq!(endpoint, "lists.json");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        assert!(!err.to_string().contains("secret-key"));
    }

    #[tokio::test]
    async fn malformed_body_is_data_shape_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let c = client(&server.url(), None);
        let err = c.get_json::<Value>("volumes", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::DataShape(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let c = client("http://127.0.0.1:9", Some("secret-key"));
        let err = c.get_json::<Value>("lists.json", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(!err.to_string().contains("secret-key"));
    }
}
