//! Backend HTTP client.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::check_response;

/// HTTP client bound to the backend's base URL.
///
/// Carries the session cookie across requests; every Rollcall request goes
/// through one shared instance so login state reaches all screens.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Absolute URL for an API path, tolerant of slashes on either side.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `GET` a path and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = check_response(self.http.get(self.url(path)).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `POST` a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::get_json`].
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp =
            check_response(self.http.post(self.url(path)).json(body).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `PUT` a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::get_json`].
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = check_response(self.http.put(self.url(path)).json(body).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `DELETE` a path and deserialize the response.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::get_json`].
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = check_response(self.http.delete(self.url(path)).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn url_joins_with_single_slash() {
        let c = client("http://localhost:8000/api/");
        assert_eq!(c.url("/students"), "http://localhost:8000/api/students");
        assert_eq!(c.url("students"), "http://localhost:8000/api/students");
    }

    #[test]
    fn url_keeps_nested_paths() {
        let c = client("http://localhost:8000/api");
        assert_eq!(
            c.url("attendance_records/2026-03-02"),
            "http://localhost:8000/api/attendance_records/2026-03-02"
        );
    }
}
