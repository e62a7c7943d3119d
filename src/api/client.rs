//! API client for the academic-scheduling REST API.
//!
//! This module provides the `ApiClient` struct for making requests
//! against a configured base URL, with JSON defaults, optional bearer
//! token injection, and typed response decoding.

use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error};

use crate::models::{
    FacultyPage, MessageResponse, Response, StudentSchedulePage, StudyProgramPage, SyncRequest,
    SyncStrategy,
};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sort direction accepted by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

/// Query parameters shared by the paged list endpoints.
/// Absent fields are omitted from the query string and the backend
/// applies its own defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
}

/// API client for the scheduling backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    /// Build the header map for an outgoing request: JSON defaults,
    /// the bearer token when one is set, then caller-supplied headers,
    /// which replace any default of the same name.
    fn request_headers(&self, overrides: &header::HeaderMap) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(ref token) = self.token {
            let value =
                header::HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|err| {
                    error!(error = %err, "bearer token is not a valid header value");
                    err
                })?;
            headers.insert(header::AUTHORIZATION, value);
        }
        for (name, value) in overrides {
            headers.insert(name.clone(), value.clone());
        }
        Ok(headers)
    }

    /// Send a prepared request and decode the JSON body on a 2xx status.
    /// Every failure path logs before propagating.
    async fn execute<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                error!(url, error = %err, "request failed to send");
                return Err(err.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            error!(url, status = %status, error = %err, "request returned error status");
            return Err(err);
        }

        debug!(url, status = %status, "response received");

        match response.json().await {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                error!(url, error = %err, "failed to decode response body");
                Err(ApiError::Decode {
                    url: url.to_string(),
                    source: err,
                })
            }
        }
    }

    /// GET `{base_url}{path}` and decode the JSON body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with_headers(path, header::HeaderMap::new()).await
    }

    /// GET with extra headers; caller headers override the JSON defaults.
    pub async fn get_with_headers<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: header::HeaderMap,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .client
            .get(&url)
            .headers(self.request_headers(&headers)?);
        self.execute(&url, request).await
    }

    /// GET with a serialized query string, used by the list endpoints.
    async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .client
            .get(&url)
            .headers(self.request_headers(&header::HeaderMap::new())?)
            .query(query);
        self.execute(&url, request).await
    }

    /// POST a JSON body to `{base_url}{path}` and decode the response as `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.post_with_headers(path, body, header::HeaderMap::new())
            .await
    }

    /// POST with extra headers; caller headers override the JSON defaults.
    pub async fn post_with_headers<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        headers: header::HeaderMap,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .client
            .post(&url)
            .headers(self.request_headers(&headers)?)
            .json(body);
        self.execute(&url, request).await
    }

    // ===== Endpoint Methods =====

    /// Fetch a page of study programs
    pub async fn list_study_programs(
        &self,
        query: &ListQuery,
    ) -> Result<Response<StudyProgramPage>, ApiError> {
        self.get_with_query("/v1/study-programs", query).await
    }

    /// Fetch a page of faculties
    pub async fn list_faculties(
        &self,
        query: &ListQuery,
    ) -> Result<Response<FacultyPage>, ApiError> {
        self.get_with_query("/v1/faculties", query).await
    }

    /// Fetch a page of student schedules
    pub async fn list_student_schedules(
        &self,
        query: &ListQuery,
    ) -> Result<Response<StudentSchedulePage>, ApiError> {
        self.get_with_query("/v1/student-schedules", query).await
    }

    /// Trigger a schedule sync on the backend with the given strategy
    pub async fn sync_student_schedules(
        &self,
        strategy: SyncStrategy,
    ) -> Result<MessageResponse, ApiError> {
        self.post("/v1/student-schedules/sync", &SyncRequest { strategy })
            .await
    }
}
