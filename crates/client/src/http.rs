//! REST transport shared by every endpoint module.
//!
//! Authorized requests carry `Authorization: Bearer <access>`. A 401 while
//! a refresh token is held triggers one `POST /accounts/refresh/` and one
//! retry of the original request; a failed refresh ends the session.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppError, RefreshRequest, RefreshResponse};

use crate::config::ClientConfig;
use crate::session::Session;

pub const REFRESH_PATH: &str = "/accounts/refresh/";

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        Self::with_base_url(&config.api_url, session)
    }

    pub fn with_base_url(base_url: &str, session: Session) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                session,
            }),
        }
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    // ── Unauthenticated ─────────────────────────────────

    pub(crate) async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .inner
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(ensure_success(response).await?).await
    }

    pub(crate) async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .inner
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(ensure_success(response).await?).await
    }

    /// POST whose response body is ignored (204 / empty answers).
    pub(crate) async fn post_public_empty<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response).await?;
        Ok(())
    }

    /// POST with an explicit bearer token, bypassing the session and the
    /// refresh retry. Used once the session has already been cleared.
    pub(crate) async fn post_bearer_empty<B>(&self, path: &str, body: &B, access: &str) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .http
            .post(self.url(path))
            .bearer_auth(access)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response).await?;
        Ok(())
    }

    // ── Authorized ──────────────────────────────────────

    pub(crate) async fn get_authorized<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        let response = self.send_authorized(|http| http.get(&url)).await?;
        decode_json(response).await
    }

    /// POST whose response body is ignored.
    pub(crate) async fn post_authorized_empty<B>(&self, path: &str, body: Option<&B>) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        self.send_authorized(|http| {
            let request = http.post(&url);
            match body {
                Some(body) => request.json(body),
                None => request,
            }
        })
        .await?;
        Ok(())
    }

    pub(crate) async fn put_authorized_empty<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        self.send_authorized(|http| http.put(&url).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete_authorized(&self, path: &str) -> Result<(), AppError> {
        let url = self.url(path);
        self.send_authorized(|http| http.delete(&url)).await?;
        Ok(())
    }

    /// Send a bearer-authorized request built by `build`, refreshing the
    /// access token once on 401. Non-success statuses become `AppError`.
    pub(crate) async fn send_authorized<F>(&self, build: F) -> Result<Response, AppError>
    where
        F: Fn(&reqwest::Client) -> RequestBuilder,
    {
        let session = self.session();
        let access = session
            .access_token()
            .ok_or_else(|| AppError::unauthorized("Not signed in"))?;

        let response = build(&self.inner.http)
            .bearer_auth(&access)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return ensure_success(response).await;
        }

        let Some(refresh) = session.refresh_token() else {
            return ensure_success(response).await;
        };

        tracing::debug!("access token rejected, refreshing");
        let access = match self.refresh_access(&refresh).await {
            Ok(access) => access,
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed, ending session");
                session.end();
                return Err(AppError::unauthorized(
                    "Your session has expired. Please log in again.",
                ));
            }
        };

        let retried = build(&self.inner.http)
            .bearer_auth(&access)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(retried).await
    }

    /// Exchange the refresh token for a new access token and store it.
    async fn refresh_access(&self, refresh: &str) -> Result<String, AppError> {
        let body = RefreshRequest {
            refresh: refresh.to_string(),
        };
        let refreshed: RefreshResponse = self.post_public(REFRESH_PATH, &body).await?;
        self.session()
            .replace_tokens(&refreshed.access, refreshed.refresh.as_deref());
        Ok(refreshed.access)
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> AppError {
    AppError::transport(format!("Request failed: {err}"))
}

/// Pass successful responses through; turn everything else into an `AppError`.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "request returned error status");
    Err(AppError::from_response(status.as_u16(), &body))
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|e| AppError::decode(format!("Unexpected response: {e}")))
}
