use std::time::Duration;

use chantier_config::ApiConfig;
use chantier_store::{Storage, StorageKey};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use crate::error::ApiError;
use crate::http::{check_response, decode};
use crate::session::SessionEvent;

const SESSION_CHANNEL_CAPACITY: usize = 16;

/// HTTP client for the Chantier backend.
///
/// Cheap to clone; clones share the connection pool, the store and the
/// session-event channel.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: Storage,
    session_tx: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    /// Build a client for `config.base_url` backed by `storage`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig, storage: Storage) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("chantier/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let (session_tx, _) = broadcast::channel(SESSION_CHANNEL_CAPACITY);
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
            session_tx,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Listen for session lifecycle events, [`SessionEvent::Unauthorized`] in particular.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.session_tx.subscribe()
    }

    /// `GET url` with query `params`, decoding the body as `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]. A `401` also clears the stored token.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, url).query(params);
        self.execute(request).await
    }

    /// `POST url` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]. A `401` also clears the stored token.
    pub async fn post<T, B>(&self, url: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = with_body(self.request(Method::POST, url), body);
        self.execute(request).await
    }

    /// `PUT url` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]. A `401` also clears the stored token.
    pub async fn put<T, B>(&self, url: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = with_body(self.request(Method::PUT, url), body);
        self.execute(request).await
    }

    /// `DELETE url`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]. A `401` also clears the stored token.
    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let request = self.request(Method::DELETE, url);
        self.execute(request).await
    }

    // ── Token management ──────────────────────────────────────────────

    /// Persist the session token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the store cannot be written.
    pub fn set_token(&self, token: &str) -> Result<(), ApiError> {
        Ok(self.storage.set(StorageKey::Token, token)?)
    }

    /// Clear the session token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the store cannot be written.
    pub fn remove_token(&self) -> Result<(), ApiError> {
        Ok(self.storage.remove(StorageKey::Token)?)
    }

    /// Whether a non-empty token is stored. Makes no network call.
    ///
    /// An unreadable store counts as signed out.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().ok().flatten().is_some()
    }

    pub(crate) fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(self
            .storage
            .get(StorageKey::Token)?
            .filter(|token| !token.is_empty()))
    }

    pub(crate) fn publish(&self, event: SessionEvent) {
        // No subscriber is a normal state.
        let _ = self.session_tx.send(event);
    }

    // ── Request pipeline ──────────────────────────────────────────────

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, self.endpoint(url))
    }

    /// Join `url` onto the base address. Absolute URLs pass through.
    fn endpoint(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        format!("{}/{}", self.base_url, url.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = self.authorize(request)?.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "api request");

        let resp = self.http.execute(request).await?;
        match check_response(resp).await {
            Ok(resp) => decode(resp).await,
            Err(ApiError::Unauthorized) => {
                self.invalidate_session();
                Err(ApiError::Unauthorized)
            }
            Err(error) => Err(error),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(match self.token()? {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    fn invalidate_session(&self) {
        if let Err(error) = self.storage.remove(StorageKey::Token) {
            tracing::warn!(%error, "failed to clear token after 401");
        }
        tracing::warn!("backend answered 401; session token cleared");
        self.publish(SessionEvent::Unauthorized);
    }
}

fn with_body<B: Serialize + ?Sized>(request: RequestBuilder, body: Option<&B>) -> RequestBuilder {
    match body {
        Some(body) => request.json(body),
        None => request,
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
