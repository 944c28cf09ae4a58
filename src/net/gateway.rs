//! Request gateway: uniform HTTP dispatch with the base address and auth
//! header applied automatically.
//!
//! ERROR HANDLING
//! ==============
//! No retry, backoff, or timeout lives here. A failed dispatch returns an
//! `ApiError` and the calling store decides how to react. The gateway owns
//! no business state: the `Authorization` header is resolved from the
//! durable token slot at each dispatch rather than kept as a mutable
//! default, so logout only has to clear the slot.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::storage;

/// Backend base address. Override at compile time with `FINBOARD_API_URL`.
pub const BASE_URL: &str = match option_env!("FINBOARD_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000/api/",
};

/// Join a base address and an endpoint path, normalizing slashes.
fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Absolute URL for an endpoint path under [`BASE_URL`].
pub fn endpoint(path: &str) -> String {
    join(BASE_URL, path)
}

/// `Authorization` value for a token. The backend authenticates with DRF
/// TokenAuthentication, whose scheme is `Token <key>`.
pub fn authorization(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Token {t}"))
}

/// `Authorization` value resolved from the durable slot at dispatch time.
pub fn current_authorization() -> Option<String> {
    authorization(storage::token().as_deref())
}

/// Failure modes of a gateway dispatch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("server returned {code}")]
    Status { code: u16, body: String },
    /// A body failed to encode or the response did not match the expected shape.
    #[error("malformed payload: {0}")]
    Decode(String),
    /// HTTP is not available off-browser (native tests, server rendering).
    #[error("http not available in this environment")]
    Unavailable,
}

impl ApiError {
    /// Whether this is a 401-class rejection that should end the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { code: 401 | 403, .. })
    }
}

#[cfg(feature = "hydrate")]
fn apply_auth(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match current_authorization() {
        Some(value) => req.header("Authorization", &value),
        None => req,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let code = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { code, body });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_unit(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        let code = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { code, body })
    }
}

/// GET a JSON payload.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-success status, or a
/// body that does not decode as `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = apply_auth(gloo_net::http::Request::get(&endpoint(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// GET a JSON payload with query parameters.
///
/// # Errors
///
/// Same contract as [`get_json`].
pub async fn get_json_with_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&endpoint(path))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let resp = apply_auth(req)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body and decode a JSON response.
///
/// # Errors
///
/// Same contract as [`get_json`], plus `Decode` if the body fails to encode.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = apply_auth(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// POST without a body and decode a JSON response.
///
/// # Errors
///
/// Same contract as [`get_json`].
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = apply_auth(gloo_net::http::Request::post(&endpoint(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// POST without a body, status check only.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn post_unit(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = apply_auth(gloo_net::http::Request::post(&endpoint(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body, status check only.
///
/// # Errors
///
/// Same contract as [`post_unit`], plus `Decode` if the body fails to encode.
pub async fn post_unit_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = apply_auth(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// PUT a JSON body and decode a JSON response.
///
/// # Errors
///
/// Same contract as [`post_json`].
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = apply_auth(gloo_net::http::Request::put(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// DELETE, status check only.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = apply_auth(gloo_net::http::Request::delete(&endpoint(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
