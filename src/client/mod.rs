//! Activities API Client
//!
//! The [`ActivityApi`] trait is the seam between the board and a transport.
//! The native build provides [`ReqwestApi`]; the browser front end provides a
//! gloo-net implementation. Futures are not `Send` so both fit a single
//! threaded event loop.

mod endpoints;
#[cfg(feature = "native")]
mod http;

pub use endpoints::Endpoints;
#[cfg(feature = "native")]
pub use http::ReqwestApi;

use async_trait::async_trait;
use serde::Deserialize;
use std::rc::Rc;
use thiserror::Error;

use crate::activity::ActivityCatalog;

/// Body of a signup/unregister response. Fields are absent when the server omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReplyBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

/// Accept only JSON strings; anything else (validation arrays, numbers) counts as absent
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

impl ReplyBody {
    /// Strict decode, used where a success body is required
    pub fn from_json(text: &str) -> Result<Self, ApiError> {
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Decode, falling back to an empty body on malformed input
    pub fn lenient(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }
}

/// Errors returned by an [`ActivityApi`] transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, CORS)
    #[error("Network error: {0}")]
    Transport(String),

    /// A response arrived but its body could not be decoded
    #[error("Parse error: {0}")]
    Decode(String),

    /// The server answered with a non-success status
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, body: ReplyBody },
}

impl ApiError {
    /// Server-supplied body when this is an application-level failure
    pub fn reply(&self) -> Option<&ReplyBody> {
        match self {
            ApiError::Rejected { body, .. } => Some(body),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}

/// Map a catalog response onto the client's result type
pub fn interpret_catalog(status: u16, text: &str) -> Result<ActivityCatalog, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected {
            status,
            body: ReplyBody::lenient(text),
        });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a signup/unregister response onto the client's result type.
///
/// Error bodies are always read leniently; `body_required` decides whether a
/// malformed success body is a decode failure.
pub fn interpret_reply(status: u16, text: &str, body_required: bool) -> Result<ReplyBody, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected {
            status,
            body: ReplyBody::lenient(text),
        });
    }
    if body_required {
        ReplyBody::from_json(text)
    } else {
        Ok(ReplyBody::lenient(text))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Operations the board needs from the activities API
#[async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn sign_up(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError>;

    /// `DELETE /activities/{activity}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError>;
}

#[async_trait(?Send)]
impl<T: ActivityApi + ?Sized> ActivityApi for &T {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        (**self).fetch_activities().await
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        (**self).sign_up(activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        (**self).unregister(activity, email).await
    }
}

#[async_trait(?Send)]
impl<T: ActivityApi + ?Sized> ActivityApi for Rc<T> {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        (**self).fetch_activities().await
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        (**self).sign_up(activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        (**self).unregister(activity, email).await
    }
}
