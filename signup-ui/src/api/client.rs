//! HTTP API Client
//!
//! gloo-net implementation of the board's `ActivityApi`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use signup_board::client::{interpret_catalog, interpret_reply};
use signup_board::{ActivityApi, ActivityCatalog, ApiError, Endpoints, ReplyBody};

/// Local storage key holding an alternative API base URL
pub const API_URL_KEY: &str = "signup_api_url";

/// Get the API base URL from local storage, or same-origin when unset
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_default()
}

/// Activities API client backed by `gloo-net` (browser `fetch`)
#[derive(Debug, Clone)]
pub struct GlooApi {
    endpoints: Endpoints,
}

impl GlooApi {
    pub fn new(base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base),
        }
    }

    /// Client rooted at the base URL currently configured in local storage
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;
    Ok((status, text))
}

#[async_trait(?Send)]
impl ActivityApi for GlooApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let response = Request::get(&self.endpoints.activities())
            .send()
            .await
            .map_err(transport_error)?;

        let (status, text) = read_body(response).await?;
        interpret_catalog(status, &text)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        let response = Request::post(&self.endpoints.signup(activity, email))
            .send()
            .await
            .map_err(transport_error)?;

        let (status, text) = read_body(response).await?;
        interpret_reply(status, &text, true)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        let response = Request::delete(&self.endpoints.unregister(activity, email))
            .send()
            .await
            .map_err(transport_error)?;

        let (status, text) = read_body(response).await?;
        interpret_reply(status, &text, false)
    }
}
