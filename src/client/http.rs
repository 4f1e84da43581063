//! Native transport over reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{interpret_catalog, interpret_reply, ActivityApi, ApiError, Endpoints, ReplyBody};
use crate::activity::ActivityCatalog;
use crate::config::ApiConfig;

/// Activities API client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: Client,
    endpoints: Endpoints,
}

impl ReqwestApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(transport_error)?;

        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status().as_u16();
    let text = response.text().await.map_err(transport_error)?;
    Ok((status, text))
}

#[async_trait(?Send)]
impl ActivityApi for ReqwestApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = self.endpoints.activities();
        tracing::debug!(%url, "Fetching activities");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let (status, text) = read_body(response).await?;
        interpret_catalog(status, &text)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        let url = self.endpoints.signup(activity, email);
        tracing::debug!(%url, "Submitting signup");

        let response = self.client.post(&url).send().await.map_err(transport_error)?;
        let (status, text) = read_body(response).await?;
        interpret_reply(status, &text, true)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ReplyBody, ApiError> {
        let url = self.endpoints.unregister(activity, email);
        tracing::debug!(%url, "Submitting unregister");

        let response = self.client.delete(&url).send().await.map_err(transport_error)?;
        let (status, text) = read_body(response).await?;
        interpret_reply(status, &text, false)
    }
}
