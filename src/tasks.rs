//! Request Tasks
//!
//! One async function per user-visible request. Each returns a typed outcome
//! instead of an error so the board handles every path in `apply_*`.

use crate::activity::{ActivityCatalog, ParticipantRef};
use crate::board::SignupRequest;
use crate::client::{ActivityApi, ApiError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Loaded(ActivityCatalog),
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// 2xx; `message` is the server text (empty when omitted)
    Accepted { message: String },
    /// Non-2xx with the server's `detail`, if any
    Rejected { detail: Option<String> },
    /// No usable response
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnregisterOutcome {
    Removed,
    /// Non-2xx with the server's `detail`, else its `message`
    Rejected { detail: Option<String> },
    Failed(ApiError),
}

pub async fn load_catalog<A: ActivityApi + ?Sized>(api: &A) -> RefreshOutcome {
    match api.fetch_activities().await {
        Ok(catalog) => {
            tracing::debug!(activities = catalog.len(), "Activities loaded");
            RefreshOutcome::Loaded(catalog)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching activities");
            RefreshOutcome::Failed(e)
        }
    }
}

pub async fn sign_up<A: ActivityApi + ?Sized>(api: &A, request: &SignupRequest) -> SignupOutcome {
    match api.sign_up(&request.activity, &request.email).await {
        Ok(reply) => {
            tracing::info!(activity = %request.activity, email = %request.email, "Signed up");
            SignupOutcome::Accepted {
                message: reply.message.unwrap_or_default(),
            }
        }
        Err(ApiError::Rejected { status, body }) => {
            tracing::warn!(status, detail = ?body.detail, "Signup rejected");
            SignupOutcome::Rejected { detail: body.detail }
        }
        Err(e) => {
            tracing::error!(error = %e, "Error signing up");
            SignupOutcome::Failed(e)
        }
    }
}

pub async fn unregister<A: ActivityApi + ?Sized>(
    api: &A,
    target: &ParticipantRef,
) -> UnregisterOutcome {
    match api.unregister(&target.activity, &target.email).await {
        Ok(_) => {
            tracing::info!(activity = %target.activity, email = %target.email, "Unregistered");
            UnregisterOutcome::Removed
        }
        Err(ApiError::Rejected { status, body }) => {
            tracing::warn!(status, detail = ?body.detail, "Unregister rejected");
            UnregisterOutcome::Rejected {
                detail: body.detail.or(body.message),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Error unregistering");
            UnregisterOutcome::Failed(e)
        }
    }
}
