//! Activity Board Controller
//!
//! Owns the view-model, the status line and the signup form, and folds the
//! outcome of every request into them. It performs no I/O itself: drivers run
//! the [`crate::tasks`] and hand the outcomes to the `apply_*` methods, so the
//! browser front end and the terminal client share one state machine.

use crate::activity::ParticipantRef;
use crate::status::{StatusLine, StatusMessage, StatusTicket};
use crate::tasks::{RefreshOutcome, SignupOutcome, UnregisterOutcome};
use crate::view::BoardView;

pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_NETWORK_FAILURE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK: &str = "Failed to unregister participant";
pub const UNREGISTER_NETWORK_FAILURE: &str =
    "Failed to unregister participant. See console for details.";

/// Text of the blocking confirmation shown before unregistering
pub fn confirm_prompt(target: &ParticipantRef) -> String {
    format!("Unregister {} from {}?", target.email, target.activity)
}

/// Values of the signup form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected dropdown value; empty means the placeholder option
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

/// Snapshot of the form taken when it is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub activity: String,
}

/// Refresh cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// What a driver has to do after a signup outcome was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupEffects {
    /// Redeem with [`ActivityBoard::expire_status`] once the hide delay elapsed
    pub ticket: StatusTicket,
    /// Whether the catalog must be fetched again
    pub refresh: bool,
}

#[derive(Debug, Clone)]
pub struct ActivityBoard {
    view: BoardView,
    status: StatusLine,
    form: SignupForm,
    phase: RefreshPhase,
}

impl Default for ActivityBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityBoard {
    pub fn new() -> Self {
        Self {
            view: BoardView::new(),
            status: StatusLine::new(),
            form: SignupForm::default(),
            phase: RefreshPhase::Idle,
        }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SignupForm {
        &mut self.form
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn begin_refresh(&mut self) {
        self.phase = RefreshPhase::Loading;
    }

    /// Replace the rendered board with the result of a refresh.
    ///
    /// Outcomes are applied in arrival order; the last one wins.
    pub fn apply_refresh(&mut self, outcome: RefreshOutcome) {
        match outcome {
            RefreshOutcome::Loaded(catalog) => {
                self.view.render_catalog(&catalog);
                self.phase = RefreshPhase::Rendered;
            }
            RefreshOutcome::Failed(_) => {
                self.view.render_failure();
                self.phase = RefreshPhase::Failed;
            }
        }
    }

    /// Read the form as it is right now
    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.form.email.clone(),
            activity: self.form.activity.clone(),
        }
    }

    pub fn apply_signup(&mut self, outcome: SignupOutcome) -> SignupEffects {
        let (message, refresh) = match outcome {
            SignupOutcome::Accepted { message } => {
                self.form.reset();
                (StatusMessage::success(message), true)
            }
            SignupOutcome::Rejected { detail } => (
                StatusMessage::error(detail.unwrap_or_else(|| SIGNUP_FALLBACK.to_string())),
                false,
            ),
            SignupOutcome::Failed(_) => (StatusMessage::error(SIGNUP_NETWORK_FAILURE), false),
        };

        SignupEffects {
            ticket: self.status.show(message),
            refresh,
        }
    }

    pub fn expire_status(&mut self, ticket: StatusTicket) -> bool {
        self.status.expire(ticket)
    }

    /// Fold an unregister outcome into the view. Returns the alert text on failure.
    pub fn apply_unregister(
        &mut self,
        target: &ParticipantRef,
        outcome: UnregisterOutcome,
    ) -> Option<String> {
        match outcome {
            UnregisterOutcome::Removed => {
                self.view.remove_participant(target);
                None
            }
            UnregisterOutcome::Rejected { detail } => {
                Some(detail.unwrap_or_else(|| UNREGISTER_FALLBACK.to_string()))
            }
            UnregisterOutcome::Failed(_) => Some(UNREGISTER_NETWORK_FAILURE.to_string()),
        }
    }
}
