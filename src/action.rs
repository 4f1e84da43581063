//! User Actions
//!
//! Clickable elements describe the action they trigger with `data-*`
//! attributes. A single delegated listener reads those attributes back into an
//! [`Action`], so rows rendered after the listener was attached work unchanged.

use std::str::FromStr;

use crate::activity::ParticipantRef;

pub const ATTR_ACTION: &str = "data-action";
pub const ATTR_ACTIVITY: &str = "data-activity";
pub const ATTR_EMAIL: &str = "data-email";
pub const ATTR_INDEX: &str = "data-index";

/// CSS selector matching any element that carries an action
pub const ACTION_SELECTOR: &str = "[data-action]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Submit,
    Unregister,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Submit => "submit",
            ActionKind::Unregister => "unregister",
        }
    }
}

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submit" => Ok(ActionKind::Submit),
            "unregister" => Ok(ActionKind::Unregister),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

/// A decoded user intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the signup form with its current values
    Submit,
    /// Remove one participant row (after confirmation)
    Unregister(ParticipantRef),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Submit => ActionKind::Submit,
            Action::Unregister(_) => ActionKind::Unregister,
        }
    }

    /// Decode an action from element attributes.
    ///
    /// Returns `None` for elements without a known action or with incomplete data.
    pub fn from_attributes<F>(attr: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind: ActionKind = attr(ATTR_ACTION)?.parse().ok()?;

        match kind {
            ActionKind::Submit => Some(Action::Submit),
            ActionKind::Unregister => {
                let email = attr(ATTR_EMAIL).filter(|s| !s.is_empty())?;
                let activity = attr(ATTR_ACTIVITY).filter(|s| !s.is_empty())?;
                let position = attr(ATTR_INDEX)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);
                Some(Action::Unregister(ParticipantRef::new(activity, email, position)))
            }
        }
    }
}
