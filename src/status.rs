//! Status Line
//!
//! Transient success/error message shown after a signup attempt. Each message
//! is stamped with a generation; an expiry only hides the message it was issued
//! for, so a timer left over from an earlier message never hides a newer one.

use serde::Serialize;

/// Delay before a shown message is hidden
pub const HIDE_AFTER_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Handle returned by [`StatusLine::show`], redeemed by [`StatusLine::expire`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    current: Option<StatusMessage>,
    generation: u64,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: StatusMessage) -> StatusTicket {
        self.generation += 1;
        self.current = Some(message);
        StatusTicket(self.generation)
    }

    /// Hide the message if `ticket` still belongs to it. Returns whether it was hidden.
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Class list for the message element
    pub fn css_class(&self) -> &'static str {
        match &self.current {
            Some(message) => message.kind.css_class(),
            None => "hidden",
        }
    }
}
