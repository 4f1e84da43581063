//! Request URLs for the activities API.

use urlencoding::encode;

/// URL builder rooted at the API base (empty for same-origin requests)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn activities(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    pub fn unregister(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/unregister?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }
}
