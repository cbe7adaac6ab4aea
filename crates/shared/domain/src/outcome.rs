use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// The classified result of one submission request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Any 2xx response.
    Success,
    /// The API reported a duplicate (HTTP 409).
    Conflict,
    /// Transport failure or any other status, with a human-readable message.
    Failure(String),
}

impl SubmissionOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Which site form produced an outcome. Drives the notification copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FormKind {
    /// "Join as an attorney" modal on the home page.
    AttorneyApplication,
    /// Footer contact form.
    Contact,
    /// Footer newsletter subscription.
    Newsletter,
}
