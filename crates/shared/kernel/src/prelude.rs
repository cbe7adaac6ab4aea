//! Everything a page host typically needs in one import.

pub use crate::handoff::ServiceHandoff;
pub use crate::http::{ApiClient, HttpError, HttpErrorExt};
pub use crate::notify::{Notification, NotificationLevel, Notifier};
pub use crate::state::{SiteState, SiteStateError};
pub use gway_domain::config::SiteConfig;
pub use gway_domain::outcome::{FormKind, SubmissionOutcome};
pub use gway_domain::service::LegalService;
