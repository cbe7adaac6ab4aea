use crate::client::SubscriptionSink;
use crate::error::NewsletterError;
use gway_domain::outcome::{FormKind, SubmissionOutcome};
use gway_kernel::notify::Notifier;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::{debug, warn};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const ALREADY_SUBSCRIBED: &str = "This email is already subscribed";

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

/// Single-field subscription form.
#[derive(Debug)]
pub struct NewsletterForm<S> {
    sink: S,
    notifier: Option<Notifier>,
    email: String,
    error: Option<Cow<'static, str>>,
    submitting: bool,
}

impl<S: SubscriptionSink> NewsletterForm<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink, notifier: None, email: String::new(), error: None, submitting: false }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Inline message under the field, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_email(&mut self, value: &str) {
        value.clone_into(&mut self.email);
    }

    /// Validates the address and marks the form as submitting.
    ///
    /// Returns the trimmed address to send. The form stays in flight until
    /// [`Self::finish`] is called.
    ///
    /// # Errors
    /// [`NewsletterError::InFlight`] while a previous address is unfinished;
    /// [`NewsletterError::InvalidEmail`] when the address is malformed.
    pub fn begin_submit(&mut self) -> Result<String, NewsletterError> {
        if self.submitting {
            return Err(NewsletterError::InFlight { context: None });
        }

        self.error = None;
        let email = self.email.trim().to_owned();
        if !is_valid_email(&email) {
            debug!("Newsletter email rejected locally");
            self.error = Some(INVALID_EMAIL.into());
            return Err(NewsletterError::InvalidEmail { message: INVALID_EMAIL.into(), context: None });
        }

        self.submitting = true;
        Ok(email)
    }

    /// Records the outcome of a pending subscription. The field is cleared
    /// whatever the outcome.
    pub fn finish(&mut self, outcome: &SubmissionOutcome) {
        self.submitting = false;
        self.email.clear();
        match outcome {
            SubmissionOutcome::Success => {},
            SubmissionOutcome::Conflict => self.error = Some(ALREADY_SUBSCRIBED.into()),
            SubmissionOutcome::Failure(message) => warn!(reason = %message, "Newsletter subscription failed"),
        }
        if let Some(notifier) = &self.notifier {
            notifier.present(FormKind::Newsletter, outcome);
        }
    }

    /// Validates, subscribes through the sink and records the outcome.
    ///
    /// # Errors
    /// See [`Self::begin_submit`]; no request is made in either case.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, NewsletterError> {
        let email = self.begin_submit()?;
        let outcome = self.sink.subscribe(&email).await;
        self.finish(&outcome);
        Ok(outcome)
    }
}
