use std::borrow::Cow;

/// A specialized [`NewsletterError`] enum of this crate.
#[gway_derive::gway_error]
pub enum NewsletterError {
    /// The address does not look like an email; nothing was sent.
    #[error("Newsletter email rejected{}: {message}", format_context(.context))]
    InvalidEmail { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A subscription request is already on the wire.
    #[error("Newsletter subscription already in flight{}", format_context(.context))]
    InFlight { context: Option<Cow<'static, str>> },
    /// Kernel transport setup failed.
    #[error("Newsletter transport error{}: {source}", format_context(.context))]
    Http { source: gway_kernel::http::HttpError, context: Option<Cow<'static, str>> },
}
