use crate::validation::ValidationErrors;
use std::borrow::Cow;

/// A specialized [`LeadError`] enum of this crate.
#[gway_derive::gway_error]
pub enum LeadError {
    /// The draft failed validation; nothing was sent.
    #[error("Lead form has {count} invalid field(s){}", format_context(.context), count = .errors.len())]
    Invalid { errors: ValidationErrors, context: Option<Cow<'static, str>> },
    /// A submission for this draft is already on the wire.
    #[error("Lead submission already in flight{}", format_context(.context))]
    InFlight { context: Option<Cow<'static, str>> },
    /// Kernel transport setup failed.
    #[error("Lead transport error{}: {source}", format_context(.context))]
    Http { source: gway_kernel::http::HttpError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal lead error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
